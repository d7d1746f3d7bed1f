// SPDX-License-Identifier: MPL-2.0
//! Start offsets for cascading a tween over a list of targets.
//!
//! # Invariants
//!
//! 1. `stagger_offsets(0, ..)` returns an empty vec.
//! 2. The first offset of [`StaggerFrom::Start`] is always `0.0`.
//! 3. Offsets of [`StaggerFrom::Start`] are non-decreasing; `offset[i] = i * each`.
//! 4. Every offset lies in `[0, (count - 1) * each]`.

/// Which item of the list starts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerFrom {
    #[default]
    Start,
    End,
    /// Items spread outwards from the middle of the list.
    Center,
}

/// Start offsets, in seconds, of `count` items spaced `each` seconds apart.
#[must_use]
pub fn stagger_offsets(count: usize, each: f32, from: StaggerFrom) -> Vec<f32> {
    let each = each.max(0.0);
    let last = count.saturating_sub(1) as f32;
    let middle = last / 2.0;
    (0..count)
        .map(|index| {
            let index = index as f32;
            let steps = match from {
                StaggerFrom::Start => index,
                StaggerFrom::End => last - index,
                StaggerFrom::Center => (index - middle).abs(),
            };
            steps * each
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list() {
        assert!(stagger_offsets(0, 0.1, StaggerFrom::Start).is_empty());
    }

    #[test]
    fn from_start_is_linear_and_monotonic() {
        let offsets = stagger_offsets(5, 0.02, StaggerFrom::Start);
        assert_eq!(offsets[0], 0.0);
        for pair in offsets.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!((offsets[4] - 0.08).abs() < 1e-6);
    }

    #[test]
    fn from_end_reverses() {
        let offsets = stagger_offsets(3, 1.0, StaggerFrom::End);
        assert_eq!(offsets, vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn from_center_spreads_outwards() {
        let offsets = stagger_offsets(5, 1.0, StaggerFrom::Center);
        assert_eq!(offsets, vec![2.0, 1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn negative_spacing_is_treated_as_zero() {
        let offsets = stagger_offsets(3, -1.0, StaggerFrom::Start);
        assert_eq!(offsets, vec![0.0, 0.0, 0.0]);
    }
}
