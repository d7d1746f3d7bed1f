// SPDX-License-Identifier: MPL-2.0
//! Easing curves.
//!
//! Every curve maps `t` in [0, 1] to an output with `f(0) = 0` and `f(1) = 1`.
//! `BackOut` overshoots past 1 before settling. Names follow the power scale
//! used by the site's motion design: `Power1` is quadratic, `Power2` cubic,
//! `Power3` quartic.

use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    /// Default curve of unspecified scroll tweens.
    Power1Out,
    Power1InOut,
    Power2Out,
    Power2InOut,
    Power3Out,
    SineInOut,
    /// Overshoots by the given amount, then settles.
    BackOut(f32),
}

impl Easing {
    /// Applies the curve to `t`, clamped to [0, 1].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => out(t, 2),
            Easing::Power1InOut => in_out(t, 2),
            Easing::Power2Out => out(t, 3),
            Easing::Power2InOut => in_out(t, 3),
            Easing::Power3Out => out(t, 4),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

fn out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        2f32.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::Power1Out,
        Easing::Power1InOut,
        Easing::Power2Out,
        Easing::Power2InOut,
        Easing::Power3Out,
        Easing::SineInOut,
        Easing::BackOut(1.5),
    ];

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(approx(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(approx(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn in_out_curves_are_symmetric() {
        for easing in [Easing::Power1InOut, Easing::Power2InOut, Easing::SineInOut] {
            assert!(approx(easing.apply(0.5), 0.5), "{easing:?}");
            let a = easing.apply(0.2);
            let b = easing.apply(0.8);
            assert!(approx(a + b, 1.0), "{easing:?}");
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Easing::Power1Out.apply(0.3) > 0.3);
        assert!(Easing::Power2Out.apply(0.3) > Easing::Power1Out.apply(0.3));
        assert!(Easing::Power3Out.apply(0.3) > Easing::Power2Out.apply(0.3));
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.5).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }
}
