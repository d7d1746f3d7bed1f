// SPDX-License-Identifier: MPL-2.0
//! Tracks and the timeline builder.
//!
//! A [`Track`] interpolates one property of one target between two values.
//! A [`Timeline`] is an ordered list of tracks laid out on a shared clock,
//! built the same way the motion designs are written down: `from`, `to` and
//! `from_to` tweens appended one after another, or placed at an absolute
//! position with [`Tween::at`].
//!
//! # Composition
//!
//! When several tracks of a timeline drive the same property of the same
//! target, the one that started last wins. Before the first of them starts,
//! that first track holds its `from` value, so an element animated "from
//! opacity 0" stays invisible until its tween begins.

use std::collections::HashMap;
use std::hash::Hash;

use super::easing::Easing;
use super::motion::{Motion, Property};
use super::stagger::{stagger_offsets, StaggerFrom};

/// How a track repeats once it reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    /// Restarts forever; with `yoyo` every other cycle plays backwards.
    Forever { yoyo: bool },
}

/// Timing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    duration: f32,
    delay: f32,
    easing: Easing,
    repeat: Repeat,
    at: Option<f32>,
}

impl Tween {
    /// A tween lasting `duration` seconds, appended after the previous one.
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            delay: 0.0,
            easing: Easing::Linear,
            repeat: Repeat::Once,
            at: None,
        }
    }

    #[must_use]
    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn repeat_forever(mut self, yoyo: bool) -> Self {
        self.repeat = Repeat::Forever { yoyo };
        self
    }

    /// Places the tween at an absolute position of the timeline instead of
    /// after the previous one.
    #[must_use]
    pub fn at(mut self, position: f32) -> Self {
        self.at = Some(position.max(0.0));
        self
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// One property of one target, interpolated over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track<K> {
    target: K,
    property: Property,
    from: f32,
    to: f32,
    start: f32,
    duration: f32,
    easing: Easing,
    repeat: Repeat,
}

impl<K: Copy> Track<K> {
    #[must_use]
    pub fn target(&self) -> K {
        self.target
    }

    #[must_use]
    pub fn property(&self) -> Property {
        self.property
    }

    #[must_use]
    pub fn start(&self) -> f32 {
        self.start
    }

    /// End of the first cycle. Infinite tracks keep going past it.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self.repeat, Repeat::Forever { .. })
    }

    /// Value of the property at timeline time `time`.
    #[must_use]
    pub fn value_at(&self, time: f32) -> f32 {
        let local = time - self.start;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 {
            return self.to;
        }
        let progress = match self.repeat {
            Repeat::Once => (local / self.duration).min(1.0),
            Repeat::Forever { yoyo } => {
                let cycles = local / self.duration;
                let completed = cycles.floor();
                let fraction = cycles - completed;
                if yoyo && completed as u64 % 2 == 1 {
                    1.0 - fraction
                } else {
                    fraction
                }
            }
        };
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

/// Ordered tracks on a shared clock.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    tracks: Vec<Track<K>>,
    index: HashMap<K, Vec<usize>>,
    cursor: f32,
}

impl<K: Copy + Eq + Hash> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> Timeline<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            index: HashMap::new(),
            cursor: 0.0,
        }
    }

    /// Animates `target` from `values` to its current state.
    #[must_use]
    pub fn from(mut self, target: K, values: &[(Property, f32)], tween: Tween) -> Self {
        let start = self.place(&tween);
        for &(property, from) in values {
            let to = self.current(target, property);
            self.push(target, property, from, to, start, tween);
        }
        self
    }

    /// Animates `target` from its current state to `values`.
    #[must_use]
    pub fn to(mut self, target: K, values: &[(Property, f32)], tween: Tween) -> Self {
        let start = self.place(&tween);
        for &(property, to) in values {
            let from = self.current(target, property);
            self.push(target, property, from, to, start, tween);
        }
        self
    }

    /// Animates `target` between explicit values. Properties missing from
    /// `to` animate back to their current state.
    #[must_use]
    pub fn from_to(
        mut self,
        target: K,
        from: &[(Property, f32)],
        to: &[(Property, f32)],
        tween: Tween,
    ) -> Self {
        let start = self.place(&tween);
        for &(property, from_value) in from {
            let to_value = to
                .iter()
                .find(|(p, _)| *p == property)
                .map_or_else(|| self.current(target, property), |(_, v)| *v);
            self.push(target, property, from_value, to_value, start, tween);
        }
        self
    }

    /// Same tween applied to every target, each starting `each` seconds
    /// after the previous one.
    #[must_use]
    pub fn stagger_from(
        mut self,
        targets: impl IntoIterator<Item = K>,
        values: &[(Property, f32)],
        tween: Tween,
        each: f32,
    ) -> Self {
        let targets: Vec<K> = targets.into_iter().collect();
        let start = self.place(&tween);
        let offsets = stagger_offsets(targets.len(), each, StaggerFrom::Start);
        for (target, offset) in targets.into_iter().zip(offsets) {
            for &(property, from) in values {
                let to = self.current(target, property);
                self.push(target, property, from, to, start + offset, tween);
            }
        }
        self
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track<K>] {
        &self.tracks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether any track repeats forever.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.tracks.iter().any(Track::is_infinite)
    }

    /// Time at which every finite track has ended and every infinite track
    /// has started.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.tracks
            .iter()
            .map(|track| {
                if track.is_infinite() {
                    track.start
                } else {
                    track.end()
                }
            })
            .fold(0.0, f32::max)
    }

    /// Whether `target` is driven by this timeline.
    #[must_use]
    pub fn drives(&self, target: K) -> bool {
        self.index.contains_key(&target)
    }

    /// Distinct targets, in the order they were first animated.
    pub fn targets(&self) -> impl Iterator<Item = K> + '_ {
        let mut seen = Vec::new();
        self.tracks.iter().filter_map(move |track| {
            if seen.contains(&track.target) {
                None
            } else {
                seen.push(track.target);
                Some(track.target)
            }
        })
    }

    /// Writes the properties this timeline drives on `target` at `clock`
    /// into `motion`. With `hold_repeats`, infinite tracks stay on their
    /// first frame.
    pub fn sample_into(&self, target: K, clock: f32, hold_repeats: bool, motion: &mut Motion) {
        let Some(indices) = self.index.get(&target) else {
            return;
        };
        for property in Property::ALL {
            let mut chosen: Option<&Track<K>> = None;
            for track in indices.iter().map(|&i| &self.tracks[i]) {
                if track.property != property {
                    continue;
                }
                if chosen.is_none() || track.start <= clock {
                    chosen = Some(track);
                }
            }
            if let Some(track) = chosen {
                let time = if hold_repeats && track.is_infinite() {
                    clock.min(track.start)
                } else {
                    clock
                };
                motion.set(property, track.value_at(time));
            }
        }
    }

    fn place(&mut self, tween: &Tween) -> f32 {
        tween.at.unwrap_or(self.cursor) + tween.delay
    }

    /// Value `property` of `target` has after every track added so far.
    fn current(&self, target: K, property: Property) -> f32 {
        self.index
            .get(&target)
            .and_then(|indices| {
                indices
                    .iter()
                    .rev()
                    .map(|&i| &self.tracks[i])
                    .find(|track| track.property == property)
            })
            .map_or(property.identity(), |track| track.to)
    }

    fn push(&mut self, target: K, property: Property, from: f32, to: f32, start: f32, tween: Tween) {
        let track = Track {
            target,
            property,
            from,
            to,
            start,
            duration: tween.duration,
            easing: tween.easing,
            repeat: tween.repeat,
        };
        self.cursor = self.cursor.max(track.end());
        self.index.entry(target).or_default().push(self.tracks.len());
        self.tracks.push(track);
    }
}
