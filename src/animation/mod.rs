// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven and time-based animation.
//!
//! Views describe their animations as [`Descriptor`]s: a property
//! [`Timeline`] plus a [`Playback`] mode saying what drives its clock.
//! An [`Animator`] owns the registrations, advances them, and answers
//! [`Animator::motion`] queries with the sampled visual state of a target.
//! Views apply that state when they build their widgets, so nothing outside
//! the animator is mutated by an animation.
//!
//! The crate ships one backend, [`ScrollTimeline`].
//!
//! # Example
//!
//! ```
//! use belmonts::animation::{
//!     Animator, Descriptor, Easing, Property, ScrollTimeline, Settings, Timeline, Tween,
//! };
//! use std::time::Duration;
//!
//! let mut animator = ScrollTimeline::new(Settings::default());
//! let handle = animator.register(Descriptor::timed(Timeline::new().from(
//!     "title",
//!     &[(Property::Opacity, 0.0)],
//!     Tween::new(1.0).easing(Easing::Power2Out),
//! )));
//! assert_eq!(animator.motion("title").opacity, 0.0);
//!
//! animator.advance(Duration::from_secs(2));
//! assert_eq!(animator.motion("title").opacity, 1.0);
//! animator.revert(handle);
//! ```

mod easing;
mod engine;
mod motion;
mod scope;
mod stagger;
mod track;
mod trigger;

pub use easing::Easing;
pub use engine::{ScrollTimeline, Settings};
pub use motion::{Motion, Property};
pub use scope::AnimationScope;
pub use stagger::{stagger_offsets, StaggerFrom};
pub use track::{Repeat, Timeline, Track, Tween};
pub use trigger::{Anchor, Edge, Geometry, ScrollWindow, Span, WindowEnd};

/// Identifies one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    #[must_use]
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// What drives the clock of a registered timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Playback<K> {
    /// Plays from registration at wall-clock speed.
    Timed,
    /// Clock follows scroll progress through `window` of `trigger`,
    /// smoothed by the animator's scrub lag. With `pin`, the trigger is held
    /// in place for the length of the window.
    Scrub {
        trigger: K,
        window: ScrollWindow,
        pin: bool,
    },
    /// Fires [`Event::Entered`] once when scrolling reaches the start of
    /// `window`. The timeline, if any, is not played.
    OnEnter { trigger: K, window: ScrollWindow },
}

/// A timeline and what plays it.
#[derive(Debug, Clone)]
pub struct Descriptor<K> {
    pub playback: Playback<K>,
    pub timeline: Timeline<K>,
}

impl<K: Copy + Eq + std::hash::Hash> Descriptor<K> {
    #[must_use]
    pub fn timed(timeline: Timeline<K>) -> Self {
        Self {
            playback: Playback::Timed,
            timeline,
        }
    }

    #[must_use]
    pub fn scrub(trigger: K, window: ScrollWindow, timeline: Timeline<K>) -> Self {
        Self {
            playback: Playback::Scrub {
                trigger,
                window,
                pin: false,
            },
            timeline,
        }
    }

    #[must_use]
    pub fn pinned(trigger: K, window: ScrollWindow, timeline: Timeline<K>) -> Self {
        Self {
            playback: Playback::Scrub {
                trigger,
                window,
                pin: true,
            },
            timeline,
        }
    }

    #[must_use]
    pub fn on_enter(trigger: K, window: ScrollWindow) -> Self {
        Self {
            playback: Playback::OnEnter { trigger, window },
            timeline: Timeline::new(),
        }
    }
}

/// Signals emitted while advancing or scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Scrolling reached the start of an on-enter window.
    Entered(Handle),
    /// A time-based timeline played to its end.
    Completed(Handle),
}

/// Animation backend contract.
///
/// `K` identifies animated elements. Reverting a registration restores the
/// identity state of everything it animated and cancels its pending events.
pub trait Animator<K> {
    fn register(&mut self, descriptor: Descriptor<K>) -> Handle;

    /// Removes a registration. Returns `false` if it was already gone.
    fn revert(&mut self, handle: Handle) -> bool;

    #[must_use]
    fn is_registered(&self, handle: Handle) -> bool;

    /// Sampled visual state of `target` across all registrations.
    #[must_use]
    fn motion(&self, target: K) -> Motion;

    /// Downward offset holding a pinned `trigger` in place, or `0.0`.
    #[must_use]
    fn pin_offset(&self, trigger: K) -> f32;
}
