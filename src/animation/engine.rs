// SPDX-License-Identifier: MPL-2.0
//! [`ScrollTimeline`], the animation backend.
//!
//! The engine is driven from outside: [`ScrollTimeline::advance`] on every
//! frame tick and [`ScrollTimeline::scroll`] whenever the page scrolls or is
//! laid out again. Both return the [`Event`]s they produced, so completions
//! are delivered as messages rather than polled.

use std::hash::Hash;
use std::time::Duration;

use super::trigger::Geometry;
use super::{Animator, Descriptor, Event, Handle, Motion, Playback, Timeline};

/// Scrub clocks closer than this to their target are snapped onto it.
const SCRUB_EPSILON: f32 = 1e-3;

/// Engine-wide playback settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Speed multiplier for time-based playback.
    pub time_scale: f32,
    /// Time a scrubbed timeline takes to catch up with the scroll position.
    pub scrub_lag: Duration,
    /// Time-based timelines jump to their end, scrubs follow scroll without
    /// lag and infinite repeats hold their first frame.
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            scrub_lag: Duration::from_secs(1),
            reduced_motion: false,
        }
    }
}

#[derive(Debug)]
struct Registration<K> {
    handle: Handle,
    playback: Playback<K>,
    timeline: Timeline<K>,
    clock: f32,
    /// Clock position matching the scroll offset (scrub only).
    target_clock: f32,
    /// Whether the scrub clock has been placed by a first scroll update.
    synced: bool,
    entered: bool,
    completed: bool,
    pin_offset: f32,
}

impl<K: Copy + Eq + Hash> Registration<K> {
    fn is_running(&self, reduced_motion: bool) -> bool {
        match self.playback {
            Playback::Timed if self.timeline.is_infinite() => {
                !reduced_motion || self.clock < self.timeline.duration()
            }
            Playback::Timed => !self.completed,
            Playback::Scrub { .. } => (self.target_clock - self.clock).abs() > SCRUB_EPSILON,
            Playback::OnEnter { .. } => false,
        }
    }
}

/// Animation backend driven by frame ticks and scroll updates.
#[derive(Debug)]
pub struct ScrollTimeline<K> {
    settings: Settings,
    registrations: Vec<Registration<K>>,
    next_handle: u64,
    scroll_y: f32,
    viewport_height: f32,
}

impl<K: Copy + Eq + Hash> ScrollTimeline<K> {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registrations: Vec::new(),
            next_handle: 1,
            scroll_y: 0.0,
            viewport_height: 0.0,
        }
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Whether any timeline still needs frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let reduced = self.settings.reduced_motion;
        self.registrations.iter().any(|r| r.is_running(reduced))
    }

    /// Moves every clock forward by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Vec<Event> {
        let Settings {
            time_scale,
            scrub_lag,
            reduced_motion,
        } = self.settings;
        let dt = dt.as_secs_f32();
        let lag = if reduced_motion {
            0.0
        } else {
            scrub_lag.as_secs_f32()
        };
        let mut events = Vec::new();

        for registration in &mut self.registrations {
            match registration.playback {
                Playback::Timed => {
                    let duration = registration.timeline.duration();
                    if reduced_motion {
                        registration.clock = registration.clock.max(duration);
                    } else {
                        registration.clock += dt * time_scale;
                    }
                    if !registration.completed
                        && !registration.timeline.is_infinite()
                        && registration.clock >= duration
                    {
                        registration.completed = true;
                        events.push(Event::Completed(registration.handle));
                    }
                }
                Playback::Scrub { .. } => {
                    let gap = registration.target_clock - registration.clock;
                    if lag <= 0.0 || gap.abs() <= SCRUB_EPSILON {
                        registration.clock = registration.target_clock;
                    } else {
                        // Exponential approach, within 2% of the target after `lag`.
                        let step = 1.0 - (-4.0 * dt / lag).exp();
                        registration.clock += gap * step;
                    }
                }
                Playback::OnEnter { .. } => {}
            }
        }
        events
    }

    /// Records a new scroll position and viewport height and updates every
    /// scroll-driven registration.
    pub fn scroll(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        geometry: &impl Geometry<K>,
    ) -> Vec<Event> {
        self.scroll_y = scroll_y;
        self.viewport_height = viewport_height;
        self.refresh(geometry)
    }

    /// Re-evaluates scroll-driven registrations at the last scroll position,
    /// after registrations or the page layout changed.
    pub fn refresh(&mut self, geometry: &impl Geometry<K>) -> Vec<Event> {
        let scroll = self.scroll_y;
        let viewport = self.viewport_height;
        let immediate = self.settings.reduced_motion || self.settings.scrub_lag.is_zero();
        let mut events = Vec::new();

        for registration in &mut self.registrations {
            match registration.playback {
                Playback::Timed => {}
                Playback::Scrub {
                    trigger,
                    window,
                    pin,
                } => {
                    let Some(span) = geometry.span(trigger) else {
                        continue;
                    };
                    let progress = window.progress(span, scroll, viewport);
                    registration.target_clock = progress * registration.timeline.duration();
                    if pin {
                        registration.pin_offset = window.pin_offset(span, scroll, viewport);
                    }
                    if immediate || !registration.synced {
                        registration.clock = registration.target_clock;
                        registration.synced = true;
                    }
                }
                Playback::OnEnter { trigger, window } => {
                    if registration.entered {
                        continue;
                    }
                    let Some(span) = geometry.span(trigger) else {
                        continue;
                    };
                    let (start, _) = window.range(span, viewport);
                    if scroll >= start {
                        registration.entered = true;
                        events.push(Event::Entered(registration.handle));
                    }
                }
            }
        }
        events
    }

    /// Progress of a registration's clock through its timeline, in [0, 1].
    #[must_use]
    pub fn progress(&self, handle: Handle) -> Option<f32> {
        self.find(handle).map(|registration| {
            let duration = registration.timeline.duration();
            if duration <= 0.0 {
                1.0
            } else {
                (registration.clock / duration).clamp(0.0, 1.0)
            }
        })
    }

    fn find(&self, handle: Handle) -> Option<&Registration<K>> {
        self.registrations.iter().find(|r| r.handle == handle)
    }
}

impl<K: Copy + Eq + Hash> Animator<K> for ScrollTimeline<K> {
    fn register(&mut self, descriptor: Descriptor<K>) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        self.registrations.push(Registration {
            handle,
            playback: descriptor.playback,
            timeline: descriptor.timeline,
            clock: 0.0,
            target_clock: 0.0,
            synced: false,
            entered: false,
            completed: false,
            pin_offset: 0.0,
        });
        handle
    }

    fn revert(&mut self, handle: Handle) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.handle != handle);
        self.registrations.len() != before
    }

    fn is_registered(&self, handle: Handle) -> bool {
        self.find(handle).is_some()
    }

    fn motion(&self, target: K) -> Motion {
        let hold = self.settings.reduced_motion;
        let mut motion = Motion::IDENTITY;
        for registration in &self.registrations {
            registration
                .timeline
                .sample_into(target, registration.clock, hold, &mut motion);
        }
        motion
    }

    fn pin_offset(&self, trigger: K) -> f32 {
        self.registrations
            .iter()
            .find_map(|registration| match registration.playback {
                Playback::Scrub {
                    trigger: t,
                    pin: true,
                    ..
                } if t == trigger => Some(registration.pin_offset),
                _ => None,
            })
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Property, ScrollWindow, Span, Tween};

    const VIEWPORT: f32 = 800.0;

    fn geometry(element: u8) -> Option<Span> {
        match element {
            1 => Some(Span::new(1000.0, 400.0)),
            2 => Some(Span::new(800.0, 2000.0)),
            _ => None,
        }
    }

    fn fade_in(target: u8, duration: f32) -> Timeline<u8> {
        Timeline::new().from(target, &[(Property::Opacity, 0.0)], Tween::new(duration))
    }

    fn instant() -> Settings {
        Settings {
            scrub_lag: Duration::ZERO,
            ..Settings::default()
        }
    }

    #[test]
    fn timed_completes_once() {
        let mut engine = ScrollTimeline::new(Settings::default());
        let handle = engine.register(Descriptor::timed(fade_in(1, 1.0)));
        assert!(engine.is_animating());
        assert!(engine.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(
            engine.advance(Duration::from_millis(600)),
            vec![Event::Completed(handle)]
        );
        assert!(engine.advance(Duration::from_millis(600)).is_empty());
        assert!(!engine.is_animating());
        assert_eq!(engine.motion(1).opacity, 1.0);
    }

    #[test]
    fn time_scale_speeds_up_playback() {
        let mut engine = ScrollTimeline::new(Settings {
            time_scale: 2.0,
            ..Settings::default()
        });
        let handle = engine.register(Descriptor::timed(fade_in(1, 1.0)));
        assert_eq!(
            engine.advance(Duration::from_millis(500)),
            vec![Event::Completed(handle)]
        );
    }

    #[test]
    fn revert_restores_identity_and_cancels_completion() {
        let mut engine = ScrollTimeline::new(Settings::default());
        let handle = engine.register(Descriptor::timed(fade_in(1, 1.0)));
        engine.advance(Duration::from_millis(100));
        assert!(engine.motion(1).opacity < 1.0);
        assert!(engine.revert(handle));
        assert!(!engine.revert(handle));
        assert!(!engine.is_registered(handle));
        assert!(engine.motion(1).is_identity());
        assert!(engine.advance(Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn scrub_follows_scroll_without_lag() {
        let mut engine = ScrollTimeline::new(instant());
        let window = ScrollWindow::top(70.0, 50.0);
        engine.register(Descriptor::scrub(1, window, fade_in(1, 1.0)));
        // Window is 440..600.
        engine.scroll(0.0, VIEWPORT, &geometry);
        assert_eq!(engine.motion(1).opacity, 0.0);
        engine.scroll(520.0, VIEWPORT, &geometry);
        assert!((engine.motion(1).opacity - 0.5).abs() < 1e-4);
        engine.scroll(5000.0, VIEWPORT, &geometry);
        assert_eq!(engine.motion(1).opacity, 1.0);
        assert!(!engine.is_animating());
    }

    #[test]
    fn scrub_lag_smooths_catch_up() {
        let mut engine = ScrollTimeline::new(Settings::default());
        let handle = engine.register(Descriptor::scrub(
            1,
            ScrollWindow::top(70.0, 50.0),
            fade_in(1, 1.0),
        ));
        engine.scroll(0.0, VIEWPORT, &geometry);
        engine.scroll(600.0, VIEWPORT, &geometry);
        assert!(engine.is_animating());
        engine.advance(Duration::from_millis(100));
        let partial = engine.progress(handle).unwrap_or_default();
        assert!(partial > 0.0 && partial < 1.0);
        for _ in 0..120 {
            engine.advance(Duration::from_millis(16));
        }
        assert_eq!(engine.progress(handle), Some(1.0));
        assert!(!engine.is_animating());
    }

    #[test]
    fn on_enter_fires_exactly_once() {
        let mut engine = ScrollTimeline::new(Settings::default());
        let handle = engine.register(Descriptor::on_enter(1, ScrollWindow::top(60.0, 40.0)));
        // Start is 1000 - 480 = 520.
        assert!(engine.scroll(500.0, VIEWPORT, &geometry).is_empty());
        assert_eq!(
            engine.scroll(530.0, VIEWPORT, &geometry),
            vec![Event::Entered(handle)]
        );
        assert!(engine.scroll(0.0, VIEWPORT, &geometry).is_empty());
        assert!(engine.scroll(900.0, VIEWPORT, &geometry).is_empty());
    }

    #[test]
    fn refresh_fires_for_late_registrations() {
        let mut engine = ScrollTimeline::new(Settings::default());
        engine.scroll(900.0, VIEWPORT, &geometry);
        let handle = engine.register(Descriptor::on_enter(1, ScrollWindow::top(60.0, 40.0)));
        assert_eq!(engine.refresh(&geometry), vec![Event::Entered(handle)]);
    }

    #[test]
    fn pin_offset_tracks_window() {
        let mut engine = ScrollTimeline::new(instant());
        engine.register(Descriptor::pinned(
            2,
            ScrollWindow::pinned(150.0),
            fade_in(2, 1.0),
        ));
        engine.scroll(400.0, VIEWPORT, &geometry);
        assert_eq!(engine.pin_offset(2), 0.0);
        engine.scroll(1100.0, VIEWPORT, &geometry);
        assert_eq!(engine.pin_offset(2), 300.0);
        engine.scroll(4000.0, VIEWPORT, &geometry);
        assert_eq!(engine.pin_offset(2), 1200.0);
        assert_eq!(engine.pin_offset(1), 0.0);
    }

    #[test]
    fn missing_trigger_is_skipped() {
        let mut engine = ScrollTimeline::new(instant());
        engine.register(Descriptor::scrub(9, ScrollWindow::top(70.0, 50.0), fade_in(9, 1.0)));
        assert!(engine.scroll(1000.0, VIEWPORT, &geometry).is_empty());
        assert_eq!(engine.motion(9).opacity, 0.0);
    }

    #[test]
    fn reduced_motion_jumps_to_end() {
        let mut engine = ScrollTimeline::new(Settings {
            reduced_motion: true,
            ..Settings::default()
        });
        let handle = engine.register(Descriptor::timed(fade_in(1, 3.0)));
        assert_eq!(
            engine.advance(Duration::from_millis(16)),
            vec![Event::Completed(handle)]
        );
        assert_eq!(engine.motion(1).opacity, 1.0);
    }

    #[test]
    fn reduced_motion_stops_infinite_repeats() {
        let timeline = Timeline::new()
            .from(1, &[(Property::Opacity, 0.0)], Tween::new(1.0))
            .to(
                1,
                &[(Property::TranslateY, -8.0)],
                Tween::new(2.5).repeat_forever(true),
            );
        let mut relaxed = ScrollTimeline::new(Settings::default());
        relaxed.register(Descriptor::timed(timeline.clone()));
        relaxed.advance(Duration::from_secs(2));
        assert!(relaxed.is_animating());
        assert!(relaxed.motion(1).translate_y < 0.0);

        let mut reduced = ScrollTimeline::new(Settings {
            reduced_motion: true,
            ..Settings::default()
        });
        reduced.register(Descriptor::timed(timeline));
        reduced.advance(Duration::from_millis(16));
        assert!(!reduced.is_animating());
        assert_eq!(reduced.motion(1).translate_y, 0.0);
        assert_eq!(reduced.motion(1).opacity, 1.0);
    }

    #[test]
    fn later_registration_overrides_earlier() {
        let mut engine = ScrollTimeline::new(Settings::default());
        engine.register(Descriptor::timed(fade_in(1, 1.0)));
        engine.advance(Duration::from_secs(2));
        engine.register(Descriptor::timed(
            Timeline::new().to(1, &[(Property::Opacity, 0.25)], Tween::new(0.0)),
        ));
        engine.advance(Duration::from_millis(1));
        assert_eq!(engine.motion(1).opacity, 0.25);
    }
}
