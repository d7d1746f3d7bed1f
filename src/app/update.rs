// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every update ends by re-evaluating the scroll-driven animations and
//! routing the engine's events to the sections. Routing may register new
//! animations (the codex cover once the open trigger fires), which is why
//! dispatching loops until the engine has nothing left to report.

use super::{App, Message, Shortcut, SmoothScroll};
use crate::animation::Event;
use crate::ui::layout::{PageLayout, Section};
use crate::ui::sections::{gallery, hero};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{window, Size, Task};
use std::time::{Duration, Instant};

/// Identifier of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Longest step the engine is advanced by in one tick. Longer gaps (the
/// window was hidden, the tick just resumed) are treated as one frame.
pub const MAX_TICK: Duration = Duration::from_millis(100);

/// Rounds of event routing per update before giving up.
const MAX_DISPATCH_ROUNDS: usize = 4;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Hero(message) => self.handle_hero_message(message),
            Message::Gallery(message) => {
                self.gallery.update(message, &mut self.animator);
                Task::none()
            }
            Message::Members(message) => {
                self.members.update(message);
                Task::none()
            }
            Message::Timeline(message) => {
                self.history.update(message);
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.handle_scrolled(viewport);
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
            Message::WindowResized(size) => {
                self.handle_resize(size);
                Task::none()
            }
            Message::Shortcut(shortcut) => {
                self.handle_shortcut(shortcut);
                Task::none()
            }
            Message::WindowCloseRequested(id) => return self.handle_close(id),
        };

        let events = self.animator.refresh(&self.layout);
        self.dispatch(events);
        if !self.is_animating() {
            self.last_tick = None;
        }
        task
    }

    /// Routes engine events to the sections, then re-evaluates the scroll
    /// registrations the routing added.
    pub(super) fn dispatch(&mut self, mut events: Vec<Event>) {
        for _ in 0..MAX_DISPATCH_ROUNDS {
            if events.is_empty() {
                return;
            }
            for event in events {
                if !self.gallery.handle_event(event, &mut self.animator) {
                    tracing::trace!(?event, "animation event without owner");
                }
            }
            events = self.animator.refresh(&self.layout);
        }
        if !events.is_empty() {
            tracing::warn!(pending = events.len(), "animation events dropped");
        }
    }

    fn handle_hero_message(&mut self, message: hero::Message) -> Task<Message> {
        match hero::update(message) {
            hero::Event::None => Task::none(),
            hero::Event::ScrollToAbout => self.scroll_to(self.layout.top(Section::About)),
        }
    }

    fn handle_scrolled(&mut self, viewport: Viewport) {
        self.scroll_y = viewport.absolute_offset().y;
        let events = self.animator.scroll(
            self.scroll_y,
            self.layout.viewport().height,
            &self.layout,
        );
        self.dispatch(events);
    }

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        let dt = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
            .min(MAX_TICK);
        self.last_tick = Some(now);

        let events = self.animator.advance(dt);
        self.dispatch(events);

        let Some(scroll) = self.smooth_scroll.as_mut() else {
            return Task::none();
        };
        let (offset, done) = scroll.step(dt);
        if done {
            self.smooth_scroll = None;
        }
        self.snap_page(offset)
    }

    fn handle_resize(&mut self, size: Size) {
        let layout = PageLayout::new(size);
        if layout == self.layout {
            return;
        }
        tracing::debug!(
            width = size.width,
            height = size.height,
            columns = layout.member_columns(),
            "page laid out"
        );
        self.layout = layout;
        self.scroll_y = self.scroll_y.min(layout.max_scroll());
        let events = self
            .animator
            .scroll(self.scroll_y, layout.viewport().height, &self.layout);
        self.dispatch(events);
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::CloseLightbox => {
                self.gallery
                    .update(gallery::Message::CloseLightbox, &mut self.animator);
            }
            Shortcut::Flip(direction) => {
                if self.gallery.codex().selection().is_none() {
                    self.gallery
                        .update(gallery::Message::Flip(direction), &mut self.animator);
                }
            }
        }
    }

    fn handle_close(&mut self, id: window::Id) -> Task<Message> {
        let reverted = self.revert_all();
        self.smooth_scroll = None;
        tracing::info!(reverted, "animations reverted, closing");
        window::close(id)
    }

    /// Starts an eased scroll of the page to `offset`. Jumps straight there
    /// with reduced motion.
    fn scroll_to(&mut self, offset: f32) -> Task<Message> {
        let target = offset.clamp(0.0, self.layout.max_scroll());
        if self.scroll_lock.is_locked() {
            return Task::none();
        }
        if self.animator.settings().reduced_motion {
            self.smooth_scroll = None;
            return self.snap_page(target);
        }
        self.smooth_scroll = Some(SmoothScroll::new(self.scroll_y, target));
        Task::none()
    }

    fn snap_page(&self, offset: f32) -> Task<Message> {
        let max = self.layout.max_scroll();
        let y = if max > 0.0 { offset / max } else { 0.0 };
        operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: y.clamp(0.0, 1.0),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Animator, Motion, Settings};
    use crate::domain::codex::{BookState, FlipDirection};
    use crate::ui::layout::Target;
    use crate::ui::sections::{members, timeline};
    use crate::ui::theming::ThemeMode;

    fn app(settings: Settings) -> App {
        App::with_settings(
            Settings {
                scrub_lag: Duration::ZERO,
                ..settings
            },
            ThemeMode::Dark,
        )
    }

    /// Moves the page as the scrollable would, without a real viewport.
    fn scroll(app: &mut App, offset: f32) {
        app.scroll_y = offset;
        let events = app
            .animator
            .scroll(offset, app.layout.viewport().height, &app.layout);
        app.dispatch(events);
    }

    fn tick(app: &mut App, start: Instant, millis: u64) -> Instant {
        let now = start + Duration::from_millis(millis);
        let _ = app.update(Message::Tick(now));
        now
    }

    fn codex_top(app: &App) -> f32 {
        app.layout.codex_top()
    }

    #[test]
    fn every_section_registers_on_mount() {
        let app = app(Settings::default());
        // Hero, About, the codex trigger, eight cards, the map and its stars.
        assert_eq!(app.animator.len(), 1 + 1 + 1 + 8 + 1 + 8);
        assert!(app.is_animating());
    }

    #[test]
    fn scrolling_to_the_codex_plays_the_cover_then_opens() {
        let mut app = app(Settings::default());
        let viewport = app.layout.viewport().height;
        let offset = codex_top(&app) - 0.55 * viewport;
        scroll(&mut app, offset);
        assert_eq!(app.gallery.codex().state(), BookState::Opening);

        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let mut now = start;
        for _ in 0..20 {
            now = tick(&mut app, now, 100);
        }
        assert!(app.gallery.codex().is_open());
        assert_eq!(app.animator.motion(Target::CodexCover), Motion::IDENTITY);
    }

    #[test]
    fn arrow_keys_are_ignored_while_the_lightbox_is_open() {
        let mut app = app(Settings {
            reduced_motion: true,
            ..Settings::default()
        });
        let viewport = app.layout.viewport().height;
        let offset = codex_top(&app) - 0.5 * viewport;
        scroll(&mut app, offset);
        let now = Instant::now();
        let _ = app.update(Message::Tick(now));
        tick(&mut app, now, 16);
        assert!(app.gallery.codex().is_open());

        let _ = app.update(Message::Gallery(gallery::Message::Select(1)));
        assert!(app.scroll_lock.is_locked());
        let _ = app.update(Message::Shortcut(Shortcut::Flip(FlipDirection::Forward)));
        assert!(!app.gallery.codex().is_flipping());

        let _ = app.update(Message::Shortcut(Shortcut::CloseLightbox));
        assert!(!app.scroll_lock.is_locked());
        let _ = app.update(Message::Shortcut(Shortcut::Flip(FlipDirection::Forward)));
        assert!(app.gallery.codex().is_flipping());
    }

    #[test]
    fn enter_the_kingdom_eases_down_to_about() {
        let mut app = app(Settings::default());
        let _ = app.update(Message::Hero(hero::Message::EnterKingdom));
        let destination = app.layout.top(Section::About);
        assert_eq!(
            app.smooth_scroll.map(|scroll| scroll.destination()),
            Some(destination)
        );

        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let mut now = start;
        for _ in 0..10 {
            now = tick(&mut app, now, 100);
        }
        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn reduced_motion_jumps_to_about() {
        let mut app = app(Settings {
            reduced_motion: true,
            ..Settings::default()
        });
        let _ = app.update(Message::Hero(hero::Message::EnterKingdom));
        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn long_gaps_between_ticks_are_capped() {
        let mut app = app(Settings::default());
        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + Duration::from_secs(5)));
        // Only one capped step has passed: the title is still on its delay.
        assert_eq!(app.animator.motion(Target::HeroTitle).opacity, 0.0);
    }

    #[test]
    fn resizing_re_lays_out_the_page() {
        let mut app = app(Settings::default());
        let _ = app.update(Message::WindowResized(Size::new(720.0, 600.0)));
        assert_eq!(app.layout.viewport(), Size::new(720.0, 600.0));
        assert_eq!(app.layout.member_columns(), 2);
    }

    #[test]
    fn hover_messages_reach_their_sections() {
        let mut app = app(Settings::default());
        let _ = app.update(Message::Members(members::Message::CardEntered(1)));
        let _ = app.update(Message::Timeline(timeline::Message::Focus(Some(2))));
        assert_eq!(app.members.hovered(), Some(1));
        assert_eq!(app.history.focused(), Some(2));
    }

    #[test]
    fn closing_reverts_every_animation() {
        let mut app = app(Settings::default());
        let _ = app.update(Message::Gallery(gallery::Message::Select(1)));
        let _ = app.revert_all();
        assert!(!app.scroll_lock.is_locked());
        assert!(app.animator.is_empty());
        assert!(!app.is_animating());
        assert_eq!(app.animator.motion(Target::HeroTitle), Motion::IDENTITY);
    }

    #[test]
    fn stars_share_the_map_trigger() {
        let app = app(Settings::default());
        let map = app.animator.motion(Target::Map);
        assert_eq!(map.opacity, 0.0);
        assert_eq!(app.animator.motion(Target::Star(3)).scale, 0.0);
    }
}
