// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct owns the animation engine, the page geometry and the five
//! sections. It forwards section messages, feeds scroll positions and frame
//! ticks to the engine, and routes the engine's events back to the sections
//! that registered them.

pub mod config;
mod message;
pub mod paths;
mod smooth_scroll;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};
pub use smooth_scroll::SmoothScroll;

use crate::animation::{Animator, ScrollTimeline, Settings};
use crate::domain::scroll_lock::ScrollLock;
use crate::ui::assets::Artworks;
use crate::ui::layout::{PageLayout, Target};
use crate::ui::sections::about::About;
use crate::ui::sections::gallery::Gallery;
use crate::ui::sections::hero::Hero;
use crate::ui::sections::members::Members;
use crate::ui::sections::timeline::History;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

const WINDOW_TITLE: &str = "The Belmonts";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    animator: ScrollTimeline<Target>,
    layout: PageLayout,
    /// Last offset reported by the page scrollable.
    scroll_y: f32,
    /// Shared with the codex, which holds it while the lightbox is open.
    scroll_lock: ScrollLock,
    hero: Hero,
    about: About,
    gallery: Gallery,
    members: Members,
    history: History,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    artworks: Artworks,
    smooth_scroll: Option<SmoothScroll>,
    last_tick: Option<Instant>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        // Closing is handled once every animation has been reverted.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(mut flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.take());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, then builds the sections and registers
    /// their animations against the default window size.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let settings = config.motion.settings(flags.reduced_motion);
        let theme_mode = config.general.theme_mode.resolve();
        let app = Self::with_settings(settings, theme_mode);

        tracing::info!(
            registrations = app.animator.len(),
            reduced_motion = settings.reduced_motion,
            time_scale = settings.time_scale,
            theme = ?theme_mode,
            "page mounted"
        );

        (app, Task::none())
    }

    fn with_settings(settings: Settings, theme_mode: ThemeMode) -> Self {
        let scroll_lock = ScrollLock::new();
        let mut app = App {
            animator: ScrollTimeline::new(settings),
            layout: PageLayout::new(Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            )),
            scroll_y: 0.0,
            scroll_lock: scroll_lock.clone(),
            hero: Hero::new(),
            about: About::new(),
            gallery: Gallery::new(scroll_lock),
            members: Members::new(),
            history: History::new(),
            theme_mode,
            colors: ColorScheme::for_mode(theme_mode),
            artworks: Artworks::load(),
            smooth_scroll: None,
            last_tick: None,
        };
        app.mount();
        app
    }

    /// Registers every section's animations and evaluates them at the
    /// current scroll position.
    fn mount(&mut self) {
        let animator: &mut dyn Animator<Target> = &mut self.animator;
        self.hero.mount(animator);
        self.about.mount(animator);
        self.gallery.mount(animator);
        self.members.mount(animator);
        self.history.mount(animator);

        let events = self
            .animator
            .scroll(self.scroll_y, self.layout.viewport().height, &self.layout);
        self.dispatch(events);
    }

    /// Reverts every section's animations. Returns how many registrations
    /// were still live.
    fn revert_all(&mut self) -> usize {
        let animator: &mut dyn Animator<Target> = &mut self.animator;
        self.hero.revert(animator)
            + self.about.revert(animator)
            + self.gallery.revert(animator)
            + self.members.revert(animator)
            + self.history.revert(animator)
    }

    /// Whether frame ticks are needed.
    fn is_animating(&self) -> bool {
        self.animator.is_animating() || self.smooth_scroll.is_some()
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            animator: &self.animator,
            layout: &self.layout,
            colors: &self.colors,
            artworks: &self.artworks,
            locked: self.scroll_lock.is_locked(),
            hero: &self.hero,
            about: &self.about,
            gallery: &self.gallery,
            members: &self.members,
            history: &self.history,
        })
    }
}
