// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::codex::FlipDirection;
use crate::ui::sections::{gallery, hero, members, timeline};
use iced::keyboard::{self, key::Named};
use iced::widget::scrollable::Viewport;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Hero(hero::Message),
    Gallery(gallery::Message),
    Members(members::Message),
    Timeline(timeline::Message),
    /// The page scrollable moved.
    Scrolled(Viewport),
    /// Frame tick while something is animating.
    Tick(Instant),
    WindowResized(Size),
    Shortcut(Shortcut),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Keyboard shortcuts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    CloseLightbox,
    Flip(FlipDirection),
}

impl Shortcut {
    /// Shortcut bound to `key`, if any.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(Named::Escape) => Some(Shortcut::CloseLightbox),
            keyboard::Key::Named(Named::ArrowLeft) => Some(Shortcut::Flip(FlipDirection::Backward)),
            keyboard::Key::Named(Named::ArrowRight) => Some(Shortcut::Flip(FlipDirection::Forward)),
            _ => None,
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BELMONTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Skip animations regardless of the config file.
    pub reduced_motion: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_flip_and_escape_closes() {
        assert_eq!(
            Shortcut::from_key(&keyboard::Key::Named(Named::Escape)),
            Some(Shortcut::CloseLightbox)
        );
        assert_eq!(
            Shortcut::from_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Shortcut::Flip(FlipDirection::Backward))
        );
        assert_eq!(
            Shortcut::from_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Shortcut::Flip(FlipDirection::Forward))
        );
    }

    #[test]
    fn other_keys_are_unbound() {
        assert_eq!(Shortcut::from_key(&keyboard::Key::Named(Named::Enter)), None);
        assert_eq!(
            Shortcut::from_key(&keyboard::Key::Character("a".into())),
            None
        );
    }
}
