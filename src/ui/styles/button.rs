// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Styles take the colors they need from a [`ColorScheme`] and an opacity, so
//! buttons can fade in with the section that carries them.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::styles::fade;
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// "Enter the Kingdom": a gold-rimmed button glowing on hover.
pub fn call_to_action(
    scheme: &ColorScheme,
    alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let gold = scheme.brand_primary;
    let text = scheme.brand_secondary;
    move |_theme: &Theme, status: button::Status| {
        let (background, glow) = match status {
            button::Status::Hovered => (fade(gold, opacity::OVERLAY_SUBTLE), shadow::GLOW),
            button::Status::Pressed => (fade(gold, opacity::OVERLAY_MEDIUM), shadow::GLOW),
            _ => (Color::TRANSPARENT, shadow::NONE),
        };

        button::Style {
            background: Some(Background::Color(fade(background, alpha))),
            text_color: fade(text, alpha),
            border: Border {
                color: fade(gold, alpha),
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            shadow: Shadow {
                color: fade(glow.color, alpha),
                ..glow
            },
            snap: true,
        }
    }
}

/// Gallery category button. The active filter is filled with gold.
pub fn filter(scheme: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let gold = scheme.brand_primary;
    let text = scheme.text_primary;
    let surface = scheme.surface_primary;
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match (active, status) {
            (true, _) => (gold, surface),
            (false, button::Status::Hovered) => (fade(gold, opacity::OVERLAY_SUBTLE), text),
            (false, _) => (Color::TRANSPARENT, text),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: gold,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round ❮ / ❯ controls under the codex.
pub fn page_turn(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let gold = scheme.brand_primary;
    let muted = scheme.text_secondary;
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color, border_color) = match status {
            button::Status::Hovered => (fade(gold, opacity::OVERLAY_SUBTLE), gold, gold),
            button::Status::Pressed => (fade(gold, opacity::OVERLAY_MEDIUM), gold, gold),
            button::Status::Disabled => (
                Color::TRANSPARENT,
                fade(muted, opacity::OVERLAY_MEDIUM),
                fade(muted, opacity::OVERLAY_SUBTLE),
            ),
            button::Status::Active => (Color::TRANSPARENT, gold, gold),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Lightbox close button.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::EMBER_500
        })),
        text_color: palette::PARCHMENT_100,
        border: Border {
            color: palette::GOLD_500,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}
