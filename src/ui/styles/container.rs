// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::styles::fade;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Page background of a section. Alternating sections use the secondary
/// surface so the page reads as bands.
pub fn section(scheme: &ColorScheme, alternate: bool) -> impl Fn(&Theme) -> container::Style {
    let background = if alternate {
        scheme.surface_secondary
    } else {
        scheme.surface_primary
    };
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Front face of a member card.
pub fn card_front(scheme: &ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_tertiary;
    let gold = scheme.brand_primary;
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(surface, alpha))),
        text_color: Some(fade(text, alpha)),
        border: Border {
            color: fade(gold, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: fade(shadow::MD.color, alpha),
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Back face of a member card: the parchment the description is written on.
pub fn card_back(scheme: &ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let parchment = scheme.parchment;
    let ink = scheme.ink;
    let gold = scheme.brand_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(parchment, alpha))),
        text_color: Some(fade(ink, alpha)),
        border: Border {
            color: fade(gold, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: fade(shadow::MD.color, alpha),
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Small gold-rimmed badge, used for roles and categories.
pub fn badge(scheme: &ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let ember = scheme.accent;
    let parchment = scheme.parchment;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(ember, alpha))),
        text_color: Some(fade(parchment, alpha)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the lightbox.
pub fn veil(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Lightbox frame.
pub fn lightbox(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let parchment = scheme.parchment;
    let ink = scheme.ink;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(parchment)),
        text_color: Some(ink),
        border: Border {
            color: palette::GOLD_700,
            width: border::WIDTH_LG,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Illuminated plate standing in for a chronicle image.
pub fn plate(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint)),
        text_color: Some(palette::PARCHMENT_100),
        border: Border {
            color: palette::GOLD_700,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
