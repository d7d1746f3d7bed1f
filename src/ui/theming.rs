// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes of the site.
//!
//! Dark mode is the candle-lit night the site was designed for. Light mode
//! sets the same sections on pale parchment with ink text.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::Deserialize;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub accent: Color,

    // Manuscript colors (the parchment looks the same in both modes)
    pub parchment: Color,
    pub ink: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Parchment surfaces with ink text.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::PARCHMENT_100,
            surface_secondary: palette::PARCHMENT_300,
            surface_tertiary: palette::PARCHMENT_500,

            text_primary: palette::INK_900,
            text_secondary: palette::INK_700,

            brand_primary: palette::GOLD_700,
            brand_secondary: palette::GOLD_500,
            accent: palette::EMBER_500,

            parchment: palette::PARCHMENT_100,
            ink: palette::INK_900,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::NIGHT_900
            },
            overlay_text: palette::PARCHMENT_100,
        }
    }

    /// Night surfaces with gold and parchment text.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::NIGHT_900,
            surface_secondary: palette::NIGHT_800,
            surface_tertiary: palette::NIGHT_700,

            text_primary: palette::PARCHMENT_100,
            text_secondary: palette::PARCHMENT_500,

            brand_primary: palette::GOLD_500,
            brand_secondary: palette::GOLD_300,
            accent: palette::EMBER_300,

            parchment: palette::PARCHMENT_100,
            ink: palette::INK_900,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::PARCHMENT_100,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves `System` once, so the page does not change under the reader.
    #[must_use]
    pub fn resolve(self) -> Self {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Built-in iced theme the widgets fall back to.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
