// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all sections.

pub mod button;
pub mod container;

use iced::Color;

/// Multiplies the alpha of `color` by `alpha`.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
