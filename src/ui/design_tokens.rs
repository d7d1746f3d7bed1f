// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the site's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (night, parchment, ink, gold, ember)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use belmonts::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Veil behind the lightbox
let veil = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::NIGHT_900
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all sections
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;

    // Night sky backdrop
    pub const NIGHT_900: Color = Color::from_rgb(0.04, 0.03, 0.03);
    pub const NIGHT_800: Color = Color::from_rgb(0.10, 0.08, 0.06);
    pub const NIGHT_700: Color = Color::from_rgb(0.16, 0.12, 0.09);

    // Stone, for frames and card backs
    pub const STONE_600: Color = Color::from_rgb(0.29, 0.25, 0.21);
    pub const STONE_400: Color = Color::from_rgb(0.48, 0.43, 0.37);

    // Bronze, for the constellation curves
    pub const BRONZE_500: Color = Color::from_rgb(0.545, 0.451, 0.333);

    // Parchment
    pub const PARCHMENT_100: Color = Color::from_rgb(0.96, 0.89, 0.74);
    pub const PARCHMENT_300: Color = Color::from_rgb(0.90, 0.80, 0.60);
    pub const PARCHMENT_500: Color = Color::from_rgb(0.79, 0.67, 0.45);

    // Ink
    pub const INK_900: Color = Color::from_rgb(0.17, 0.09, 0.06);
    pub const INK_700: Color = Color::from_rgb(0.30, 0.18, 0.11);

    // Gold leaf (brand)
    pub const GOLD_300: Color = Color::from_rgb(0.95, 0.82, 0.45);
    pub const GOLD_500: Color = Color::from_rgb(0.83, 0.69, 0.22);
    pub const GOLD_700: Color = Color::from_rgb(0.60, 0.47, 0.12);

    // Ember (accents, wax seals)
    pub const EMBER_500: Color = Color::from_rgb(0.55, 0.0, 0.0);
    pub const EMBER_300: Color = Color::from_rgb(0.80, 0.25, 0.15);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Dashed constellation curves
    pub const CONSTELLATION_LINE: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 96.0; // 12 units, between sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Hero
    pub const CREST: f32 = 160.0;

    // Codex
    pub const CODEX_WIDTH: f32 = 960.0;
    pub const CODEX_HEIGHT: f32 = 600.0;
    pub const PLATE_HEIGHT: f32 = 280.0;

    // Members grid
    pub const MEMBER_CARD_WIDTH: f32 = 260.0;
    pub const MEMBER_CARD_HEIGHT: f32 = 360.0;
    pub const PORTRAIT: f32 = 140.0;
    /// Width a grid column needs, card plus gutter.
    pub const MEMBER_COLUMN: f32 = 300.0;
    pub const MEMBER_COLUMNS_MAX: usize = 4;

    // Constellation map
    pub const MAP_HEIGHT: f32 = 640.0;
    pub const STAR_RADIUS: f32 = 14.0;
    /// Hover hit area around a star - WCAG 2.5.5 compliant (44x44 minimum)
    pub const STAR_HIT_RADIUS: f32 = 22.0;
    pub const POPUP_WIDTH: f32 = 280.0;

    // Lightbox
    pub const LIGHTBOX_WIDTH: f32 = 720.0;

    pub const BUTTON_HEIGHT: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the manuscript look.
    //!
    //! - Display: The hero title
    //! - Titles: Section and card headings
    //! - Body: Manuscript and descriptions
    //! - Caption: Years, roles, page ranges

    /// Display - Hero title
    pub const DISPLAY: f32 = 72.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 40.0;

    /// Medium title - Codex and scroll titles
    pub const TITLE_MD: f32 = 26.0;

    /// Small title - Card names, popup titles
    pub const TITLE_SM: f32 = 20.0;

    /// Large body - Motto, manuscript lines
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Descriptions
    pub const BODY: f32 = 15.0;

    /// Caption - Years, roles, page range
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Plate frames, dividers
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Buttons, cards
    pub const WIDTH_MD: f32 = 2.0;

    /// Thick border - Codex binding
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Gold glow around the call-to-action and focused stars.
    pub const GLOW: Shadow = Shadow {
        color: palette::GOLD_500,
        offset: Vector::ZERO,
        blur_radius: 18.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXXL > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::MEMBER_COLUMN > sizing::MEMBER_CARD_WIDTH);
    assert!(sizing::MEMBER_COLUMNS_MAX > 0);
    assert!(sizing::STAR_HIT_RADIUS > sizing::STAR_RADIUS);
    assert!(sizing::PLATE_HEIGHT < sizing::CODEX_HEIGHT);
    assert!(sizing::PORTRAIT < sizing::MEMBER_CARD_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);

    // Color validation
    assert!(palette::GOLD_500.r >= 0.0 && palette::GOLD_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::XXXL, spacing::XXL * 2.0);
    }

    #[test]
    fn parchment_is_lighter_than_ink() {
        assert!(palette::PARCHMENT_100.r > palette::INK_900.r);
        assert!(palette::PARCHMENT_100.g > palette::INK_900.g);
    }
}
