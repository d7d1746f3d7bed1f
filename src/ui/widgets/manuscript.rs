// SPDX-License-Identifier: MPL-2.0
//! The parchment scroll of the About section, unrolled from the top and
//! inked one character at a time.

use crate::animation::Motion;
use crate::domain::chronicle::{LineStyle, ManuscriptLine};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles::fade;
use crate::ui::widgets::lettering::{self, MONO_ADVANCE};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};

/// Widest the parchment gets.
pub const MAX_WIDTH: f32 = 720.0;
/// Height of the wooden rods at both ends of the scroll.
const ROD_HEIGHT: f32 = 14.0;
const SEAL_RADIUS: f32 = 26.0;
const MARGIN: f32 = spacing::XXL;

/// Canvas program drawing the manuscript.
pub struct Manuscript<'a> {
    lines: &'a [ManuscriptLine],
    /// Opacity of every character, per line.
    ink: Vec<Vec<f32>>,
    parchment: Motion,
    colors: Colors,
}

struct Colors {
    parchment: Color,
    ink: Color,
    accent: Color,
    rod: Color,
}

impl<'a> Manuscript<'a> {
    #[must_use]
    pub fn new(
        lines: &'a [ManuscriptLine],
        ink: Vec<Vec<f32>>,
        parchment: Motion,
        scheme: &crate::ui::theming::ColorScheme,
    ) -> Self {
        Self {
            lines,
            ink,
            parchment,
            colors: Colors {
                parchment: scheme.parchment,
                ink: scheme.ink,
                accent: scheme.accent,
                rod: palette::STONE_600,
            },
        }
    }

    fn char_alpha(&self, line: usize, index: usize) -> f32 {
        self.ink
            .get(line)
            .and_then(|alphas| alphas.get(index))
            .copied()
            .unwrap_or(opacity::OPAQUE)
    }
}

fn font_size(style: LineStyle) -> f32 {
    match style {
        LineStyle::Title => typography::TITLE_MD,
        LineStyle::Body | LineStyle::Quote => typography::BODY_LG,
        LineStyle::Signature => typography::BODY,
    }
}

impl<Message> canvas::Program<Message> for Manuscript<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let alpha = self.parchment.alpha();
        let width = bounds.width.min(MAX_WIDTH);
        let left = (bounds.width - width) / 2.0;
        // Unrolls from the top edge.
        let visible = (bounds.height * self.parchment.scale_y.max(0.0)).min(bounds.height);

        frame.fill_rectangle(
            Point::new(left, 0.0),
            Size::new(width, visible),
            fade(self.colors.parchment, alpha),
        );
        for rod_y in [0.0, (visible - ROD_HEIGHT).max(0.0)] {
            frame.fill_rectangle(
                Point::new(left - spacing::XS, rod_y),
                Size::new(width + 2.0 * spacing::XS, ROD_HEIGHT),
                fade(self.colors.rod, alpha),
            );
        }

        let center_x = left + width / 2.0;
        let mut y = ROD_HEIGHT + spacing::LG;

        // Wax seal
        let seal_center = Point::new(center_x, y + SEAL_RADIUS);
        if seal_center.y + SEAL_RADIUS < visible {
            let seal = Path::circle(seal_center, SEAL_RADIUS);
            frame.fill(&seal, fade(self.colors.accent, alpha));
            frame.stroke(
                &seal,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(fade(palette::GOLD_700, alpha)),
            );
            lettering::centered(
                &mut frame,
                "⚔",
                center_x,
                seal_center.y - typography::TITLE_SM / 2.0,
                typography::TITLE_SM,
                fade(self.colors.parchment, alpha),
            );
        }
        y += 2.0 * SEAL_RADIUS + spacing::LG;

        let text_width = (width - 2.0 * MARGIN).max(0.0);
        for (line_index, line) in self.lines.iter().enumerate() {
            let size = font_size(line.style);
            let line_height = size * 1.5;
            let advance = size * MONO_ADVANCE;
            let color = match line.style {
                LineStyle::Quote => self.colors.accent,
                _ => self.colors.ink,
            };

            for row in lettering::wrap(line.text, lettering::columns(text_width, size, MONO_ADVANCE)) {
                if y + line_height > visible - ROD_HEIGHT {
                    break;
                }
                #[allow(clippy::cast_precision_loss)]
                let row_width = row.text.chars().count() as f32 * advance;
                let row_left = match line.style {
                    LineStyle::Title | LineStyle::Quote => center_x - row_width / 2.0,
                    LineStyle::Body => left + MARGIN,
                    LineStyle::Signature => left + width - MARGIN - row_width,
                };

                for (offset, character) in row.text.chars().enumerate() {
                    let ink = self.char_alpha(line_index, row.start + offset) * alpha;
                    if character == ' ' || ink <= f32::EPSILON {
                        continue;
                    }
                    #[allow(clippy::cast_precision_loss)]
                    let x = row_left + offset as f32 * advance;
                    lettering::glyph(&mut frame, character, Point::new(x, y), size, fade(color, ink));
                }
                y += line_height;
            }
            y += spacing::XS;

            if line.divider_after && y + spacing::XXL < visible - ROD_HEIGHT {
                lettering::centered(
                    &mut frame,
                    "⚜",
                    center_x,
                    y + spacing::XS,
                    typography::TITLE_SM,
                    fade(palette::GOLD_700, alpha),
                );
                y += spacing::XXL;
            }
        }

        vec![frame.into_geometry()]
    }
}
