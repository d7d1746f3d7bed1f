// SPDX-License-Identifier: MPL-2.0
//! Text placement helpers for canvas drawing.
//!
//! Canvas text is positioned by its top-left corner and never wraps, so
//! widths are estimated from the character count: exactly for the monospace
//! manuscript, approximately for the proportional default font.

use iced::widget::canvas::{Frame, Text};
use iced::{Color, Font, Point};

/// Advance of one monospace glyph, relative to the font size.
pub const MONO_ADVANCE: f32 = 0.6;

/// Average advance of a proportional glyph, relative to the font size.
pub const PROPORTIONAL_ADVANCE: f32 = 0.52;

/// Estimated width of `text` set at `size` in the default font.
#[must_use]
pub fn text_width(text: &str, size: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let count = text.chars().count() as f32;
    count * size * PROPORTIONAL_ADVANCE
}

/// How many glyphs of `advance × size` fit in `width`.
#[must_use]
pub fn columns(width: f32, size: f32, advance: f32) -> usize {
    let glyph = size * advance;
    if glyph <= 0.0 || width <= 0.0 {
        return 1;
    }
    // Truncation intended: only whole glyphs fit.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fitting = (width / glyph) as usize;
    fitting.max(1)
}

/// One wrapped row of a longer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Index, in characters, of the first character of the row in the source.
    pub start: usize,
    pub text: String,
}

/// Breaks `text` into rows of at most `max_chars` characters, at spaces
/// when possible. Character indices of the source are preserved in
/// [`Row::start`]; the space a row breaks on belongs to no row.
#[must_use]
pub fn wrap(text: &str, max_chars: usize) -> Vec<Row> {
    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut rows = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let remaining = chars.len() - start;
        if remaining <= max_chars {
            rows.push(Row {
                start,
                text: chars[start..].iter().collect(),
            });
            break;
        }
        let window = &chars[start..=start + max_chars];
        match window.iter().rposition(|c| *c == ' ') {
            Some(space) if space > 0 => {
                rows.push(Row {
                    start,
                    text: chars[start..start + space].iter().collect(),
                });
                start += space + 1;
            }
            _ => {
                rows.push(Row {
                    start,
                    text: chars[start..start + max_chars].iter().collect(),
                });
                start += max_chars;
            }
        }
    }
    rows
}

/// Draws `content` horizontally centred on `center_x`, with its top at `y`.
pub fn centered(frame: &mut Frame, content: &str, center_x: f32, y: f32, size: f32, color: Color) {
    let x = center_x - text_width(content, size) / 2.0;
    frame.fill_text(Text {
        content: content.to_string(),
        position: Point::new(x, y),
        color,
        size: size.into(),
        ..Text::default()
    });
}

/// Draws `content` with its top-left corner at `position`.
pub fn at(frame: &mut Frame, content: &str, position: Point, size: f32, color: Color) {
    frame.fill_text(Text {
        content: content.to_string(),
        position,
        color,
        size: size.into(),
        ..Text::default()
    });
}

/// Draws a single monospace glyph.
pub fn glyph(frame: &mut Frame, glyph: char, position: Point, size: f32, color: Color) {
    frame.fill_text(Text {
        content: glyph.to_string(),
        position,
        color,
        size: size.into(),
        font: Font::MONOSPACE,
        ..Text::default()
    });
}

/// Draws `content` wrapped into `width`, starting at `origin`. Returns the
/// height used.
pub fn paragraph(
    frame: &mut Frame,
    content: &str,
    origin: Point,
    width: f32,
    size: f32,
    line_height: f32,
    color: Color,
) -> f32 {
    let rows = wrap(content, columns(width, size, PROPORTIONAL_ADVANCE));
    for (index, row) in rows.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = origin.y + index as f32 * line_height;
        at(frame, &row.text, Point::new(origin.x, y), size, color);
    }
    #[allow(clippy::cast_precision_loss)]
    let height = rows.len() as f32 * line_height;
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_row() {
        let rows = wrap("Sacred Scroll", 40);
        assert_eq!(
            rows,
            vec![Row {
                start: 0,
                text: "Sacred Scroll".to_string()
            }]
        );
    }

    #[test]
    fn wraps_on_spaces_and_keeps_indices() {
        let text = "Forged in fire, tested in battle";
        let rows = wrap(text, 16);
        assert_eq!(rows[0].text, "Forged in fire,");
        assert_eq!(rows[1].start, 16);
        assert_eq!(rows[1].text, "tested in battle");

        let chars: Vec<char> = text.chars().collect();
        for row in &rows {
            let source: String = chars[row.start..row.start + row.text.chars().count()]
                .iter()
                .collect();
            assert_eq!(source, row.text);
        }
    }

    #[test]
    fn long_words_are_cut() {
        let rows = wrap("abcdefghij", 4);
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn rows_respect_the_limit() {
        let text = "In the ancient lands where shadows dance with flame, the Belmonts rose.";
        for row in wrap(text, 20) {
            assert!(row.text.chars().count() <= 20);
        }
    }

    #[test]
    fn multibyte_characters_count_once() {
        let rows = wrap("— The Belmont Creed", 40);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text.chars().count(), 19);
    }

    #[test]
    fn columns_never_reach_zero() {
        assert_eq!(columns(0.0, 16.0, MONO_ADVANCE), 1);
        assert_eq!(columns(96.0, 16.0, MONO_ADVANCE), 10);
    }

    #[test]
    fn width_grows_with_text() {
        assert!(text_width("War Banner", 20.0) > text_width("War", 20.0));
        assert_eq!(text_width("", 20.0), 0.0);
    }
}
