// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the codex: cover, spread, turning leaf and the plates
//! a reader clicks to open the lightbox.

use super::{illumination, Message};
use crate::animation::Motion;
use crate::domain::codex::{BookState, FlipDirection, Leaf, Page, Side};
use crate::domain::gallery::GalleryItem;
use crate::ui::design_tokens::{border, opacity, palette, sizing, spacing, typography};
use crate::ui::styles::fade;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::lettering;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Inner margin of a page.
const PAGE_MARGIN: f32 = spacing::LG;
/// Turn factor under which a leaf is too narrow to carry text.
const MIN_LEGIBLE_TURN: f32 = 0.35;

/// Animated state of the codex parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookMotion {
    /// Whole codex (entrance).
    pub book: Motion,
    pub cover: Motion,
    pub leaf: Motion,
    pub content: Motion,
}

/// Canvas program used to draw and interact with the codex.
pub struct Book<'a> {
    pub state: BookState,
    pub current: Option<&'a Page>,
    /// Page revealed by the turn in flight.
    pub neighbour: Option<&'a Page>,
    pub range_label: Option<String>,
    pub motion: BookMotion,
    pub parchment: Color,
    pub ink: Color,
    pub gold: Color,
    pub leather: Color,
}

impl<'a> Book<'a> {
    #[must_use]
    pub fn new(
        state: BookState,
        current: Option<&'a Page>,
        neighbour: Option<&'a Page>,
        range_label: Option<String>,
        motion: BookMotion,
        scheme: &ColorScheme,
    ) -> Self {
        Self {
            state,
            current,
            neighbour,
            range_label,
            motion,
            parchment: scheme.parchment,
            ink: scheme.ink,
            gold: scheme.brand_primary,
            leather: palette::EMBER_500,
        }
    }

    /// Plate under `position` (in unscaled book coordinates) that can be
    /// clicked. Only an idle open book has clickable plates, and an empty
    /// slot has none.
    fn plate_at(&self, spread: &Spread, position: Point) -> Option<(Side, &'a GalleryItem)> {
        if self.state != BookState::Open(Leaf::Idle) {
            return None;
        }
        let page = self.current?;
        [Side::Left, Side::Right].into_iter().find_map(|side| {
            let item = page.slot(side)?;
            spread.plate(side).contains(position).then_some((side, item))
        })
    }

    /// Maps a cursor position into book coordinates, undoing the entrance
    /// transform.
    fn to_book(&self, bounds: Size, position: Point) -> Point {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let scale = self.motion.book.scale.max(f32::EPSILON);
        Point::new(
            center.x + (position.x - center.x) / scale,
            center.y + (position.y - self.motion.book.translate_y - center.y) / scale,
        )
    }
}

/// Canvas-local state: the hovered plate.
#[derive(Debug, Default)]
pub struct Hover {
    plate: Option<Side>,
}

/// Rectangles of the open spread.
struct Spread {
    size: Size,
}

impl Spread {
    fn spine(&self) -> f32 {
        self.size.width / 2.0
    }

    fn half(&self, side: Side) -> Rectangle {
        let width = self.size.width / 2.0;
        let x = match side {
            Side::Left => 0.0,
            Side::Right => width,
        };
        Rectangle::new(Point::new(x, 0.0), Size::new(width, self.size.height))
    }

    fn plate(&self, side: Side) -> Rectangle {
        let half = self.half(side);
        Rectangle::new(
            Point::new(half.x + PAGE_MARGIN, half.y + PAGE_MARGIN),
            Size::new(
                (half.width - 2.0 * PAGE_MARGIN).max(0.0),
                sizing::PLATE_HEIGHT.min(half.height / 2.0),
            ),
        )
    }
}

impl canvas::Program<Message> for Book<'_> {
    type State = Hover;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let spread = Spread {
            size: bounds.size(),
        };
        let hovered = cursor
            .position_in(bounds)
            .and_then(|position| self.plate_at(&spread, self.to_book(bounds.size(), position)));

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                hovered.map(|(_, item)| Action::publish(Message::Select(item.id)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft) => {
                let plate = hovered.map(|(side, _)| side);
                if plate == state.plate {
                    None
                } else {
                    state.plate = plate;
                    Some(Action::request_redraw())
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let spread = Spread {
            size: bounds.size(),
        };
        let alpha = self.motion.book.alpha();
        let center = frame.center();

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y + self.motion.book.translate_y));
            frame.scale(self.motion.book.scale);
            frame.translate(Vector::new(-center.x, -center.y));

            let hovered = match self.state {
                BookState::Open(Leaf::Idle) => state.plate,
                _ => None,
            };

            match self.state {
                BookState::Closed => {
                    self.draw_board(frame, &spread, alpha);
                    self.draw_cover(frame, &spread, 1.0, alpha);
                }
                BookState::Opening => {
                    self.draw_spread(frame, &spread, self.current, self.current, None, alpha);
                    self.draw_cover(frame, &spread, self.motion.cover.turn_factor(), alpha);
                }
                BookState::Open(Leaf::Idle) => {
                    self.draw_spread(frame, &spread, self.current, self.current, hovered, alpha);
                }
                BookState::Open(Leaf::Flipping(direction)) => {
                    self.draw_turn(frame, &spread, direction, alpha);
                }
            }
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let spread = Spread {
            size: bounds.size(),
        };
        match cursor.position_in(bounds) {
            Some(position)
                if self
                    .plate_at(&spread, self.to_book(bounds.size(), position))
                    .is_some() =>
            {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

impl Book<'_> {
    /// Back board visible behind a closed cover.
    fn draw_board(&self, frame: &mut Frame, spread: &Spread, alpha: f32) {
        let left = spread.half(Side::Left);
        frame.fill_rectangle(
            left.position(),
            left.size(),
            fade(palette::BLACK, opacity::OVERLAY_SUBTLE * alpha),
        );
    }

    /// Cover hinged on the spine. `turn` is 1 when closed and -1 once laid
    /// open on the left.
    fn draw_cover(&self, frame: &mut Frame, spread: &Spread, turn: f32, alpha: f32) {
        let spine = spread.spine();
        let half = spread.half(Side::Right);
        let front = turn >= 0.0;

        frame.with_save(|frame| {
            frame.translate(Vector::new(spine, 0.0));
            frame.scale_nonuniform(Vector::new(turn, 1.0));
            frame.translate(Vector::new(-spine, 0.0));

            let board = Path::rectangle(half.position(), half.size());
            let leather = if front {
                self.leather
            } else {
                Color {
                    r: self.leather.r * 0.6,
                    g: self.leather.g * 0.6,
                    b: self.leather.b * 0.6,
                    a: self.leather.a,
                }
            };
            frame.fill(&board, fade(leather, alpha));
            frame.stroke(
                &board,
                Stroke::default()
                    .with_width(border::WIDTH_LG)
                    .with_color(fade(self.gold, alpha)),
            );

            if !front || turn < MIN_LEGIBLE_TURN {
                return;
            }

            let center_x = half.x + half.width / 2.0;
            let mut y = half.y + half.height / 3.0;
            let title_width = half.width - 2.0 * PAGE_MARGIN;
            let title_size = typography::TITLE_MD;
            for row in lettering::wrap(
                "Chronicles of the Belmonts",
                lettering::columns(title_width, title_size, lettering::PROPORTIONAL_ADVANCE),
            ) {
                lettering::centered(frame, &row.text, center_x, y, title_size, fade(self.gold, alpha));
                y += title_size * 1.3;
            }

            y += spacing::SM;
            frame.fill_rectangle(
                Point::new(center_x - spacing::XXL, y),
                Size::new(2.0 * spacing::XXL, border::WIDTH_MD),
                fade(self.gold, alpha),
            );
            y += spacing::MD;
            lettering::centered(
                frame,
                "A Codex of Legend",
                center_x,
                y,
                typography::BODY_LG,
                fade(self.parchment, alpha),
            );
            lettering::centered(
                frame,
                "Scroll to open",
                center_x,
                half.y + half.height - spacing::XXL,
                typography::CAPTION,
                fade(self.parchment, opacity::OVERLAY_MEDIUM * alpha),
            );
        });
    }

    /// Static spread: `left_page`'s left slot and `right_page`'s right slot.
    fn draw_spread(
        &self,
        frame: &mut Frame,
        spread: &Spread,
        left_page: Option<&Page>,
        right_page: Option<&Page>,
        hovered: Option<Side>,
        alpha: f32,
    ) {
        let content_alpha = alpha * self.motion.content.alpha();
        for side in [Side::Left, Side::Right] {
            let half = spread.half(side);
            frame.fill_rectangle(half.position(), half.size(), fade(self.parchment, alpha));
        }
        let spine = spread.spine();
        frame.fill_rectangle(
            Point::new(spine - border::WIDTH_LG / 2.0, 0.0),
            Size::new(border::WIDTH_LG, spread.size.height),
            fade(palette::STONE_600, alpha),
        );

        if self.current.is_none() {
            lettering::centered(
                frame,
                "No chronicles bear this mark",
                spine,
                spread.size.height / 2.0,
                typography::BODY_LG,
                fade(self.ink, content_alpha),
            );
            return;
        }

        if let Some(item) = left_page.map(Page::left) {
            self.draw_entry(frame, spread, Side::Left, item, hovered == Some(Side::Left), content_alpha);
        }
        if let Some(item) = right_page.and_then(Page::right) {
            self.draw_entry(frame, spread, Side::Right, item, hovered == Some(Side::Right), content_alpha);
        }

        if let Some(label) = &self.range_label {
            lettering::centered(
                frame,
                label,
                spine,
                spread.size.height - spacing::XL,
                typography::CAPTION,
                fade(self.ink, content_alpha),
            );
        }
    }

    /// Page turn in flight.
    ///
    /// Turning forward lifts the right leaf of the current page and lays it
    /// down on the left, showing the next page's left side. Turning backward
    /// does the opposite with the previous page.
    fn draw_turn(&self, frame: &mut Frame, spread: &Spread, direction: FlipDirection, alpha: f32) {
        let (base_left, base_right, lifted, landing) = match direction {
            FlipDirection::Forward => (self.current, self.neighbour, self.current, self.neighbour),
            FlipDirection::Backward => (self.neighbour, self.current, self.neighbour, self.current),
        };
        self.draw_spread(frame, spread, base_left, base_right, None, alpha);

        let turn = self.motion.leaf.turn_factor();
        let (side, page) = if turn >= 0.0 {
            (Side::Right, lifted)
        } else {
            (Side::Left, landing)
        };
        let spine = spread.spine();
        let content_alpha = alpha * self.motion.content.alpha();

        frame.with_save(|frame| {
            frame.translate(Vector::new(spine, 0.0));
            frame.scale_nonuniform(Vector::new(turn.abs().max(f32::EPSILON), 1.0));
            frame.translate(Vector::new(-spine, 0.0));

            let half = spread.half(side);
            let leaf = Path::rectangle(half.position(), half.size());
            frame.fill(&leaf, fade(self.parchment, alpha));
            frame.stroke(
                &leaf,
                Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(fade(palette::STONE_400, alpha)),
            );

            if turn.abs() < MIN_LEGIBLE_TURN {
                return;
            }
            if let Some(item) = page.and_then(|page| page.slot(side)) {
                self.draw_entry(frame, spread, side, item, false, content_alpha);
            }
        });
    }

    /// Plate and caption of one entry.
    fn draw_entry(
        &self,
        frame: &mut Frame,
        spread: &Spread,
        side: Side,
        item: &GalleryItem,
        hovered: bool,
        alpha: f32,
    ) {
        let plate = spread.plate(side);
        let (tint, glyph) = illumination(item.category);

        let plate_path = Path::rectangle(plate.position(), plate.size());
        frame.fill(&plate_path, fade(tint, alpha));
        frame.stroke(
            &plate_path,
            Stroke::default()
                .with_width(border::WIDTH_SM)
                .with_color(fade(palette::GOLD_700, alpha)),
        );
        let plate_center = plate.center();
        lettering::centered(
            frame,
            glyph,
            plate_center.x,
            plate_center.y - typography::DISPLAY / 2.0,
            typography::DISPLAY,
            fade(palette::PARCHMENT_100, opacity::OVERLAY_MEDIUM * alpha),
        );

        if hovered {
            frame.fill(&plate_path, fade(palette::BLACK, opacity::OVERLAY_MEDIUM * alpha));
            lettering::centered(
                frame,
                "View",
                plate_center.x,
                plate_center.y - typography::TITLE_SM / 2.0,
                typography::TITLE_SM,
                fade(palette::GOLD_300, alpha),
            );
        }

        let x = plate.x;
        let mut y = plate.y + plate.height + spacing::MD;
        lettering::at(
            frame,
            item.title,
            Point::new(x, y),
            typography::TITLE_SM,
            fade(self.ink, alpha),
        );
        y += typography::TITLE_SM * 1.5;
        y += lettering::paragraph(
            frame,
            item.description,
            Point::new(x, y),
            plate.width,
            typography::BODY,
            typography::BODY * 1.4,
            fade(self.ink, opacity::OVERLAY_STRONG * alpha),
        );
        y += spacing::XS;
        lettering::at(
            frame,
            item.category.label(),
            Point::new(x, y),
            typography::CAPTION,
            fade(palette::GOLD_700, alpha),
        );
    }
}
