// SPDX-License-Identifier: MPL-2.0
//! Canvas program for the constellation map: dashed curves between the
//! achievements, a wax pin for each one, the compass rose and the popup of
//! the focused point.

use super::Message;
use crate::animation::Motion;
use crate::domain::timeline::{constellation, AchievementEvent};
use crate::ui::design_tokens::{border, opacity, palette, sizing, spacing, typography};
use crate::ui::styles::fade;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::lettering;
use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};

const COMPASS_RADIUS: f32 = 36.0;
const POPUP_LINE_HEIGHT: f32 = 20.0;
/// Points fainter than this cannot be focused.
const MIN_FOCUS_ALPHA: f32 = 0.5;

/// Canvas program drawing the constellation.
pub struct StarMap<'a> {
    events: &'a [AchievementEvent],
    map: Motion,
    stars: Vec<Motion>,
    focused: Option<usize>,
    colors: Colors,
}

struct Colors {
    sky: Color,
    frame: Color,
    line: Color,
    wax: Color,
    gold: Color,
    text: Color,
    muted: Color,
    popup: Color,
}

impl<'a> StarMap<'a> {
    #[must_use]
    pub fn new(
        events: &'a [AchievementEvent],
        map: Motion,
        stars: Vec<Motion>,
        focused: Option<usize>,
        scheme: &ColorScheme,
    ) -> Self {
        Self {
            events,
            map,
            stars,
            focused,
            colors: Colors {
                sky: scheme.surface_tertiary,
                frame: scheme.brand_primary,
                line: palette::BRONZE_500,
                wax: scheme.accent,
                gold: scheme.brand_primary,
                text: scheme.text_primary,
                muted: scheme.text_secondary,
                popup: scheme.surface_secondary,
            },
        }
    }

    fn star_motion(&self, index: usize) -> Motion {
        self.stars.get(index).copied().unwrap_or_default()
    }

    /// Point whose pin is under `position`, among the ones visible enough.
    fn star_at(&self, size: Size, position: Point) -> Option<usize> {
        let position = to_map(self.map, size, position);
        self.events
            .iter()
            .enumerate()
            .filter(|(index, _)| {
                self.map.alpha() * self.star_motion(*index).alpha() >= MIN_FOCUS_ALPHA
            })
            .find(|(_, event)| {
                let (x, y) = event.position.to_pixels(size.width, size.height);
                position.distance(Point::new(x, y)) <= sizing::STAR_HIT_RADIUS
            })
            .map(|(index, _)| index)
    }
}

/// Undoes the map scale, which is applied around the centre.
fn to_map(map: Motion, size: Size, position: Point) -> Point {
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let scale = map.scale.max(f32::EPSILON);
    Point::new(
        center.x + (position.x - center.x) / scale,
        center.y + (position.y - center.y) / scale,
    )
}

impl canvas::Program<Message> for StarMap<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft) => {
                let focused = cursor
                    .position_in(bounds)
                    .and_then(|position| self.star_at(bounds.size(), position));
                (focused != self.focused).then(|| Action::publish(Message::Focus(focused)))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let alpha = self.map.alpha();
        let center = frame.center();

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.scale(self.map.scale);
            frame.translate(Vector::new(-center.x, -center.y));

            let sky = Path::rectangle(Point::ORIGIN, size);
            frame.fill(&sky, fade(self.colors.sky, alpha));
            frame.stroke(
                &sky,
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(fade(self.colors.frame, alpha)),
            );

            self.draw_curves(frame, size, alpha);
            self.draw_compass(frame, size, alpha);
            for (index, event) in self.events.iter().enumerate() {
                let star = self.star_motion(index);
                self.draw_pin(frame, event, size, star, alpha, self.focused == Some(index));
            }
            if let Some(event) = self.focused.and_then(|index| self.events.get(index)) {
                self.draw_popup(frame, event, size, alpha);
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
        match cursor.position_in(bounds) {
            Some(position) if self.star_at(bounds.size(), position).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

impl StarMap<'_> {
    fn draw_curves(&self, frame: &mut Frame, size: Size, alpha: f32) {
        let color = fade(self.colors.line, opacity::CONSTELLATION_LINE * alpha);
        for curve in constellation(self.events, size.width, size.height) {
            let path = Path::new(|builder| {
                builder.move_to(Point::new(curve.from.0, curve.from.1));
                builder.quadratic_curve_to(
                    Point::new(curve.control.0, curve.control.1),
                    Point::new(curve.to.0, curve.to.1),
                );
            });
            frame.stroke(
                &path,
                Stroke {
                    line_dash: LineDash {
                        segments: &[5.0, 5.0],
                        offset: 0,
                    },
                    ..Stroke::default().with_width(2.0).with_color(color)
                },
            );
        }
    }

    fn draw_pin(
        &self,
        frame: &mut Frame,
        event: &AchievementEvent,
        size: Size,
        star: Motion,
        map_alpha: f32,
        focused: bool,
    ) {
        let alpha = map_alpha * star.alpha();
        let scale = star.scale.max(0.0);
        if alpha <= f32::EPSILON || scale <= f32::EPSILON {
            return;
        }
        let (x, y) = event.position.to_pixels(size.width, size.height);
        let center = Point::new(x, y);
        let radius = sizing::STAR_RADIUS * scale * if focused { 1.2 } else { 1.0 };

        if focused {
            frame.fill(
                &Path::circle(center, radius + spacing::XS),
                fade(self.colors.gold, opacity::OVERLAY_SUBTLE * alpha),
            );
        }
        let head = Path::circle(center, radius);
        frame.fill(&head, fade(self.colors.wax, alpha));
        frame.stroke(
            &head,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(fade(self.colors.gold, alpha)),
        );

        let icon_size = typography::BODY * scale;
        lettering::centered(
            frame,
            event.icon,
            x,
            y - icon_size / 2.0,
            icon_size,
            fade(palette::PARCHMENT_100, alpha),
        );
        lettering::centered(
            frame,
            event.year,
            x,
            y + radius + spacing::XXS,
            typography::CAPTION,
            fade(self.colors.gold, alpha),
        );
    }

    fn draw_compass(&self, frame: &mut Frame, size: Size, alpha: f32) {
        let center = Point::new(
            size.width - COMPASS_RADIUS - spacing::LG,
            size.height - COMPASS_RADIUS - spacing::LG,
        );
        let color = fade(self.colors.gold, opacity::OVERLAY_MEDIUM * alpha);
        frame.stroke(
            &Path::circle(center, COMPASS_RADIUS),
            Stroke::default().with_width(border::WIDTH_SM).with_color(color),
        );
        for (dx, dy) in [(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)] {
            let tip = Point::new(
                center.x + dx * COMPASS_RADIUS * 0.8,
                center.y + dy * COMPASS_RADIUS * 0.8,
            );
            frame.stroke(
                &Path::line(center, tip),
                Stroke::default().with_width(border::WIDTH_SM).with_color(color),
            );
        }

        let label = typography::CAPTION;
        let reach = COMPASS_RADIUS + spacing::XS;
        for (letter, dx, dy) in [("N", 0.0, -1.0), ("E", 1.0, 0.0), ("S", 0.0, 1.0), ("W", -1.0, 0.0)] {
            lettering::centered(
                frame,
                letter,
                center.x + dx * reach,
                center.y + dy * reach - label / 2.0,
                label,
                color,
            );
        }
        lettering::centered(
            frame,
            "✦",
            center.x,
            center.y - typography::BODY / 2.0,
            typography::BODY,
            fade(self.colors.gold, alpha),
        );
    }

    fn draw_popup(&self, frame: &mut Frame, event: &AchievementEvent, size: Size, alpha: f32) {
        let width = sizing::POPUP_WIDTH.min(size.width);
        let inner = width - 2.0 * spacing::MD;
        let rows = lettering::wrap(
            event.description,
            lettering::columns(inner, typography::BODY, lettering::PROPORTIONAL_ADVANCE),
        )
        .len();
        #[allow(clippy::cast_precision_loss)]
        let height = spacing::MD * 2.0
            + typography::TITLE_SM
            + spacing::XS
            + typography::BODY_LG
            + spacing::SM
            + rows as f32 * POPUP_LINE_HEIGHT
            + spacing::SM
            + typography::BODY;

        let (x, y) = event.position.to_pixels(size.width, size.height);
        let gap = sizing::STAR_HIT_RADIUS + spacing::XS;
        let top = if y - gap - height >= 0.0 {
            y - gap - height
        } else {
            (y + gap).min((size.height - height).max(0.0))
        };
        let left = (x - width / 2.0).clamp(0.0, (size.width - width).max(0.0));

        let card = Path::rectangle(Point::new(left, top), Size::new(width, height));
        frame.fill(&card, fade(self.colors.popup, opacity::OVERLAY_STRONG * alpha));
        frame.stroke(
            &card,
            Stroke::default()
                .with_width(border::WIDTH_SM)
                .with_color(fade(self.colors.gold, alpha)),
        );

        let center_x = left + width / 2.0;
        let mut cursor_y = top + spacing::MD;
        lettering::centered(
            frame,
            event.year,
            center_x,
            cursor_y,
            typography::TITLE_SM,
            fade(self.colors.gold, alpha),
        );
        cursor_y += typography::TITLE_SM + spacing::XS;
        lettering::centered(
            frame,
            event.title,
            center_x,
            cursor_y,
            typography::BODY_LG,
            fade(self.colors.text, alpha),
        );
        cursor_y += typography::BODY_LG + spacing::SM;
        cursor_y += lettering::paragraph(
            frame,
            event.description,
            Point::new(left + spacing::MD, cursor_y),
            inner,
            typography::BODY,
            POPUP_LINE_HEIGHT,
            fade(self.colors.muted, alpha),
        );
        cursor_y += spacing::SM;
        lettering::centered(
            frame,
            "◈ ━ ◈",
            center_x,
            cursor_y,
            typography::BODY,
            fade(self.colors.gold, alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timeline::ACHIEVEMENTS;

    const SIZE: Size = Size::new(1000.0, 600.0);

    fn map(stars: Vec<Motion>) -> StarMap<'static> {
        StarMap::new(
            &ACHIEVEMENTS,
            Motion::IDENTITY,
            stars,
            None,
            &ColorScheme::dark(),
        )
    }

    fn visible() -> Vec<Motion> {
        vec![Motion::IDENTITY; ACHIEVEMENTS.len()]
    }

    #[test]
    fn pins_are_hit_at_their_position() {
        let map = map(visible());
        for (index, event) in ACHIEVEMENTS.iter().enumerate() {
            let (x, y) = event.position.to_pixels(SIZE.width, SIZE.height);
            assert_eq!(map.star_at(SIZE, Point::new(x + 3.0, y - 3.0)), Some(index));
        }
    }

    #[test]
    fn empty_sky_has_no_hit() {
        let map = map(visible());
        assert_eq!(map.star_at(SIZE, Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn hidden_points_cannot_be_focused() {
        let mut stars = visible();
        stars[0].opacity = 0.1;
        let map = map(stars);
        let (x, y) = ACHIEVEMENTS[0].position.to_pixels(SIZE.width, SIZE.height);
        assert_eq!(map.star_at(SIZE, Point::new(x, y)), None);
    }

    #[test]
    fn map_scale_is_undone() {
        let map = Motion {
            scale: 0.5,
            ..Motion::IDENTITY
        };
        let center = Point::new(SIZE.width / 2.0, SIZE.height / 2.0);
        assert_eq!(to_map(map, SIZE, center), center);
        assert_eq!(
            to_map(map, SIZE, Point::new(center.x + 10.0, center.y)),
            Point::new(center.x + 20.0, center.y)
        );
    }
}
