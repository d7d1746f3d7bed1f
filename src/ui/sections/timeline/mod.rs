// SPDX-License-Identifier: MPL-2.0
//! Timeline section: the constellation of the clan's history.
//!
//! The map fades and grows in as it scrolls into view, then each point
//! appears a little after the previous one. Hovering a point opens its
//! popup.

pub mod star_map;

use crate::animation::{
    AnimationScope, Animator, Descriptor, Easing, Property, ScrollWindow, Timeline, Tween,
};
use crate::domain::timeline::ACHIEVEMENTS;
use crate::ui::design_tokens::sizing;
use crate::ui::layout::{Section, Target};
use crate::ui::sections::{frame, header, ViewContext};
use iced::widget::canvas::Canvas;
use iced::widget::Column;
use iced::{Element, Length};
use star_map::StarMap;

const TITLE: &str = "━━━ Constellation of History ━━━";
const INTRO: &str =
    "A celestial map of glory written in the stars, marking moments of legend and triumph across the ages";

/// Delay between two consecutive points appearing.
const STAR_STAGGER: f32 = 0.1;

/// Messages emitted by the timeline section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The pointer moved onto a point, or off every point.
    Focus(Option<usize>),
}

/// Scroll entrance of the map itself.
#[must_use]
pub fn map_entrance() -> Descriptor<Target> {
    Descriptor::scrub(
        Target::Map,
        ScrollWindow::top(70.0, 50.0),
        Timeline::new().from(
            Target::Map,
            &[(Property::Opacity, 0.0), (Property::Scale, 0.95)],
            Tween::new(0.5).easing(Easing::Power1Out),
        ),
    )
}

/// Scroll entrance of point `star`, delayed by its rank.
#[must_use]
pub fn star_entrance(star: u8) -> Descriptor<Target> {
    Descriptor::scrub(
        Target::Map,
        ScrollWindow::top(70.0, 30.0),
        Timeline::new().from(
            Target::Star(star),
            &[(Property::Opacity, 0.0), (Property::Scale, 0.0)],
            Tween::new(0.5)
                .easing(Easing::Power1Out)
                .delay(f32::from(star) * STAR_STAGGER),
        ),
    )
}

/// Timeline section state.
#[derive(Debug, Default)]
pub struct History {
    scope: AnimationScope,
    focused: Option<usize>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, animator: &mut dyn Animator<Target>) {
        if !self.scope.is_empty() {
            return;
        }
        self.scope.register(animator, map_entrance());
        for (star, _) in (0u8..).zip(ACHIEVEMENTS.iter()) {
            self.scope.register(animator, star_entrance(star));
        }
    }

    pub fn revert(&mut self, animator: &mut dyn Animator<Target>) -> usize {
        self.scope.revert(animator)
    }

    /// Point whose popup is open.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Focus(focused) => {
                self.focused = focused.filter(|&index| index < ACHIEVEMENTS.len());
            }
        }
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and Copy
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let stars = (0u8..)
            .zip(ACHIEVEMENTS.iter())
            .map(|(star, _)| ctx.animator.motion(Target::Star(star)))
            .collect();
        let map = StarMap::new(
            &ACHIEVEMENTS,
            ctx.animator.motion(Target::Map),
            stars,
            self.focused,
            ctx.colors,
        );

        let body = Column::new()
            .push(header(TITLE, INTRO, ctx.colors))
            .push(
                Canvas::new(map)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::MAP_HEIGHT)),
            );

        frame(body, ctx.layout.height(Section::Timeline), ctx.colors, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Geometry, Motion, ScrollTimeline, Settings};
    use crate::ui::layout::PageLayout;
    use iced::Size;
    use std::time::Duration;

    const VIEWPORT: f32 = 800.0;

    fn mounted() -> (History, ScrollTimeline<Target>, PageLayout) {
        let mut history = History::new();
        let mut animator = ScrollTimeline::new(Settings {
            scrub_lag: Duration::ZERO,
            ..Settings::default()
        });
        history.mount(&mut animator);
        (history, animator, PageLayout::new(Size::new(1280.0, VIEWPORT)))
    }

    #[test]
    fn map_and_every_point_are_registered_once() {
        let (mut history, mut animator, _) = mounted();
        assert_eq!(animator.len(), ACHIEVEMENTS.len() + 1);
        history.mount(&mut animator);
        assert_eq!(animator.len(), ACHIEVEMENTS.len() + 1);
    }

    #[test]
    fn map_starts_hidden() {
        let (_, mut animator, layout) = mounted();
        animator.scroll(0.0, VIEWPORT, &layout);
        let map = animator.motion(Target::Map);
        assert_eq!(map.opacity, 0.0);
        assert_eq!(map.scale, 0.95);
        let star = animator.motion(Target::Star(0));
        assert_eq!(star.opacity, 0.0);
        assert_eq!(star.scale, 0.0);
    }

    #[test]
    fn later_points_trail_the_earlier_ones() {
        let (_, mut animator, layout) = mounted();
        let map = layout.span(Target::Map).unwrap();
        // Halfway between the map top reaching 70% and 30% of the viewport.
        animator.scroll(map.top - 0.5 * VIEWPORT, VIEWPORT, &layout);
        let first = animator.motion(Target::Star(0)).opacity;
        let last = animator.motion(Target::Star(7)).opacity;
        assert!(first > last);
    }

    #[test]
    fn everything_is_shown_past_the_window() {
        let (_, mut animator, layout) = mounted();
        let map = layout.span(Target::Map).unwrap();
        animator.scroll(map.top - 0.2 * VIEWPORT, VIEWPORT, &layout);
        assert_eq!(animator.motion(Target::Map), Motion::IDENTITY);
        for star in 0..8 {
            assert_eq!(animator.motion(Target::Star(star)), Motion::IDENTITY);
        }
    }

    #[test]
    fn focus_follows_the_pointer() {
        let (mut history, _, _) = mounted();
        history.update(Message::Focus(Some(3)));
        assert_eq!(history.focused(), Some(3));
        history.update(Message::Focus(None));
        assert_eq!(history.focused(), None);
        history.update(Message::Focus(Some(99)));
        assert_eq!(history.focused(), None);
    }

    #[test]
    fn revert_releases_the_map() {
        let (mut history, mut animator, layout) = mounted();
        animator.scroll(0.0, VIEWPORT, &layout);
        assert_eq!(history.revert(&mut animator), ACHIEVEMENTS.len() + 1);
        assert!(animator.is_empty());
        assert_eq!(animator.motion(Target::Star(0)), Motion::IDENTITY);
    }
}
