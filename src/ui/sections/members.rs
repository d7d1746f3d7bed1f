// SPDX-License-Identifier: MPL-2.0
//! Members section: the fellowship grid.
//!
//! Each card rises and tilts upright as it scrolls into view. Hovering a
//! card turns it over to show the member's description.

use crate::animation::{
    AnimationScope, Animator, Descriptor, Easing, Motion, Property, ScrollWindow, Timeline, Tween,
};
use crate::domain::members::{ClanMember, ROSTER};
use crate::ui::assets::Artwork;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::{Section, Target, MEMBER_ROW_GAP};
use crate::ui::sections::{frame, header, ViewContext};
use crate::ui::styles::{self, fade};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, svg, text, Column, Row};
use iced::{Element, Length, Padding};

const TITLE: &str = "━━━ Our Fellowship ━━━";
const INTRO: &str =
    "Each warrior brings unique strength to our brotherhood. United by honor, driven by purpose.";
const ORNAMENT: &str = "◈ ━━━ ◈";

/// Distance a card rises from while entering.
const CARD_RISE: f32 = 100.0;
/// Backwards tilt of an entering card, in degrees.
const CARD_TILT: f32 = 45.0;

/// Messages emitted by the members grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CardEntered(usize),
    CardExited(usize),
}

/// Scroll entrance of one card.
#[must_use]
pub fn card_entrance(card: u8) -> Descriptor<Target> {
    let target = Target::MemberCard(card);
    Descriptor::scrub(
        target,
        ScrollWindow::top(85.0, 60.0),
        Timeline::new().from(
            target,
            &[
                (Property::TranslateY, CARD_RISE),
                (Property::Opacity, 0.0),
                (Property::RotateX, CARD_TILT),
            ],
            Tween::new(0.5).easing(Easing::Power1Out),
        ),
    )
}

/// Members section state.
#[derive(Debug, Default)]
pub struct Members {
    scope: AnimationScope,
    hovered: Option<usize>,
}

impl Members {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, animator: &mut dyn Animator<Target>) {
        if !self.scope.is_empty() {
            return;
        }
        for (card, _) in (0u8..).zip(ROSTER.iter()) {
            self.scope.register(animator, card_entrance(card));
        }
        tracing::debug!(cards = self.scope.len(), "member entrances registered");
    }

    pub fn revert(&mut self, animator: &mut dyn Animator<Target>) -> usize {
        self.scope.revert(animator)
    }

    /// Card showing its back face.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::CardEntered(index) => self.hovered = Some(index),
            Message::CardExited(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
            }
        }
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and Copy
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let columns = ctx.layout.member_columns();

        let grid = (0u8..)
            .zip(ROSTER.iter())
            .collect::<Vec<_>>()
            .chunks(columns)
            .fold(Column::new().spacing(MEMBER_ROW_GAP), |grid, chunk| {
                let row = chunk
                    .iter()
                    .fold(Row::new().spacing(spacing::LG), |row, &(card, member)| {
                        row.push(self.card(ctx, card, member))
                    });
                grid.push(row)
            });

        let body = Column::new()
            .push(header(TITLE, INTRO, ctx.colors))
            .push(
                container(grid)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );

        frame(body, ctx.layout.height(Section::Members), ctx.colors, true)
    }

    fn card<'a>(&self, ctx: ViewContext<'a>, card: u8, member: &'a ClanMember) -> Element<'a, Message> {
        let index = usize::from(card);
        let motion = ctx.animator.motion(Target::MemberCard(card));
        let alpha = motion.alpha();

        let face = if self.hovered == Some(index) {
            back(ctx, member, alpha)
        } else {
            front(ctx, member, alpha)
        };

        // The tilt shortens the card; the rise pushes it down its slot.
        let height = sizing::MEMBER_CARD_HEIGHT * motion.tilt_factor();
        let drop = rise_offset(motion, height);
        let tilted = container(face)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .clip(true);

        let slot = container(tilted)
            .width(Length::Fixed(sizing::MEMBER_CARD_WIDTH))
            .height(Length::Fixed(sizing::MEMBER_CARD_HEIGHT))
            .padding(Padding {
                top: drop,
                ..Padding::ZERO
            })
            .clip(true);

        mouse_area(slot)
            .on_enter(Message::CardEntered(index))
            .on_exit(Message::CardExited(index))
            .into()
    }
}

/// Offset of a card of visible `height` from the top of its slot: centred
/// by the tilt, then moved down by the rise.
fn rise_offset(motion: Motion, height: f32) -> f32 {
    let room = (sizing::MEMBER_CARD_HEIGHT - height).max(0.0);
    (room / 2.0 + motion.translate_y.max(0.0)).min(sizing::MEMBER_CARD_HEIGHT)
}

fn front<'a>(ctx: ViewContext<'a>, member: &'a ClanMember, alpha: f32) -> Element<'a, Message> {
    let artwork = Artwork::from(member.portrait);
    let portrait: Element<'a, Message> = match ctx.artworks.get(artwork) {
        Some(handle) => svg::Svg::new(handle.clone())
            .width(Length::Fixed(sizing::PORTRAIT))
            .height(Length::Fixed(sizing::PORTRAIT))
            .opacity(alpha)
            .into(),
        None => text(artwork.fallback_glyph())
            .size(typography::DISPLAY)
            .color(fade(ctx.colors.brand_primary, alpha))
            .into(),
    };

    let badge = container(text(member.role).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(ctx.colors, alpha));

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(portrait)
        .push(badge)
        .push(
            text(member.name)
                .size(typography::TITLE_SM)
                .color(fade(ctx.colors.brand_primary, alpha)),
        )
        .push(
            text(member.title)
                .size(typography::BODY)
                .color(fade(ctx.colors.text_primary, alpha)),
        )
        .push(
            text(member.country)
                .size(typography::CAPTION)
                .color(fade(ctx.colors.text_secondary, alpha)),
        )
        .push(
            text(ORNAMENT)
                .size(typography::BODY)
                .color(fade(ctx.colors.brand_primary, alpha)),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .style(styles::container::card_front(ctx.colors, alpha))
        .into()
}

fn back<'a>(ctx: ViewContext<'a>, member: &'a ClanMember, alpha: f32) -> Element<'a, Message> {
    let description = text(member.description)
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center);

    container(description)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card_back(ctx.colors, alpha))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Geometry, ScrollTimeline, Settings};
    use crate::ui::layout::PageLayout;
    use iced::Size;
    use std::time::Duration;

    const VIEWPORT: f32 = 800.0;

    fn mounted() -> (Members, ScrollTimeline<Target>, PageLayout) {
        let mut members = Members::new();
        let mut animator = ScrollTimeline::new(Settings {
            scrub_lag: Duration::ZERO,
            ..Settings::default()
        });
        members.mount(&mut animator);
        (members, animator, PageLayout::new(Size::new(1280.0, VIEWPORT)))
    }

    #[test]
    fn one_entrance_per_card() {
        let (mut members, mut animator, _) = mounted();
        assert_eq!(animator.len(), ROSTER.len());
        members.mount(&mut animator);
        assert_eq!(animator.len(), ROSTER.len());
    }

    #[test]
    fn cards_below_the_fold_are_hidden_and_tilted() {
        let (_, mut animator, layout) = mounted();
        animator.scroll(0.0, VIEWPORT, &layout);
        let card = animator.motion(Target::MemberCard(0));
        assert_eq!(card.opacity, 0.0);
        assert_eq!(card.translate_y, CARD_RISE);
        assert_eq!(card.rotate_x, CARD_TILT);
    }

    #[test]
    fn card_settles_once_its_top_reaches_sixty_percent() {
        let (_, mut animator, layout) = mounted();
        let card = layout.span(Target::MemberCard(0)).unwrap();
        animator.scroll(card.top - 0.6 * VIEWPORT, VIEWPORT, &layout);
        assert_eq!(animator.motion(Target::MemberCard(0)), Motion::IDENTITY);

        // The second row has not arrived yet.
        let fifth = animator.motion(Target::MemberCard(4));
        assert!(fifth.opacity < 1.0);
    }

    #[test]
    fn hover_turns_one_card_at_a_time() {
        let (mut members, _, _) = mounted();
        members.update(Message::CardEntered(2));
        assert_eq!(members.hovered(), Some(2));

        members.update(Message::CardEntered(3));
        members.update(Message::CardExited(2));
        assert_eq!(members.hovered(), Some(3));

        members.update(Message::CardExited(3));
        assert_eq!(members.hovered(), None);
    }

    #[test]
    fn rise_offset_stays_inside_the_slot() {
        let resting = rise_offset(Motion::IDENTITY, sizing::MEMBER_CARD_HEIGHT);
        assert_eq!(resting, 0.0);

        let entering = Motion {
            translate_y: 10_000.0,
            ..Motion::IDENTITY
        };
        assert_eq!(
            rise_offset(entering, sizing::MEMBER_CARD_HEIGHT),
            sizing::MEMBER_CARD_HEIGHT
        );
    }

    #[test]
    fn revert_restores_every_card() {
        let (mut members, mut animator, layout) = mounted();
        animator.scroll(0.0, VIEWPORT, &layout);
        assert_eq!(members.revert(&mut animator), ROSTER.len());
        assert_eq!(animator.motion(Target::MemberCard(7)), Motion::IDENTITY);
    }
}
