// SPDX-License-Identifier: MPL-2.0
//! Hero section: the crest, the clan name and the call to enter.
//!
//! Everything here is time-based and plays once the window opens. The call
//! to action keeps bobbing after its entrance until the page closes.

use crate::animation::{
    AnimationScope, Animator, Descriptor, Easing, Handle, Motion, Property, Timeline, Tween,
};
use crate::ui::assets::Artwork;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::{Section, Target};
use crate::ui::sections::{shift, ViewContext};
use crate::ui::styles::{self, fade};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, svg, text, Column, Row};
use iced::{Element, Length};

const TITLE: &str = "THE BELMONTS";
const MOTTO: &str = "Forged in Honor • Bound by Legacy";
const CALL_TO_ACTION: &str = "Enter the Kingdom";

/// Largest vertical offset each element animates from.
const TITLE_RISE: f32 = 100.0;
const MOTTO_RISE: f32 = 60.0;
const CTA_RISE: f32 = 50.0;
/// Height of the idle bob of the call to action.
const CTA_BOB: f32 = 8.0;

/// Messages emitted by the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    EnterKingdom,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Scroll the page to the About section.
    ScrollToAbout,
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::EnterKingdom => Event::ScrollToAbout,
    }
}

/// Entrance choreography of the hero, as one timeline.
#[must_use]
pub fn intro_timeline() -> Timeline<Target> {
    Timeline::new()
        .from(
            Target::HeroTitle,
            &[(Property::TranslateY, TITLE_RISE), (Property::Opacity, 0.0)],
            Tween::new(1.5).easing(Easing::Power3Out).at(0.0).delay(0.3),
        )
        .from(
            Target::HeroMotto,
            &[(Property::TranslateY, MOTTO_RISE), (Property::Opacity, 0.0)],
            Tween::new(1.2).easing(Easing::Power2Out).at(0.0).delay(0.8),
        )
        .from(
            Target::HeroCta,
            &[
                (Property::Scale, 0.5),
                (Property::Opacity, 0.0),
                (Property::TranslateY, CTA_RISE),
            ],
            Tween::new(1.0).easing(Easing::BackOut(1.5)).at(0.0).delay(1.5),
        )
        .to(
            Target::HeroCta,
            &[(Property::TranslateY, -CTA_BOB)],
            Tween::new(2.5)
                .easing(Easing::SineInOut)
                .repeat_forever(true)
                .at(0.0)
                .delay(2.5),
        )
}

/// Hero section state: only its animation registrations.
#[derive(Debug, Default)]
pub struct Hero {
    scope: AnimationScope,
    intro: Option<Handle>,
}

impl Hero {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, animator: &mut dyn Animator<Target>) {
        if self.intro.is_none() {
            self.intro = Some(
                self.scope
                    .register(animator, Descriptor::timed(intro_timeline())),
            );
        }
    }

    pub fn revert(&mut self, animator: &mut dyn Animator<Target>) -> usize {
        self.intro = None;
        self.scope.revert(animator)
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and Copy
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title_motion = ctx.animator.motion(Target::HeroTitle);
        let motto_motion = ctx.animator.motion(Target::HeroMotto);
        let cta_motion = ctx.animator.motion(Target::HeroCta);

        let crest: Element<'a, Message> = match ctx.artworks.get(Artwork::Crest) {
            Some(handle) => svg::Svg::new(handle.clone())
                .width(Length::Fixed(sizing::CREST))
                .height(Length::Fixed(sizing::CREST))
                .opacity(title_motion.alpha())
                .into(),
            None => text(Artwork::Crest.fallback_glyph())
                .size(typography::DISPLAY)
                .color(fade(ctx.colors.brand_primary, title_motion.alpha()))
                .into(),
        };

        let title = text(TITLE)
            .size(typography::DISPLAY)
            .color(fade(ctx.colors.brand_primary, title_motion.alpha()));
        let motto = text(MOTTO)
            .size(typography::TITLE_SM)
            .color(fade(ctx.colors.text_secondary, motto_motion.alpha()));

        let content = Column::new()
            .align_x(Horizontal::Center)
            .push(crest)
            .push(shift(title, title_motion.translate_y, TITLE_RISE))
            .push(shift(motto, motto_motion.translate_y, MOTTO_RISE))
            .push(shift(
                call_to_action(ctx, cta_motion),
                cta_motion.translate_y,
                CTA_RISE,
            ));

        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(ctx.layout.height(Section::Hero)))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .clip(true)
            .style(styles::container::section(ctx.colors, false))
            .into()
    }
}

fn call_to_action<'a>(ctx: ViewContext<'a>, motion: Motion) -> Element<'a, Message> {
    let scale = motion.scale.max(0.0);
    let label = Row::new()
        .spacing(spacing::SM * scale)
        .align_y(Vertical::Center)
        .push(text(CALL_TO_ACTION).size(typography::BODY_LG * scale))
        .push(text("⚔").size(typography::TITLE_SM * scale));

    button(label)
        .padding([spacing::SM * scale, spacing::XL * scale])
        .style(styles::button::call_to_action(ctx.colors, motion.alpha()))
        .on_press(Message::EnterKingdom)
        .into()
}
