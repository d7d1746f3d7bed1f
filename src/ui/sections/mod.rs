// SPDX-License-Identifier: MPL-2.0
//! The five sections of the page.
//!
//! Each section owns the animations it registers (an
//! [`AnimationScope`](crate::animation::AnimationScope)), mounts them once
//! the page is laid out and reverts them when the window closes. Views read
//! their animated state back from the animator while building widgets.

pub mod about;
pub mod gallery;
pub mod hero;
pub mod members;
pub mod timeline;

use crate::animation::Animator;
use crate::ui::assets::Artworks;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::{PageLayout, Target, HEADER_HEIGHT, SECTION_PADDING, SIDE_PADDING};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Column, Container};
use iced::{Element, Length, Padding};

/// Everything a section needs to build its widgets.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub animator: &'a dyn Animator<Target>,
    pub layout: &'a PageLayout,
    pub colors: &'a ColorScheme,
    pub artworks: &'a Artworks,
}

/// Moves `content` down by `dy` (up when negative) without changing the
/// height it occupies. The shift is limited to `slack` in both directions.
pub fn shift<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    dy: f32,
    slack: f32,
) -> Container<'a, Message> {
    let dy = dy.clamp(-slack, slack);
    container(content).padding(Padding {
        top: slack + dy,
        bottom: slack - dy,
        left: 0.0,
        right: 0.0,
    })
}

/// Section title and introduction line, [`HEADER_HEIGHT`] tall.
pub fn header<'a, Message: 'a>(
    title: &'a str,
    intro: &'a str,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            text(title)
                .size(typography::TITLE_LG)
                .color(colors.brand_primary),
        )
        .push(
            text(intro)
                .size(typography::BODY_LG)
                .color(colors.text_secondary)
                .align_x(Horizontal::Center),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top)
        .into()
}

/// Wraps a section body at its laid-out height with the page padding.
pub fn frame<'a, Message: 'a>(
    body: impl Into<Element<'a, Message>>,
    height: f32,
    colors: &ColorScheme,
    alternate: bool,
) -> Element<'a, Message> {
    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(Padding {
            top: SECTION_PADDING,
            bottom: SECTION_PADDING,
            left: SIDE_PADDING,
            right: SIDE_PADDING,
        })
        .clip(true)
        .style(styles::container::section(colors, alternate))
        .into()
}
