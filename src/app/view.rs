// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of the five sections. The lightbox,
//! when open, is stacked above it while the page itself stops scrolling.

use super::update::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::animation::Animator;
use crate::ui::assets::Artworks;
use crate::ui::layout::{PageLayout, Target};
use crate::ui::sections::about::About;
use crate::ui::sections::gallery::Gallery;
use crate::ui::sections::hero::Hero;
use crate::ui::sections::members::Members;
use crate::ui::sections::timeline::History;
use crate::ui::sections::ViewContext as SectionContext;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::scroll_guard;
use iced::widget::{scrollable, Column, Id, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub animator: &'a dyn Animator<Target>,
    pub layout: &'a PageLayout,
    pub colors: &'a ColorScheme,
    pub artworks: &'a Artworks,
    /// Whether the page scroll lock is held.
    pub locked: bool,
    pub hero: &'a Hero,
    pub about: &'a About,
    pub gallery: &'a Gallery,
    pub members: &'a Members,
    pub history: &'a History,
}

/// Renders the page and, above it, the lightbox if one is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let section = SectionContext {
        animator: ctx.animator,
        layout: ctx.layout,
        colors: ctx.colors,
        artworks: ctx.artworks,
    };

    let page = Column::new()
        .width(Length::Fill)
        .push(ctx.hero.view(section).map(Message::Hero))
        .push(ctx.about.view(section))
        .push(ctx.gallery.view(section).map(Message::Gallery))
        .push(ctx.members.view(section).map(Message::Members))
        .push(ctx.history.view(section).map(Message::Timeline));

    let scroller = scrollable(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scroll_guard(scroller, ctx.locked));

    if let Some(lightbox) = ctx.gallery.lightbox(section) {
        layers = layers.push(lightbox.map(Message::Gallery));
    }

    layers.into()
}
