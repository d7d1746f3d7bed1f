// SPDX-License-Identifier: MPL-2.0
//! Gallery section: the codex of chronicles, its filters, page controls and
//! the lightbox.
//!
//! The [`Codex`] state machine decides what happens; this module turns its
//! [`Effect`]s into animation registrations and feeds animation events back
//! into it. Every registration is tracked so a filter change can cancel the
//! cover and page turns mid-flight.

pub mod book;

use crate::animation::{
    AnimationScope, Animator, Descriptor, Easing, Event, Handle, Property, ScrollWindow, Timeline,
    Tween,
};
use crate::domain::codex::{BookState, Codex, Effect, FlipDirection, Leaf};
use crate::domain::gallery::{Category, Filter, CATALOGUE};
use crate::domain::scroll_lock::ScrollLock;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::{Section, Target, CONTROLS_HEIGHT, FILTER_BAR_HEIGHT};
use crate::ui::sections::{frame, header, ViewContext};
use crate::ui::styles;
use book::{Book, BookMotion};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::Canvas;
use iced::widget::{button, container, mouse_area, opaque, text, Column, Row, Space};
use iced::{Color, Element, Length};

const TITLE: &str = "━━━ Chronicles of the Belmonts ━━━";
const INTRO: &str = "A codex of legend, bound in parchment and time";

/// Cover swing when the book opens.
const COVER_SECONDS: f32 = 1.2;
/// Leaf rotation of a page turn.
const TURN_SECONDS: f32 = 0.8;
/// Page content fades out, then back in from [`CONTENT_RETURN`].
const CONTENT_FADE_SECONDS: f32 = 0.3;
const CONTENT_RETURN: f32 = 0.4;
/// Height of the illuminated plate in the lightbox.
const LIGHTBOX_PLATE_HEIGHT: f32 = 320.0;

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Filter(Filter),
    Flip(FlipDirection),
    /// A plate was clicked.
    Select(u32),
    CloseLightbox,
}

/// Tint and glyph standing in for the picture of a category.
#[must_use]
pub fn illumination(category: Category) -> (Color, &'static str) {
    match category {
        Category::Strongholds => (palette::STONE_600, "♜"),
        Category::Battles => (palette::EMBER_500, "⚔"),
        Category::Heritage => (palette::GOLD_700, "⚜"),
        Category::Artifacts => (palette::INK_700, "♛"),
        Category::Events => (palette::NIGHT_700, "✦"),
    }
}

/// Gallery section state.
#[derive(Debug)]
pub struct Gallery {
    codex: Codex,
    scope: AnimationScope,
    open_trigger: Option<Handle>,
    cover: Option<Handle>,
    turn: Option<Handle>,
    entrance: Option<Handle>,
}

impl Gallery {
    #[must_use]
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            codex: Codex::new(&CATALOGUE, scroll_lock),
            scope: AnimationScope::new(),
            open_trigger: None,
            cover: None,
            turn: None,
            entrance: None,
        }
    }

    #[must_use]
    pub fn codex(&self) -> &Codex {
        &self.codex
    }

    /// Arms the trigger that opens the book once it scrolls into view.
    pub fn mount(&mut self, animator: &mut dyn Animator<Target>) {
        if self.open_trigger.is_none() && self.codex.is_closed() {
            self.arm_open_trigger(animator);
        }
    }

    /// Reverts every gallery animation and closes the lightbox, releasing
    /// the page scroll. Returns how many animations were still live.
    pub fn revert(&mut self, animator: &mut dyn Animator<Target>) -> usize {
        self.codex.clear_selection();
        self.open_trigger = None;
        self.cover = None;
        self.turn = None;
        self.entrance = None;
        self.scope.revert(animator)
    }

    pub fn update(&mut self, message: Message, animator: &mut dyn Animator<Target>) {
        match message {
            Message::Filter(filter) => {
                tracing::debug!(filter = filter.label(), "codex filter applied");
                let effect = self.codex.set_filter(filter);
                self.apply(effect, animator);
            }
            Message::Flip(direction) => {
                let effect = self.codex.flip(direction);
                self.apply(effect, animator);
            }
            Message::Select(id) => {
                if self.codex.select(id) {
                    tracing::debug!(id, "lightbox opened");
                }
            }
            Message::CloseLightbox => {
                if self.codex.selection().is_some() {
                    self.codex.clear_selection();
                    tracing::debug!("lightbox closed");
                }
            }
        }
    }

    /// Routes an animation event. Returns `true` if it belonged to the
    /// gallery.
    pub fn handle_event(&mut self, event: Event, animator: &mut dyn Animator<Target>) -> bool {
        let effect = match event {
            Event::Entered(handle) if self.open_trigger == Some(handle) => self.codex.open_book(),
            Event::Completed(handle) if self.cover == Some(handle) => self.codex.finish_opening(),
            Event::Completed(handle) if self.turn == Some(handle) => self.codex.finish_flip(),
            _ => return false,
        };
        self.apply(effect, animator);
        true
    }

    fn apply(&mut self, effect: Effect, animator: &mut dyn Animator<Target>) {
        match effect {
            Effect::None => {}
            Effect::Reset => {
                let live = [
                    self.open_trigger.take(),
                    self.cover.take(),
                    self.turn.take(),
                    self.entrance.take(),
                ];
                for handle in live.into_iter().flatten() {
                    self.scope.release(animator, handle);
                }
                self.arm_open_trigger(animator);
            }
            Effect::PlayCover => {
                tracing::debug!("codex opening");
                if let Some(trigger) = self.open_trigger.take() {
                    self.scope.release(animator, trigger);
                }
                let timeline = Timeline::new().to(
                    Target::CodexCover,
                    &[(Property::RotateY, -180.0)],
                    Tween::new(COVER_SECONDS).easing(Easing::Power2InOut),
                );
                self.cover = Some(self.scope.register(animator, Descriptor::timed(timeline)));
            }
            Effect::Opened => {
                tracing::debug!("codex open");
                if let Some(cover) = self.cover.take() {
                    self.scope.release(animator, cover);
                }
                let timeline = Timeline::new().from(
                    Target::Codex,
                    &[
                        (Property::TranslateY, 80.0),
                        (Property::Opacity, 0.0),
                        (Property::Scale, 0.9),
                    ],
                    Tween::new(0.5).easing(Easing::Power1Out),
                );
                self.entrance = Some(self.scope.register(
                    animator,
                    Descriptor::scrub(Target::Codex, ScrollWindow::top(70.0, 50.0), timeline),
                ));
            }
            Effect::PlayFlip(direction) => {
                tracing::debug!(?direction, page = self.codex.page_index(), "page turn started");
                let turn = Tween::new(TURN_SECONDS).easing(Easing::Power2InOut).at(0.0);
                let timeline = match direction {
                    FlipDirection::Forward => Timeline::new().to(
                        Target::CodexLeaf,
                        &[(Property::RotateY, -180.0)],
                        turn,
                    ),
                    FlipDirection::Backward => Timeline::new().from_to(
                        Target::CodexLeaf,
                        &[(Property::RotateY, -180.0)],
                        &[(Property::RotateY, 0.0)],
                        turn,
                    ),
                }
                .to(
                    Target::CodexContent,
                    &[(Property::Opacity, 0.0)],
                    Tween::new(CONTENT_FADE_SECONDS).at(0.0),
                )
                .to(
                    Target::CodexContent,
                    &[(Property::Opacity, 1.0)],
                    Tween::new(CONTENT_FADE_SECONDS).at(CONTENT_RETURN),
                );
                self.turn = Some(self.scope.register(animator, Descriptor::timed(timeline)));
            }
            Effect::PageTurned(page) => {
                tracing::debug!(page, "page turn finished");
                if let Some(turn) = self.turn.take() {
                    self.scope.release(animator, turn);
                }
            }
        }
    }

    fn arm_open_trigger(&mut self, animator: &mut dyn Animator<Target>) {
        self.open_trigger = Some(self.scope.register(
            animator,
            Descriptor::on_enter(Target::Codex, ScrollWindow::top(60.0, 40.0)),
        ));
    }

    /// Render the section.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and Copy
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let codex = &self.codex;

        let filters = Filter::BUTTONS
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, filter| {
                row.push(
                    button(text(filter.label()).size(typography::BODY))
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::filter(ctx.colors, codex.filter() == filter))
                        .on_press(Message::Filter(filter)),
                )
            });
        let filter_bar = container(filters)
            .width(Length::Fill)
            .height(Length::Fixed(FILTER_BAR_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Top);

        let neighbour = match codex.state() {
            BookState::Open(Leaf::Flipping(direction)) => codex.neighbour(direction),
            _ => None,
        };
        let motion = BookMotion {
            book: ctx.animator.motion(Target::Codex),
            cover: ctx.animator.motion(Target::CodexCover),
            leaf: ctx.animator.motion(Target::CodexLeaf),
            content: ctx.animator.motion(Target::CodexContent),
        };
        let book = Book::new(
            codex.state(),
            codex.current_page(),
            neighbour,
            codex.page_range_label(),
            motion,
            ctx.colors,
        );
        let canvas = container(
            Canvas::new(book)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CODEX_HEIGHT)),
        )
        .max_width(sizing::CODEX_WIDTH);
        let canvas = container(canvas)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let body = Column::new()
            .push(header(TITLE, INTRO, ctx.colors))
            .push(filter_bar)
            .push(canvas)
            .push(self.controls(ctx));

        frame(body, ctx.layout.height(Section::Gallery), ctx.colors, false)
    }

    fn controls<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let codex = &self.codex;
        let turn = |direction: FlipDirection, glyph: &'a str| {
            let turn_btn = button(text(glyph).size(typography::TITLE_SM))
                .width(Length::Fixed(sizing::BUTTON_HEIGHT))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::page_turn(ctx.colors));
            if codex.is_open() && codex.can_flip(direction) {
                turn_btn.on_press(Message::Flip(direction))
            } else {
                turn_btn
            }
        };

        let counter = if codex.page_count() == 0 {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", codex.page_index() + 1, codex.page_count())
        };

        let row = Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(turn(FlipDirection::Backward, "❮"))
            .push(
                text(counter)
                    .size(typography::BODY_LG)
                    .color(ctx.colors.text_secondary),
            )
            .push(turn(FlipDirection::Forward, "❯"));

        container(row)
            .width(Length::Fill)
            .height(Length::Fixed(CONTROLS_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    /// The lightbox over the whole window, when an entry is selected.
    ///
    /// Clicking the veil closes it; clicks on the panel stay on the panel.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and Copy
    pub fn lightbox<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let item = self.codex.selection()?.item();
        let (tint, glyph) = illumination(item.category);

        let close = button(text("✕").size(typography::BODY_LG))
            .style(styles::button::close)
            .on_press(Message::CloseLightbox);
        let top_bar = Row::new()
            .push(Space::new().width(Length::Fill))
            .push(close);

        let plate = container(
            text(glyph)
                .size(typography::DISPLAY * 1.5)
                .color(ctx.colors.parchment),
        )
        .width(Length::Fill)
        .height(Length::Fixed(LIGHTBOX_PLATE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::plate(tint));

        let panel = Column::new()
            .spacing(spacing::MD)
            .push(top_bar)
            .push(plate)
            .push(
                text(item.title)
                    .size(typography::TITLE_MD)
                    .color(ctx.colors.ink),
            )
            .push(
                text(item.description)
                    .size(typography::BODY_LG)
                    .color(ctx.colors.ink),
            )
            .push(
                text(item.category.label())
                    .size(typography::CAPTION)
                    .color(ctx.colors.accent),
            );
        let panel = container(panel)
            .max_width(sizing::LIGHTBOX_WIDTH)
            .padding(spacing::LG)
            .style(styles::container::lightbox(ctx.colors));

        let veil = container(opaque(panel))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::veil(ctx.colors));

        Some(opaque(mouse_area(veil).on_press(Message::CloseLightbox)))
    }
}
