// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that freezes the page scrollable while the scroll lock is
//! held.
//!
//! While locked, wheel, touch, mouse button and scrolling key events never
//! reach the wrapped content, so the page cannot move by any input. Every
//! other event passes through, including the keys bound to shortcuts.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::keyboard::{self, key::Named};
use iced::{touch, Element, Event, Length, Rectangle, Size};

/// A widget that wraps content and withholds scrolling input while locked.
pub struct ScrollGuard<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    locked: bool,
}

impl<'a, Message, Theme, Renderer> ScrollGuard<'a, Message, Theme, Renderer> {
    /// Creates a new `ScrollGuard` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, locked: bool) -> Self {
        Self {
            content: content.into(),
            locked,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollGuard<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.locked && is_scrolling_input(event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.locked {
            return mouse::Interaction::None;
        }
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollGuard<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(guard: ScrollGuard<'a, Message, Theme, Renderer>) -> Self {
        Self::new(guard)
    }
}

/// Helper function to create a scroll guard.
pub fn scroll_guard<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    locked: bool,
) -> ScrollGuard<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollGuard::new(content, locked)
}

fn is_scrolling_input(event: &Event) -> bool {
    match event {
        Event::Mouse(
            mouse::Event::WheelScrolled { .. }
            | mouse::Event::ButtonPressed(_)
            | mouse::Event::ButtonReleased(_),
        )
        | Event::Touch(
            touch::Event::FingerPressed { .. }
            | touch::Event::FingerMoved { .. }
            | touch::Event::FingerLifted { .. },
        ) => true,
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => is_scrolling_key(key),
        _ => false,
    }
}

fn is_scrolling_key(key: &keyboard::Key) -> bool {
    matches!(
        key,
        keyboard::Key::Named(
            Named::ArrowUp
                | Named::ArrowDown
                | Named::PageUp
                | Named::PageDown
                | Named::Home
                | Named::End
                | Named::Space
        )
    )
}
