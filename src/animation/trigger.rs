// SPDX-License-Identifier: MPL-2.0
//! Scroll windows: the stretch of scrolling during which a trigger element
//! drives its animation.
//!
//! A window is written the way motion designs describe it. `top 60%` means
//! "when the top edge of the element reaches 60% of the viewport height";
//! `+=150%` means "150% of a viewport height after the start".

/// Edge of the trigger element an [`Anchor`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// Element edge meeting a line of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    /// Viewport line, as a fraction of its height from the top.
    pub viewport: f32,
}

impl Anchor {
    #[must_use]
    pub const fn new(edge: Edge, viewport: f32) -> Self {
        Self { edge, viewport }
    }

    /// `top <percent>%`.
    #[must_use]
    pub const fn top(percent: f32) -> Self {
        Self::new(Edge::Top, percent / 100.0)
    }
}

/// Where a window ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEnd {
    Anchor(Anchor),
    /// Relative to the start, in viewport heights.
    Distance(f32),
}

/// Vertical extent of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Center => self.top + self.height / 2.0,
            Edge::Bottom => self.top + self.height,
        }
    }
}

/// Supplies the page position of trigger elements.
pub trait Geometry<K> {
    /// Extent of `element`, or `None` if it is not on the page.
    fn span(&self, element: K) -> Option<Span>;
}

impl<K, F> Geometry<K> for F
where
    F: Fn(K) -> Option<Span>,
{
    fn span(&self, element: K) -> Option<Span> {
        self(element)
    }
}

/// Start and end of a scroll window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub start: Anchor,
    pub end: WindowEnd,
}

impl ScrollWindow {
    #[must_use]
    pub const fn new(start: Anchor, end: WindowEnd) -> Self {
        Self { start, end }
    }

    /// `top <start>%` → `top <end>%`.
    #[must_use]
    pub const fn top(start_percent: f32, end_percent: f32) -> Self {
        Self::new(
            Anchor::top(start_percent),
            WindowEnd::Anchor(Anchor::top(end_percent)),
        )
    }

    /// `top top` → `+=<distance>%`.
    #[must_use]
    pub const fn pinned(distance_percent: f32) -> Self {
        Self::new(
            Anchor::top(0.0),
            WindowEnd::Distance(distance_percent / 100.0),
        )
    }

    /// Scroll offsets at which the window starts and ends.
    #[must_use]
    pub fn range(&self, element: Span, viewport_height: f32) -> (f32, f32) {
        let start = element.edge(self.start.edge) - self.start.viewport * viewport_height;
        let end = match self.end {
            WindowEnd::Anchor(anchor) => element.edge(anchor.edge) - anchor.viewport * viewport_height,
            WindowEnd::Distance(distance) => start + distance * viewport_height,
        };
        (start, end)
    }

    /// Progress through the window at `scroll`, in [0, 1].
    #[must_use]
    pub fn progress(&self, element: Span, scroll: f32, viewport_height: f32) -> f32 {
        let (start, end) = self.range(element, viewport_height);
        if end <= start {
            return if scroll >= start { 1.0 } else { 0.0 };
        }
        ((scroll - start) / (end - start)).clamp(0.0, 1.0)
    }

    /// How far a pinned element must be pushed down to stay in place.
    ///
    /// Grows with scroll inside the window and freezes outside it.
    #[must_use]
    pub fn pin_offset(&self, element: Span, scroll: f32, viewport_height: f32) -> f32 {
        let (start, end) = self.range(element, viewport_height);
        (scroll - start).clamp(0.0, (end - start).max(0.0))
    }
}
