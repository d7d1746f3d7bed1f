// SPDX-License-Identifier: MPL-2.0
//! The codex: a book of chronicles with a cover, two-sided pages, a category
//! filter and a lightbox selection.
//!
//! # States
//!
//! ```text
//!            open_book()            finish_opening()
//!   Closed ──────────────► Opening ─────────────────► Open(Idle)
//!     ▲                                                 │    ▲
//!     │ set_filter() from any state          flip(dir)  │    │ finish_flip()
//!     │                                                 ▼    │
//!     └──────────────────────────────────────── Open(Flipping(dir))
//! ```
//!
//! The machine never waits on anything itself. Operations that start a
//! transient state return an [`Effect`] telling the owner which animation to
//! play; the owner reports completion through [`Codex::finish_opening`] and
//! [`Codex::finish_flip`]. Requests that do not apply to the current state
//! are dropped, never queued.

mod pages;

pub use pages::{paginate, range_label, Page, Side};

use crate::domain::gallery::{self, Filter, GalleryItem};
use crate::domain::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    Forward,
    Backward,
}

/// Sub-state of an open book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaf {
    Idle,
    Flipping(FlipDirection),
}

/// State of the book itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookState {
    #[default]
    Closed,
    Opening,
    Open(Leaf),
}

/// What the owner of the codex must do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Filter applied: cancel cover and flip animations, re-arm the open trigger.
    Reset,
    /// The cover started opening: play the cover animation.
    PlayCover,
    /// The cover finished opening.
    Opened,
    /// A page turn started: play the turn animation.
    PlayFlip(FlipDirection),
    /// A page turn completed; the new page index.
    PageTurned(usize),
}

/// Entry shown in the lightbox. Holds the page scroll lock while alive.
#[derive(Debug)]
pub struct Selection {
    item: GalleryItem,
    _guard: ScrollLockGuard,
}

impl Selection {
    #[must_use]
    pub fn item(&self) -> &GalleryItem {
        &self.item
    }
}

/// Complete codex state.
#[derive(Debug)]
pub struct Codex {
    catalogue: Vec<GalleryItem>,
    filter: Filter,
    entries: Vec<GalleryItem>,
    pages: Vec<Page>,
    page_index: usize,
    book: BookState,
    selection: Option<Selection>,
    scroll_lock: ScrollLock,
}

impl Codex {
    /// Creates a closed codex showing the whole catalogue.
    #[must_use]
    pub fn new(catalogue: &[GalleryItem], scroll_lock: ScrollLock) -> Self {
        let entries = catalogue.to_vec();
        let pages = paginate(&entries);
        Self {
            catalogue: catalogue.to_vec(),
            filter: Filter::All,
            entries,
            pages,
            page_index: 0,
            book: BookState::Closed,
            selection: None,
            scroll_lock,
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Applies `filter`, recomputes the pages and closes the book.
    ///
    /// Always resets, even if `filter` is already active.
    pub fn set_filter(&mut self, filter: Filter) -> Effect {
        self.filter = filter;
        self.entries = gallery::filtered(&self.catalogue, filter);
        self.pages = paginate(&self.entries);
        self.page_index = 0;
        self.selection = None;
        self.book = BookState::Closed;
        Effect::Reset
    }

    /// Starts opening the cover. No-op unless the book is closed.
    pub fn open_book(&mut self) -> Effect {
        match self.book {
            BookState::Closed => {
                self.book = BookState::Opening;
                Effect::PlayCover
            }
            BookState::Opening | BookState::Open(_) => Effect::None,
        }
    }

    /// Completes the cover animation. No-op unless the book is opening.
    pub fn finish_opening(&mut self) -> Effect {
        match self.book {
            BookState::Opening => {
                self.book = BookState::Open(Leaf::Idle);
                Effect::Opened
            }
            BookState::Closed | BookState::Open(_) => Effect::None,
        }
    }

    /// Starts a page turn if the book is open, idle, and not at the bound.
    pub fn flip(&mut self, direction: FlipDirection) -> Effect {
        if self.book != BookState::Open(Leaf::Idle) || !self.has_page_towards(direction) {
            return Effect::None;
        }
        self.book = BookState::Open(Leaf::Flipping(direction));
        Effect::PlayFlip(direction)
    }

    /// Completes the page turn in flight. No-op if none is.
    pub fn finish_flip(&mut self) -> Effect {
        let BookState::Open(Leaf::Flipping(direction)) = self.book else {
            return Effect::None;
        };
        self.page_index = match direction {
            FlipDirection::Forward => self.page_index + 1,
            FlipDirection::Backward => self.page_index - 1,
        };
        self.book = BookState::Open(Leaf::Idle);
        Effect::PageTurned(self.page_index)
    }

    /// Opens the lightbox on the entry with `id` and suspends page scrolling.
    ///
    /// Returns `false` (and changes nothing) if the entry is not part of the
    /// current filter.
    pub fn select(&mut self, id: u32) -> bool {
        let Some(item) = self.entries.iter().find(|item| item.id == id) else {
            return false;
        };
        let item = item.clone();
        // Release the previous guard before taking a new one.
        self.selection = None;
        self.selection = Some(Selection {
            item,
            _guard: self.scroll_lock.acquire(),
        });
        true
    }

    /// Closes the lightbox and restores page scrolling.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    #[must_use]
    pub fn state(&self) -> BookState {
        self.book
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.page_index)
    }

    /// Page that a turn in `direction` would reveal.
    #[must_use]
    pub fn neighbour(&self, direction: FlipDirection) -> Option<&Page> {
        match direction {
            FlipDirection::Forward => self.pages.get(self.page_index + 1),
            FlipDirection::Backward => self
                .page_index
                .checked_sub(1)
                .and_then(|index| self.pages.get(index)),
        }
    }

    /// Number of entries kept by the active filter.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the flip control for `direction` should be enabled.
    #[must_use]
    pub fn can_flip(&self, direction: FlipDirection) -> bool {
        !self.is_flipping() && self.has_page_towards(direction)
    }

    #[must_use]
    pub fn is_flipping(&self) -> bool {
        matches!(self.book, BookState::Open(Leaf::Flipping(_)))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.book == BookState::Closed
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.book, BookState::Open(_))
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Foot label of the current page, or `None` when there are no pages.
    #[must_use]
    pub fn page_range_label(&self) -> Option<String> {
        self.current_page()
            .map(|_| range_label(self.page_index, self.entries.len()))
    }

    fn has_page_towards(&self, direction: FlipDirection) -> bool {
        match direction {
            FlipDirection::Forward => self.page_index + 1 < self.pages.len(),
            FlipDirection::Backward => self.page_index > 0,
        }
    }
}
