// SPDX-License-Identifier: MPL-2.0
//! Pagination of the filtered chronicles into two-sided pages.

use crate::domain::gallery::GalleryItem;

/// Which side of a spread a slot is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One spread of the codex: up to two entries.
///
/// The left slot is always filled; only the last page of an odd-sized
/// sequence leaves the right slot empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    left: GalleryItem,
    right: Option<GalleryItem>,
}

impl Page {
    #[must_use]
    pub fn left(&self) -> &GalleryItem {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> Option<&GalleryItem> {
        self.right.as_ref()
    }

    /// Returns the entry on `side`, if any.
    #[must_use]
    pub fn slot(&self, side: Side) -> Option<&GalleryItem> {
        match side {
            Side::Left => Some(&self.left),
            Side::Right => self.right.as_ref(),
        }
    }

    /// Entries of this page, left first.
    pub fn items(&self) -> impl Iterator<Item = &GalleryItem> {
        std::iter::once(&self.left).chain(self.right.as_ref())
    }

    /// Returns `true` if the page shows the entry with this id.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.items().any(|item| item.id == id)
    }
}

/// Chunks `items` into consecutive pairs, preserving order.
#[must_use]
pub fn paginate(items: &[GalleryItem]) -> Vec<Page> {
    items
        .chunks(2)
        .map(|pair| Page {
            left: pair[0].clone(),
            right: pair.get(1).cloned(),
        })
        .collect()
}

/// Label printed at the foot of page `index`, e.g. `"3 - 4"`.
///
/// The upper bound never exceeds `total_items`, so the last page of an odd
/// sequence reads `"9 - 9"`.
#[must_use]
pub fn range_label(index: usize, total_items: usize) -> String {
    let first = index * 2 + 1;
    let last = (index * 2 + 2).min(total_items);
    format!("{first} - {last}")
}
