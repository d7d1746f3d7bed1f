// SPDX-License-Identifier: MPL-2.0
//! Gallery catalogue types for the codex.
//!
//! The catalogue is fixed at startup and never mutated. Filters are a closed
//! enum mirroring the six filter buttons, so an unknown category cannot be
//! requested.
//!
//! # Available Filters
//!
//! - [`Filter::All`]: every entry of the catalogue
//! - [`Filter::Only`]: entries of a single [`Category`]

use std::fmt;

/// Category an entry of the chronicles belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Strongholds,
    Battles,
    Heritage,
    Artifacts,
    Events,
}

impl Category {
    /// All categories, in filter-bar order.
    pub const ALL: [Category; 5] = [
        Category::Strongholds,
        Category::Battles,
        Category::Heritage,
        Category::Artifacts,
        Category::Events,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Strongholds => "Strongholds",
            Category::Battles => "Battles",
            Category::Heritage => "Heritage",
            Category::Artifacts => "Artifacts",
            Category::Events => "Events",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active filter of the codex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Filter {
    /// Show the whole catalogue.
    #[default]
    All,
    /// Show only the entries of one category.
    Only(Category),
}

impl Filter {
    /// The six filter buttons, in display order.
    pub const BUTTONS: [Filter; 6] = [
        Filter::All,
        Filter::Only(Category::Strongholds),
        Filter::Only(Category::Battles),
        Filter::Only(Category::Heritage),
        Filter::Only(Category::Artifacts),
        Filter::Only(Category::Events),
    ];

    /// Returns `true` if this filter keeps the given item.
    #[must_use]
    pub fn matches(self, item: &GalleryItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => item.category == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Filter::All)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }
}

/// One entry of the chronicles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    /// Image location. Never fetched; kept as an opaque reference.
    pub image_ref: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// The chronicles of the Belmonts, in catalogue order.
pub const CATALOGUE: [GalleryItem; 9] = [
    GalleryItem {
        id: 1,
        image_ref: "https://images.unsplash.com/photo-1533837382332-15a3d48c4138?w=800",
        title: "Castle Fortress",
        description: "The great stronghold where legends were forged",
        category: Category::Strongholds,
    },
    GalleryItem {
        id: 2,
        image_ref: "https://images.unsplash.com/photo-1589578527966-fdac0f44566c?w=800",
        title: "Battle Formation",
        description: "Warriors standing as one against the darkness",
        category: Category::Battles,
    },
    GalleryItem {
        id: 3,
        image_ref: "https://images.unsplash.com/photo-1565000852-a63c066a6c7b?w=800",
        title: "Ancient Hall",
        description: "Where the council of Belmonts convened",
        category: Category::Heritage,
    },
    GalleryItem {
        id: 4,
        image_ref: "https://images.unsplash.com/photo-1567359781514-3b964e2b04d6?w=800",
        title: "War Banner",
        description: "The sacred banner carried through ages",
        category: Category::Artifacts,
    },
    GalleryItem {
        id: 5,
        image_ref: "https://images.unsplash.com/photo-1551414743-7a5f0e9e1f3c?w=800",
        title: "Great Council",
        description: "Ancient deliberations of the Belmont lineage",
        category: Category::Events,
    },
    GalleryItem {
        id: 6,
        image_ref: "https://images.unsplash.com/photo-1581456495146-65a71b2c8e52?w=800",
        title: "Knight's Armor",
        description: "Forged in fire, tested in battle",
        category: Category::Artifacts,
    },
    GalleryItem {
        id: 7,
        image_ref: "https://images.unsplash.com/photo-1578590715892-38e33cb1eedd?w=800",
        title: "Mountain Outpost",
        description: "Sentinel of the northern reaches",
        category: Category::Strongholds,
    },
    GalleryItem {
        id: 8,
        image_ref: "https://images.unsplash.com/photo-1589578228447-e1a4e481c6c8?w=800",
        title: "Victory Celebration",
        description: "A triumph etched in history",
        category: Category::Events,
    },
    GalleryItem {
        id: 9,
        image_ref: "https://images.unsplash.com/photo-1604869515882-4d10fa4b0492?w=800",
        title: "Sacred Scroll",
        description: "Knowledge inscribed upon ancient parchment",
        category: Category::Heritage,
    },
];

/// Returns the catalogue entries kept by `filter`, in catalogue order.
#[must_use]
pub fn filtered(catalogue: &[GalleryItem], filter: Filter) -> Vec<GalleryItem> {
    catalogue
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}
