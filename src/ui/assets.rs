// SPDX-License-Identifier: MPL-2.0
//! Artwork embedded in the binary: the hero crest and the member portraits.
//!
//! Files are embedded at compile time from `assets/art/`. A missing or empty
//! file is reported once at startup and the views fall back to a glyph.

use crate::domain::members::Portrait;
use crate::error::{Error, Result};
use iced::widget::svg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/art/"]
struct Asset;

/// Embedded artwork pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork {
    Crest,
    Knight,
    Lady,
}

impl Artwork {
    pub const ALL: [Artwork; 3] = [Artwork::Crest, Artwork::Knight, Artwork::Lady];

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Artwork::Crest => "crest.svg",
            Artwork::Knight => "knight.svg",
            Artwork::Lady => "lady.svg",
        }
    }

    /// Glyph drawn in place of the artwork when it cannot be loaded.
    #[must_use]
    pub fn fallback_glyph(self) -> &'static str {
        match self {
            Artwork::Crest => "⚔",
            Artwork::Knight => "♞",
            Artwork::Lady => "♛",
        }
    }
}

impl From<Portrait> for Artwork {
    fn from(portrait: Portrait) -> Self {
        match portrait {
            Portrait::Knight => Artwork::Knight,
            Portrait::Lady => Artwork::Lady,
        }
    }
}

/// Reads the embedded bytes of `artwork`.
pub fn bytes(artwork: Artwork) -> Result<Vec<u8>> {
    let file = Asset::get(artwork.file_name())
        .ok_or_else(|| Error::Asset(format!("{} is not embedded", artwork.file_name())))?;
    if file.data.is_empty() {
        return Err(Error::Asset(format!("{} is empty", artwork.file_name())));
    }
    Ok(file.data.into_owned())
}

/// SVG handles of every artwork piece, loaded once.
#[derive(Debug, Clone, Default)]
pub struct Artworks {
    crest: Option<svg::Handle>,
    knight: Option<svg::Handle>,
    lady: Option<svg::Handle>,
}

impl Artworks {
    /// Loads every piece. Pieces that fail to load are logged and left out.
    #[must_use]
    pub fn load() -> Self {
        let mut artworks = Self::default();
        for artwork in Artwork::ALL {
            match bytes(artwork) {
                Ok(data) => *artworks.slot_mut(artwork) = Some(svg::Handle::from_memory(data)),
                Err(err) => tracing::warn!(error.kind = err.kind(), "{err}"),
            }
        }
        artworks
    }

    /// Handle of `artwork`, if it loaded.
    #[must_use]
    pub fn get(&self, artwork: Artwork) -> Option<&svg::Handle> {
        match artwork {
            Artwork::Crest => self.crest.as_ref(),
            Artwork::Knight => self.knight.as_ref(),
            Artwork::Lady => self.lady.as_ref(),
        }
    }

    fn slot_mut(&mut self, artwork: Artwork) -> &mut Option<svg::Handle> {
        match artwork {
            Artwork::Crest => &mut self.crest,
            Artwork::Knight => &mut self.knight,
            Artwork::Lady => &mut self.lady,
        }
    }
}
