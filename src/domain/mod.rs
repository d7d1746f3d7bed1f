// SPDX-License-Identifier: MPL-2.0
//! Domain layer - content and state machines with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: Chronicle entries ([`GalleryItem`](gallery::GalleryItem)) and
//!   the category [`Filter`](gallery::Filter)
//! - [`codex`]: The book state machine ([`Codex`](codex::Codex)) and its pages
//! - [`scroll_lock`]: Page scroll lock ([`ScrollLock`](scroll_lock::ScrollLock))
//! - [`members`]: The fellowship roster
//! - [`timeline`]: Achievements and the constellation geometry
//! - [`chronicle`]: Manuscript text of the About scroll

pub mod chronicle;
pub mod codex;
pub mod gallery;
pub mod members;
pub mod scroll_lock;
pub mod timeline;
