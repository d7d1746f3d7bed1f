// SPDX-License-Identifier: MPL-2.0
//! User interface of the landing page.
//!
//! Sections follow the Elm-style "state down, messages up" pattern: each
//! one owns its state and animation registrations, renders from the shared
//! animator, and reports messages back to the application.
//!
//! # Sections
//!
//! - [`sections::hero`] - Crest, clan name and the call to enter
//! - [`sections::about`] - Pinned parchment scroll inked while scrolling
//! - [`sections::gallery`] - Illuminated codex with filters and a lightbox
//! - [`sections::members`] - Fellowship cards that turn on hover
//! - [`sections::timeline`] - Constellation map of the clan's history
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Fixed page geometry and animation targets
//! - [`widgets`] - Custom widgets (scroll guard, canvas lettering)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`assets`] - Embedded artwork

pub mod assets;
pub mod design_tokens;
pub mod layout;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
