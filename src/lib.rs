// SPDX-License-Identifier: MPL-2.0
//! `belmonts` is the landing page of the Belmonts clan as a desktop
//! application built with the Iced GUI framework.
//!
//! One window scrolls through five sections bound together by
//! scroll-driven animations. The [`animation`] engine interprets the
//! descriptors each section registers; [`domain`] holds the clan's content
//! and the codex state machine; [`ui`] renders it all.

pub mod animation;
pub mod app;
pub mod domain;
pub mod error;
pub mod ui;
