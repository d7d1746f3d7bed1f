// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Every section is laid out at a fixed height computed here from the window
//! size, so the page positions the scroll triggers read are known without
//! asking the renderer. Section views must size themselves with the same
//! values.

use crate::animation::{Geometry, Span};
use crate::domain::members::ROSTER;
use crate::ui::design_tokens::{sizing, spacing};
use iced::Size;

/// Vertical padding above and below each section's content.
pub const SECTION_PADDING: f32 = spacing::XXXL;
/// Horizontal padding of the page.
pub const SIDE_PADDING: f32 = spacing::XL;
/// Section title plus its introduction line.
pub const HEADER_HEIGHT: f32 = 140.0;
/// Row of gallery filter buttons.
pub const FILTER_BAR_HEIGHT: f32 = 64.0;
/// Page-turn controls under the codex.
pub const CONTROLS_HEIGHT: f32 = 72.0;
/// Gap between rows of member cards.
pub const MEMBER_ROW_GAP: f32 = spacing::XL;
/// Scrolling distance the About section stays pinned, in viewport heights.
pub const ABOUT_PIN_DISTANCE: f32 = 1.5;

/// Smallest viewport height the page lays out for.
const MIN_VIEWPORT_HEIGHT: f32 = 480.0;

/// Elements animations refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    HeroTitle,
    HeroMotto,
    HeroCta,
    /// The About section, trigger of the pinned scroll.
    About,
    Parchment,
    /// One character of the manuscript.
    InkChar {
        line: u8,
        index: u16,
    },
    Codex,
    CodexCover,
    CodexLeaf,
    CodexContent,
    MemberCard(u8),
    Map,
    Star(u8),
}

/// Sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Gallery,
    Members,
    Timeline,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Gallery,
        Section::Members,
        Section::Timeline,
    ];
}

/// Fixed geometry of the page for one window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    viewport: Size,
    member_columns: usize,
}

impl PageLayout {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let viewport = Size::new(viewport.width, viewport.height.max(MIN_VIEWPORT_HEIGHT));
        let content_width = (viewport.width - 2.0 * SIDE_PADDING).max(0.0);
        // Truncation intended: only whole columns fit.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let fitting = (content_width / sizing::MEMBER_COLUMN) as usize;
        Self {
            viewport,
            member_columns: fitting.clamp(1, sizing::MEMBER_COLUMNS_MAX),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn member_columns(&self) -> usize {
        self.member_columns
    }

    #[must_use]
    pub fn member_rows(&self) -> usize {
        ROSTER.len().div_ceil(self.member_columns)
    }

    #[must_use]
    pub fn height(&self, section: Section) -> f32 {
        let vh = self.viewport.height;
        match section {
            Section::Hero => vh,
            Section::About => vh * (1.0 + ABOUT_PIN_DISTANCE),
            Section::Gallery => {
                2.0 * SECTION_PADDING
                    + HEADER_HEIGHT
                    + FILTER_BAR_HEIGHT
                    + sizing::CODEX_HEIGHT
                    + CONTROLS_HEIGHT
            }
            Section::Members => {
                #[allow(clippy::cast_precision_loss)]
                let rows = self.member_rows() as f32;
                2.0 * SECTION_PADDING
                    + HEADER_HEIGHT
                    + rows * sizing::MEMBER_CARD_HEIGHT
                    + (rows - 1.0).max(0.0) * MEMBER_ROW_GAP
            }
            Section::Timeline => 2.0 * SECTION_PADDING + HEADER_HEIGHT + sizing::MAP_HEIGHT,
        }
    }

    /// Page offset of the top of `section`.
    #[must_use]
    pub fn top(&self, section: Section) -> f32 {
        Section::ALL
            .iter()
            .take_while(|&&s| s != section)
            .map(|&s| self.height(s))
            .sum()
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        Section::ALL.iter().map(|&s| self.height(s)).sum()
    }

    /// Largest scroll offset of the page.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.total_height() - self.viewport.height).max(0.0)
    }

    /// Page offset of the top of the codex.
    #[must_use]
    pub fn codex_top(&self) -> f32 {
        self.top(Section::Gallery) + SECTION_PADDING + HEADER_HEIGHT + FILTER_BAR_HEIGHT
    }

    /// Page offset of the top of the constellation map.
    #[must_use]
    pub fn map_top(&self) -> f32 {
        self.top(Section::Timeline) + SECTION_PADDING + HEADER_HEIGHT
    }

    fn member_card_top(&self, index: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let row = (index / self.member_columns) as f32;
        self.top(Section::Members)
            + SECTION_PADDING
            + HEADER_HEIGHT
            + row * (sizing::MEMBER_CARD_HEIGHT + MEMBER_ROW_GAP)
    }
}

impl Geometry<Target> for PageLayout {
    fn span(&self, element: Target) -> Option<Span> {
        match element {
            Target::About => Some(Span::new(
                self.top(Section::About),
                self.height(Section::About),
            )),
            Target::Codex => Some(Span::new(self.codex_top(), sizing::CODEX_HEIGHT)),
            Target::MemberCard(index) => {
                let index = usize::from(index);
                (index < ROSTER.len()).then(|| {
                    Span::new(self.member_card_top(index), sizing::MEMBER_CARD_HEIGHT)
                })
            }
            Target::Map => Some(Span::new(self.map_top(), sizing::MAP_HEIGHT)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32, height: f32) -> PageLayout {
        PageLayout::new(Size::new(width, height))
    }

    #[test]
    fn sections_are_stacked_in_order() {
        let page = layout(1280.0, 860.0);
        let mut expected = 0.0;
        for section in Section::ALL {
            assert_eq!(page.top(section), expected);
            expected += page.height(section);
        }
        assert_eq!(page.total_height(), expected);
    }

    #[test]
    fn hero_fills_the_viewport_and_about_adds_the_pin_distance() {
        let page = layout(1280.0, 800.0);
        assert_eq!(page.height(Section::Hero), 800.0);
        assert_eq!(page.height(Section::About), 2000.0);
    }

    #[test]
    fn member_columns_follow_the_width() {
        assert_eq!(layout(300.0, 800.0).member_columns(), 1);
        assert_eq!(layout(700.0, 800.0).member_columns(), 2);
        assert_eq!(layout(1280.0, 800.0).member_columns(), 4);
        assert_eq!(layout(4000.0, 800.0).member_columns(), 4);
    }

    #[test]
    fn narrow_windows_stack_more_rows() {
        let wide = layout(1280.0, 800.0);
        let narrow = layout(700.0, 800.0);
        assert_eq!(wide.member_rows(), 2);
        assert_eq!(narrow.member_rows(), 4);
        assert!(narrow.height(Section::Members) > wide.height(Section::Members));
    }

    #[test]
    fn member_cards_of_one_row_share_their_top() {
        let page = layout(1280.0, 800.0);
        let first = page.span(Target::MemberCard(0)).unwrap();
        let fourth = page.span(Target::MemberCard(3)).unwrap();
        let fifth = page.span(Target::MemberCard(4)).unwrap();
        assert_eq!(first.top, fourth.top);
        assert!(fifth.top > first.top);
        assert!(page.span(Target::MemberCard(8)).is_none());
    }

    #[test]
    fn codex_sits_inside_the_gallery() {
        let page = layout(1280.0, 800.0);
        let codex = page.span(Target::Codex).unwrap();
        let top = page.top(Section::Gallery);
        assert!(codex.top > top);
        assert!(codex.top + codex.height < top + page.height(Section::Gallery));
    }

    #[test]
    fn map_follows_the_members_grid() {
        let page = layout(1280.0, 800.0);
        let map = page.span(Target::Map).unwrap();
        assert!(map.top > page.top(Section::Timeline));
        assert_eq!(map.height, sizing::MAP_HEIGHT);
    }

    #[test]
    fn decorative_targets_have_no_span() {
        let page = layout(1280.0, 800.0);
        assert!(page.span(Target::HeroTitle).is_none());
        assert!(page.span(Target::InkChar { line: 0, index: 0 }).is_none());
        assert!(page.span(Target::Star(0)).is_none());
    }

    #[test]
    fn tiny_viewports_are_clamped() {
        let page = layout(200.0, 10.0);
        assert_eq!(page.viewport().height, MIN_VIEWPORT_HEIGHT);
        assert!(page.max_scroll() > 0.0);
    }
}
