// SPDX-License-Identifier: MPL-2.0
//! About section: the parchment scroll.
//!
//! The section is pinned while the reader scrolls through one and a half
//! viewport heights. Over that distance the parchment unrolls, settles with
//! a small bounce, and the manuscript is inked line after line, one
//! character at a time.

use crate::animation::{
    AnimationScope, Animator, Descriptor, Easing, Handle, Property, ScrollWindow, Timeline, Tween,
};
use crate::domain::chronicle::{ManuscriptLine, MANUSCRIPT};
use crate::ui::design_tokens::spacing;
use crate::ui::layout::{Section, Target, ABOUT_PIN_DISTANCE};
use crate::ui::sections::ViewContext;
use crate::ui::styles;
use crate::ui::widgets::manuscript::Manuscript;
use iced::widget::canvas::Canvas;
use iced::widget::container;
use iced::{Element, Length, Padding};

/// Timeline position of the first line; each next line starts
/// [`LINE_SPACING`] later.
const FIRST_LINE_AT: f32 = 0.8;
const LINE_SPACING: f32 = 0.3;
/// Gap between two characters starting to ink.
const CHAR_STAGGER: f32 = 0.02;
const CHAR_SECONDS: f32 = 0.05;

/// Every ink target of `line`.
fn ink_targets(line: u8, text: &str) -> impl Iterator<Item = Target> + '_ {
    (0u16..)
        .zip(text.chars())
        .map(move |(index, _)| Target::InkChar { line, index })
}

/// Unroll of the parchment and inking of `lines`, on one scrubbed timeline.
#[must_use]
pub fn scroll_timeline(lines: &[ManuscriptLine]) -> Timeline<Target> {
    let unrolled = Timeline::new()
        .from_to(
            Target::Parchment,
            &[(Property::ScaleY, 0.05), (Property::Opacity, 0.8)],
            &[(Property::ScaleY, 1.0), (Property::Opacity, 1.0)],
            Tween::new(1.0).easing(Easing::Power2Out),
        )
        .to(
            Target::Parchment,
            &[(Property::ScaleY, 0.98)],
            Tween::new(0.1).easing(Easing::Power1InOut),
        )
        .to(
            Target::Parchment,
            &[(Property::ScaleY, 1.0)],
            Tween::new(0.1).easing(Easing::Power1InOut),
        );

    (0u8..)
        .zip(lines)
        .fold(unrolled, |timeline, (line, manuscript_line)| {
            timeline.stagger_from(
                ink_targets(line, manuscript_line.text),
                &[(Property::Opacity, 0.0)],
                Tween::new(CHAR_SECONDS).at(f32::from(line) * LINE_SPACING + FIRST_LINE_AT),
                CHAR_STAGGER,
            )
        })
}

/// Ink opacity of every character of `lines`.
#[must_use]
pub fn ink(animator: &dyn Animator<Target>, lines: &[ManuscriptLine]) -> Vec<Vec<f32>> {
    (0u8..)
        .zip(lines)
        .map(|(line, manuscript_line)| {
            ink_targets(line, manuscript_line.text)
                .map(|target| animator.motion(target).opacity)
                .collect()
        })
        .collect()
}

/// About section state.
#[derive(Debug, Default)]
pub struct About {
    scope: AnimationScope,
    scroll: Option<Handle>,
}

impl About {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, animator: &mut dyn Animator<Target>) {
        if self.scroll.is_some() {
            return;
        }
        let descriptor = Descriptor::pinned(
            Target::About,
            ScrollWindow::pinned(ABOUT_PIN_DISTANCE * 100.0),
            scroll_timeline(&MANUSCRIPT),
        );
        self.scroll = Some(self.scope.register(animator, descriptor));
    }

    /// Reverts the scroll, which also drops every inked character.
    pub fn revert(&mut self, animator: &mut dyn Animator<Target>) -> usize {
        self.scroll = None;
        self.scope.revert(animator)
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and Copy
    pub fn view<'a, Message: 'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let viewport = ctx.layout.viewport().height;
        let pin = ctx.animator.pin_offset(Target::About);

        let manuscript = Manuscript::new(
            &MANUSCRIPT,
            ink(ctx.animator, &MANUSCRIPT),
            ctx.animator.motion(Target::Parchment),
            ctx.colors,
        );
        let canvas = Canvas::new(manuscript)
            .width(Length::Fill)
            .height(Length::Fixed((viewport - 2.0 * spacing::XL).max(0.0)));

        container(canvas)
            .width(Length::Fill)
            .height(Length::Fixed(ctx.layout.height(Section::About)))
            .padding(Padding {
                top: pin + spacing::XL,
                bottom: 0.0,
                left: spacing::XL,
                right: spacing::XL,
            })
            .clip(true)
            .style(styles::container::section(ctx.colors, true))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{ScrollTimeline, Settings};
    use crate::ui::layout::PageLayout;
    use iced::Size;
    use std::time::Duration;

    const VIEWPORT: f32 = 800.0;

    fn mounted() -> (About, ScrollTimeline<Target>, PageLayout) {
        let mut about = About::new();
        let mut animator = ScrollTimeline::new(Settings {
            scrub_lag: Duration::ZERO,
            ..Settings::default()
        });
        about.mount(&mut animator);
        (about, animator, PageLayout::new(Size::new(1280.0, VIEWPORT)))
    }

    #[test]
    fn parchment_starts_rolled_up() {
        let (_, mut animator, layout) = mounted();
        animator.scroll(0.0, VIEWPORT, &layout);
        let parchment = animator.motion(Target::Parchment);
        assert_eq!(parchment.scale_y, 0.05);
        assert_eq!(parchment.opacity, 0.8);
        assert!(ink(&animator, &MANUSCRIPT)
            .iter()
            .flatten()
            .all(|&alpha| alpha == 0.0));
    }

    #[test]
    fn scrolling_through_the_pin_inks_everything() {
        let (_, mut animator, layout) = mounted();
        let end = layout.top(Section::About) + ABOUT_PIN_DISTANCE * VIEWPORT;
        animator.scroll(end, VIEWPORT, &layout);

        assert!((animator.motion(Target::Parchment).scale_y - 1.0).abs() < 1e-5);
        assert!(ink(&animator, &MANUSCRIPT)
            .iter()
            .flatten()
            .all(|&alpha| alpha == 1.0));
        assert_eq!(
            animator.pin_offset(Target::About),
            ABOUT_PIN_DISTANCE * VIEWPORT
        );
    }

    #[test]
    fn title_inks_before_the_signature() {
        let (_, mut animator, layout) = mounted();
        let timeline = scroll_timeline(&MANUSCRIPT);
        // Clock position just after the title has finished.
        let title_end = FIRST_LINE_AT
            + CHAR_STAGGER * (MANUSCRIPT[0].text.chars().count() - 1) as f32
            + CHAR_SECONDS;
        let progress = (title_end + 0.01) / timeline.duration();
        let scroll = layout.top(Section::About) + progress * ABOUT_PIN_DISTANCE * VIEWPORT;
        animator.scroll(scroll, VIEWPORT, &layout);

        let ink = ink(&animator, &MANUSCRIPT);
        assert!(ink[0].iter().all(|&alpha| alpha == 1.0));
        assert!(ink[6].iter().all(|&alpha| alpha == 0.0));
    }

    #[test]
    fn characters_ink_in_reading_order() {
        let timeline = scroll_timeline(&MANUSCRIPT);
        let starts: Vec<f32> = timeline
            .tracks()
            .iter()
            .filter(|track| matches!(track.target(), Target::InkChar { line: 1, .. }))
            .map(|track| track.start())
            .collect();
        assert_eq!(starts.len(), MANUSCRIPT[1].text.chars().count());
        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
        assert!((starts[0] - (FIRST_LINE_AT + LINE_SPACING)).abs() < 1e-6);
    }

    #[test]
    fn ink_matches_the_manuscript_shape() {
        let animator: ScrollTimeline<Target> = ScrollTimeline::new(Settings::default());
        let ink = ink(&animator, &MANUSCRIPT);
        assert_eq!(ink.len(), MANUSCRIPT.len());
        for (alphas, line) in ink.iter().zip(MANUSCRIPT.iter()) {
            assert_eq!(alphas.len(), line.text.chars().count());
        }
    }

    #[test]
    fn revert_drops_the_ink() {
        let (mut about, mut animator, layout) = mounted();
        animator.scroll(0.0, VIEWPORT, &layout);
        assert_eq!(about.revert(&mut animator), 1);
        assert!(ink(&animator, &MANUSCRIPT)
            .iter()
            .flatten()
            .all(|&alpha| alpha == 1.0));
        assert_eq!(animator.pin_offset(Target::About), 0.0);
    }
}
