// SPDX-License-Identifier: MPL-2.0
use belmonts::animation::{Animator, Descriptor, ScrollTimeline, ScrollWindow, Settings};
use belmonts::domain::chronicle::MANUSCRIPT;
use belmonts::ui::layout::{PageLayout, Section, Target, ABOUT_PIN_DISTANCE};
use belmonts::ui::sections::about;
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use std::hint::black_box;
use std::time::Duration;

fn scroll_timeline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_timeline");

    group.bench_function("build_about_timeline", |b| {
        b.iter(|| black_box(about::scroll_timeline(black_box(&MANUSCRIPT))));
    });

    // One scrub through the pinned About section, sampling every inked
    // character on each step as the view does.
    let layout = PageLayout::new(Size::new(1280.0, 860.0));
    let start = layout.top(Section::About);
    let distance = ABOUT_PIN_DISTANCE * layout.viewport().height;
    let mut engine = ScrollTimeline::new(Settings {
        scrub_lag: Duration::ZERO,
        ..Settings::default()
    });
    engine.register(Descriptor::pinned(
        Target::About,
        ScrollWindow::pinned(ABOUT_PIN_DISTANCE * 100.0),
        about::scroll_timeline(&MANUSCRIPT),
    ));

    group.bench_function("scrub_about_section", |b| {
        b.iter(|| {
            for step in 0..=60 {
                let offset = start + distance * step as f32 / 60.0;
                engine.scroll(offset, layout.viewport().height, &layout);
                black_box(about::ink(&engine, &MANUSCRIPT));
                black_box(engine.motion(Target::Parchment));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, scroll_timeline_benchmark);
criterion_main!(benches);
