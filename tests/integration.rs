// SPDX-License-Identifier: MPL-2.0
use belmonts::app::config::{self, Config};
use belmonts::domain::codex::{paginate, range_label, BookState, Codex, FlipDirection, Leaf};
use belmonts::domain::gallery::{self, Category, Filter, CATALOGUE};
use belmonts::domain::scroll_lock::ScrollLock;
use belmonts::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

fn opened(filter: Filter, lock: &ScrollLock) -> Codex {
    let mut codex = Codex::new(&CATALOGUE, lock.clone());
    codex.set_filter(filter);
    codex.open_book();
    codex.finish_opening();
    codex
}

fn turn(codex: &mut Codex, direction: FlipDirection) {
    codex.flip(direction);
    codex.finish_flip();
}

#[test]
fn test_artifacts_fit_on_a_single_page() {
    let lock = ScrollLock::new();
    let mut codex = opened(Filter::Only(Category::Artifacts), &lock);

    assert_eq!(codex.page_count(), 1);
    let page = codex.current_page().expect("artifacts page");
    assert_eq!(page.left().category, Category::Artifacts);
    assert_eq!(page.right().map(|item| item.category), Some(Category::Artifacts));
    assert_eq!(codex.page_range_label().as_deref(), Some("1 - 2"));

    assert!(!codex.can_flip(FlipDirection::Forward));
    turn(&mut codex, FlipDirection::Forward);
    assert_eq!(codex.page_index(), 0);
    assert_eq!(codex.state(), BookState::Open(Leaf::Idle));
}

#[test]
fn test_reading_the_whole_catalogue() {
    let lock = ScrollLock::new();
    let mut codex = opened(Filter::All, &lock);
    assert_eq!(codex.page_count(), 5);

    for _ in 0..5 {
        turn(&mut codex, FlipDirection::Forward);
    }
    assert_eq!(codex.page_index(), 4);
    let last = codex.current_page().expect("last page");
    assert_eq!(last.left().id, 9);
    assert!(last.right().is_none());
    assert_eq!(codex.page_range_label().as_deref(), Some("9 - 9"));

    // And back to the first spread.
    for _ in 0..6 {
        turn(&mut codex, FlipDirection::Backward);
    }
    assert_eq!(codex.page_index(), 0);
}

#[test]
fn test_empty_catalogue_disables_both_flips() {
    let mut codex = Codex::new(&[], ScrollLock::new());
    codex.open_book();
    codex.finish_opening();

    assert_eq!(codex.page_count(), 0);
    for direction in [FlipDirection::Forward, FlipDirection::Backward] {
        assert!(!codex.can_flip(direction));
        turn(&mut codex, direction);
        assert_eq!(codex.page_index(), 0);
    }
    assert_eq!(codex.page_range_label(), None);
    assert_eq!(codex.state(), BookState::Open(Leaf::Idle));
}

#[test]
fn test_pages_preserve_the_filtered_order() {
    for filter in Filter::BUTTONS {
        let entries = gallery::filtered(&CATALOGUE, filter);
        let flattened: Vec<u32> = paginate(&entries)
            .iter()
            .flat_map(|page| page.items().map(|item| item.id).collect::<Vec<_>>())
            .collect();
        let expected: Vec<u32> = entries.iter().map(|item| item.id).collect();
        assert_eq!(flattened, expected, "{filter:?}");
    }
}

#[test]
fn test_range_labels_never_pass_the_entry_count() {
    assert_eq!(range_label(0, 9), "1 - 2");
    assert_eq!(range_label(3, 9), "7 - 8");
    assert_eq!(range_label(0, 1), "1 - 1");
}

#[test]
fn test_lightbox_holds_the_page_scroll() {
    let lock = ScrollLock::new();
    let mut codex = opened(Filter::All, &lock);

    assert!(codex.select(3));
    assert!(lock.is_locked());
    // Picking another entry swaps the selection but keeps a single holder.
    assert!(codex.select(5));
    assert_eq!(lock.holders(), 1);

    codex.clear_selection();
    assert!(!lock.is_locked());
}

#[test]
fn test_changing_filter_closes_everything() {
    let lock = ScrollLock::new();
    let mut codex = opened(Filter::All, &lock);
    turn(&mut codex, FlipDirection::Forward);
    codex.select(3);

    codex.set_filter(Filter::Only(Category::Battles));
    assert!(codex.is_closed());
    assert_eq!(codex.page_index(), 0);
    assert!(codex.selection().is_none());
    assert!(!lock.is_locked());
    // Entries outside the filter cannot be selected.
    assert!(!codex.select(1));
    assert!(!lock.is_locked());
}

#[test]
fn test_missing_settings_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn test_malformed_settings_file_warns_and_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[motion\ntime_scale = ")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some_and(|message| message.contains("settings.toml")));
}

#[test]
fn test_settings_file_drives_playback() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"light\"\n\n[motion]\ntime_scale = 9.0\n",
    )
    .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);

    let settings = loaded.motion.settings(false);
    assert_eq!(settings.time_scale, config::MAX_TIME_SCALE);
    assert!(!settings.reduced_motion);
    // The command line flag wins over the file.
    assert!(loaded.motion.settings(true).reduced_motion);
}
