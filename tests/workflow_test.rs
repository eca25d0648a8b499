use std::fs::{self, File};
use std::path::Path;

use tempfile::tempdir;

use show_sort::config::{Settings, load_spec};
use show_sort::transform::MatchMode;
use show_sort::workflow::{ProcessingOptions, run_batch};

const SCHEME: &str =
    "<show> - <season>x<episode> - <title>\n<show>/Season <season>/<episode> - <title>";

fn create_files(root: &Path, names: &[&str]) {
    for name in names {
        File::create(root.join(name)).expect("Failed to create test file");
    }
}

fn options(root: &Path, match_mode: MatchMode, dry_run: bool) -> ProcessingOptions {
    let settings = Settings {
        directory: root.to_path_buf(),
        match_mode,
        ..Settings::default()
    };
    ProcessingOptions::from_settings(&settings, dry_run)
}

#[test]
fn test_batch_sorts_episodes_into_seasons() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("name-scheme.format"), SCHEME).unwrap();
    create_files(
        root,
        &[
            "Breaking Bad - 1x05 - Pilot.mkv",
            "Breaking Bad - 1x06 - Crazy Handful.mkv",
            "Breaking Bad - 2x01 - Seven Thirty-Seven.mp4",
            "readme.txt",
        ],
    );

    let options = options(root, MatchMode::Strict, false);
    let spec = load_spec(&options.spec_path).unwrap();
    let context = run_batch(&options, &spec).unwrap();

    assert_eq!(context.stats.files_found, 3);
    assert_eq!(context.stats.files_renamed, 3);
    assert!(context.is_clean());

    let season_one = root.join("Breaking Bad").join("Season 1");
    assert!(season_one.join("05 - Pilot.mkv").exists());
    assert!(season_one.join("06 - Crazy Handful.mkv").exists());
    assert!(
        root.join("Breaking Bad")
            .join("Season 2")
            .join("01 - Seven Thirty-Seven.mp4")
            .exists()
    );

    // Non-video files and the scheme itself stay where they are
    assert!(root.join("readme.txt").exists());
    assert!(root.join("name-scheme.format").exists());
}

#[test]
fn test_batch_continues_after_mismatch() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("name-scheme.format"), SCHEME).unwrap();
    create_files(root, &["Breaking Bad S01E05.mkv", "Foo - 1x01 - Bar.mkv"]);

    let options = options(root, MatchMode::Strict, false);
    let spec = load_spec(&options.spec_path).unwrap();
    let context = run_batch(&options, &spec).unwrap();

    assert_eq!(context.stats.files_skipped, 1);
    assert_eq!(context.stats.files_renamed, 1);
    assert!(root.join("Breaking Bad S01E05.mkv").exists());
    assert!(root.join("Foo").join("Season 1").join("01 - Bar.mkv").exists());
}

#[test]
fn test_batch_keeps_existing_destination() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("name-scheme.format"), SCHEME).unwrap();
    create_files(root, &["Foo - 1x01 - Bar.mkv"]);
    let existing = root.join("Foo").join("Season 1");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("01 - Bar.mkv"), "keep me").unwrap();

    let options = options(root, MatchMode::Strict, false);
    let spec = load_spec(&options.spec_path).unwrap();
    let context = run_batch(&options, &spec).unwrap();

    assert_eq!(context.stats.errors, 1);
    assert!(root.join("Foo - 1x01 - Bar.mkv").exists());
    assert_eq!(
        fs::read_to_string(existing.join("01 - Bar.mkv")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_batch_dry_run_moves_nothing() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("name-scheme.format"), SCHEME).unwrap();
    create_files(root, &["Foo - 1x01 - Bar.mkv"]);

    let options = options(root, MatchMode::Strict, true);
    let spec = load_spec(&options.spec_path).unwrap();
    let context = run_batch(&options, &spec).unwrap();

    assert_eq!(context.planned_operations.len(), 1);
    assert_eq!(
        context.planned_operations[0].destination,
        root.join("Foo").join("Season 1").join("01 - Bar.mkv")
    );
    assert!(root.join("Foo - 1x01 - Bar.mkv").exists());
    assert!(!root.join("Foo").exists());
}

#[test]
fn test_empty_directory() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("name-scheme.format"), SCHEME).unwrap();

    let options = options(root, MatchMode::Lenient, false);
    let spec = load_spec(&options.spec_path).unwrap();
    let context = run_batch(&options, &spec).unwrap();

    assert_eq!(context.stats.files_found, 0);
}

#[test]
fn test_dry_run_agrees_with_real_run_on_shared_destination() {
    let dry_dir = tempdir().unwrap();
    let real_dir = tempdir().unwrap();

    let mut outcomes = Vec::new();
    for (root, dry_run) in [(dry_dir.path(), true), (real_dir.path(), false)] {
        fs::write(root.join("name-scheme.format"), "<show> - <ep>\n<show>").unwrap();
        create_files(root, &["Foo - 1.mkv", "Foo - 2.mkv"]);

        let options = options(root, MatchMode::Strict, dry_run);
        let spec = load_spec(&options.spec_path).unwrap();
        outcomes.push(run_batch(&options, &spec).unwrap().stats);
    }

    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[0].files_renamed, 1);
    assert_eq!(outcomes[0].errors, 1);
    assert!(real_dir.path().join("Foo.mkv").exists());
    assert!(real_dir.path().join("Foo - 2.mkv").exists());
    assert!(dry_dir.path().join("Foo - 1.mkv").exists());
}
