use std::fs::{create_dir, create_dir_all, read_to_string, write};
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn dsort() -> Command {
    Command::cargo_bin("dsort").expect("Binary should be built")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Path should be valid UTF-8")
}

#[test]
fn test_default_run_prints_dry_run_report() {
    // Create a source with a file, a plain file without extension, and the
    // sorted output folder of a previous run
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path();
    write(source.join("a.JPG"), "pixels").expect("Failed to create test file");
    write(source.join("notes"), "text").expect("Failed to create test file");
    create_dir(source.join("sorted")).expect("Failed to create sorted directory");

    dsort()
        .args(["--src", path_arg(source)])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Source:      {}",
            source.display()
        )))
        .stdout(predicate::str::contains(format!(
            "Destination: {}",
            source.join("sorted").display()
        )))
        .stdout(predicate::str::contains("Mode:        DRY-RUN"))
        .stdout(predicate::str::contains("[FILE] a.JPG\n  group : jpg"))
        .stdout(predicate::str::contains("[FILE] notes\n  group : _noext"))
        .stdout(predicate::str::contains("DIR:").not());

    // The dry run must not have touched anything
    assert!(source.join("a.JPG").exists());
    assert!(source.join("notes").exists());
}

#[test]
fn test_report_header_framing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path();

    dsort()
        .args(["--src", path_arg(source)])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "----------------------------------------\nSource:      {}",
            source.display()
        )))
        .stdout(predicate::str::contains(
            "----------------------------------------\n\n",
        ));
}

#[test]
fn test_directories_are_listed_but_not_entered() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path();
    create_dir(source.join("stuff")).expect("Failed to create test directory");
    write(source.join("stuff").join("nested.txt"), "deep").expect("Failed to create nested file");

    dsort()
        .args(["--src", path_arg(source)])
        .assert()
        .success()
        .stdout(predicate::str::contains("DIR:  stuff"))
        .stdout(predicate::str::contains("nested.txt").not());
}

#[test]
fn test_no_dry_run_moves_files() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path();
    write(source.join("photo.jpg"), "pixels").expect("Failed to create test file");

    let target = source.join("sorted").join("jpg").join("photo.jpg");

    dsort()
        .args(["--src", path_arg(source), "--no-dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode:        MOVE"))
        .stdout(predicate::str::contains(format!(
            "  target: {}",
            target.display()
        )))
        .stderr(predicate::str::contains("[MOVE ERROR]").not());

    assert!(!source.join("photo.jpg").exists(), "Source should be gone");
    assert!(target.exists(), "File should have moved to its target");
}

#[test]
fn test_copy_mode_with_explicit_destination() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("data");
    let destination = temp_dir.path().join("out");
    create_dir_all(&source).expect("Failed to create source directory");
    write(source.join("photo.jpg"), "pixels").expect("Failed to create test file");

    dsort()
        .args([
            "--src",
            path_arg(&source),
            "--dest",
            path_arg(&destination),
            "--no-dry-run",
            "--copy",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode:        COPY"));

    assert!(source.join("photo.jpg").exists(), "Copy keeps the source");
    assert!(destination.join("jpg").join("photo.jpg").exists());
}

#[test]
fn test_move_failure_is_reported_and_run_continues() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path();
    write(source.join("blocked.txt"), "new").expect("Failed to create test file");
    write(source.join("free.log"), "content").expect("Failed to create test file");

    // Seed the target of one file so its move fails
    let txt_dir = source.join("sorted").join("txt");
    create_dir_all(&txt_dir).expect("Failed to create target directory");
    write(txt_dir.join("blocked.txt"), "old").expect("Failed to seed target");

    // The planned block is printed before the move is attempted, so it
    // appears even for the file whose move fails
    dsort()
        .args(["--src", path_arg(source), "--no-dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[FILE] blocked.txt\n  group : txt"))
        .stderr(predicate::str::contains("[MOVE ERROR]"));

    assert!(source.join("blocked.txt").exists());
    assert!(source.join("sorted").join("log").join("free.log").exists());
}

#[test]
fn test_unknown_flags_are_tolerated() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path();
    write(source.join("photo.jpg"), "pixels").expect("Failed to create test file");

    // There is no --help and no argument validation; stray tokens are ignored
    dsort()
        .args(["--help", "--frobnicate", "--src", path_arg(source)])
        .assert()
        .success()
        .stdout(predicate::str::contains("[FILE] photo.jpg"));
}

#[test]
fn test_verbose_log_file_captures_diagnostics() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("data");
    create_dir_all(&source).expect("Failed to create source directory");
    write(source.join("photo.jpg"), "pixels").expect("Failed to create test file");
    let log_path = temp_dir.path().join("run.log");

    dsort()
        .args([
            "--src",
            path_arg(&source),
            "--verbose",
            "--log-file",
            path_arg(&log_path),
        ])
        .assert()
        .success();

    let log_content = read_to_string(&log_path).expect("Log file should be written");
    assert!(
        log_content.contains("Scanning directory"),
        "Debug diagnostics should reach the log file"
    );
}

#[test]
fn test_missing_source_still_exits_zero() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nowhere");

    dsort()
        .args(["--src", path_arg(&missing)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode:        DRY-RUN"))
        .stderr(predicate::str::contains("Failed to read directory"))
        .stderr(predicate::str::contains("nowhere"));
}
