//! Tests for TOML configuration loading.

use rewind::RewindConfig;
use std::io::Write;
use std::path::{Path, PathBuf};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = RewindConfig::default();
    assert_eq!(config.logging().filter(), "info");
    assert_eq!(config.logging().file(), &PathBuf::from("rewind.log"));
    assert!(*config.display().show_hints());
    assert!(*config.display().highlight_win());
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    let config = RewindConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, RewindConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[logging]
filter = "rewind_tictactoe=debug"

[display]
show_hints = false
"#,
    );

    let config = RewindConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.logging().filter(), "rewind_tictactoe=debug");
    assert_eq!(config.logging().file(), &PathBuf::from("rewind.log"));
    assert!(!*config.display().show_hints());
    assert!(*config.display().highlight_win());
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("[display]\nshow_hints = \"sometimes\"\n");
    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = RewindConfig::load(Some(Path::new(&missing))).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
