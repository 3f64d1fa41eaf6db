//! Integration tests for the `ConfigFile` facade over real files.
//!
//! These tests exercise the full read → edit → write → re-read cycle through
//! the public API: `ConfigFile` + `FileStorage` + the cfgfile-core codec.

use std::fs;
use std::path::PathBuf;

use cfgfile::{ConfigFile, ConfigFileError, FormatOptions, ValueError, ValueKind};
use uuid::Uuid;

/// A unique scratch directory under the system temp dir.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cfgfile_it_{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn test_open_reads_hand_written_file() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("server.cfg");
    fs::write(&path, "[Server]\nhost=localhost\nport=8080\n").unwrap();

    // Act
    let file = ConfigFile::open(&path, FormatOptions::default()).expect("open");

    // Assert
    assert!(file.category_exists("Server"));
    assert_eq!(file.value("Server", "port").as_integer(), Ok(8080));
    assert_eq!(file.value("Server", "host").as_string(), "localhost");
    assert!(file.diagnostics().is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_open_bootstraps_missing_file_in_missing_directory() {
    let dir = scratch_dir();
    let path = dir.join("nested").join("app.cfg");

    let file = ConfigFile::open(&path, FormatOptions::default()).expect("open");

    assert!(path.is_file());
    assert!(file.categories().is_empty());
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_edits_survive_write_and_reopen() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("app.cfg");
    let mut file = ConfigFile::open(&path, FormatOptions::default()).expect("open");

    // Act
    file.set_value("Server", "host", "example.org");
    file.set_integer("Server", "port", 443);
    file.set_boolean("Features", "beta", true);
    file.set_real("Features", "ratio", 0.25);
    file.add_setting("Features", "beta", false);
    file.write().expect("write");

    let reopened = ConfigFile::open(&path, FormatOptions::default()).expect("reopen");

    // Assert
    assert_eq!(reopened.categories(), vec!["Server", "Features"]);
    assert_eq!(reopened.setting_names("Features"), vec!["ratio", "beta"]);
    assert_eq!(reopened.value("Server", "port").as_integer(), Ok(443));
    assert_eq!(reopened.value("Features", "beta").as_boolean(), Ok(false));
    assert_eq!(reopened.value("Features", "ratio").as_real(), Ok(0.25));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[Server]\r\nhost=example.org\r\nport=443\r\n\r\n\
         [Features]\r\nratio=0.25\r\nbeta=false\r\n\r\n"
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_unsaved_edits_are_lost_on_read() {
    let dir = scratch_dir();
    let path = dir.join("app.cfg");
    fs::write(&path, "[A]\nx=1\n").unwrap();
    let mut file = ConfigFile::open(&path, FormatOptions::default()).expect("open");

    file.set_value("A", "x", "2");
    file.read().expect("read");

    assert_eq!(file.value("A", "x").as_integer(), Ok(1));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_malformed_lines_are_reported_and_dropped_on_write() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("app.cfg");
    fs::write(&path, "// top\n[]\n[A]\nnot a setting\nx=1\n").unwrap();

    // Act
    let file = ConfigFile::open(&path, FormatOptions::default()).expect("open");
    file.write().expect("write");

    // Assert: comments and bad lines do not survive a rewrite
    assert_eq!(file.diagnostics().len(), 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[A]\r\nx=1\r\n\r\n");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_invalid_utf8_comment_does_not_lose_settings() {
    // Arrange: `é` encoded as Latin-1 is not valid UTF-8
    let dir = scratch_dir();
    let path = dir.join("app.cfg");
    fs::write(&path, b"// caf\xE9\n[Server]\nport=8080\n").unwrap();

    // Act
    let file = ConfigFile::open(&path, FormatOptions::default()).expect("open");

    // Assert
    assert_eq!(file.value("Server", "port").as_integer(), Ok(8080));
    assert!(file.diagnostics().is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_typed_read_of_text_is_format_mismatch() {
    let dir = scratch_dir();
    let path = dir.join("app.cfg");
    fs::write(&path, "[Server]\nhost=localhost\n").unwrap();

    let file = ConfigFile::open(&path, FormatOptions::default()).expect("open");

    assert_eq!(
        file.value("Server", "host").as_integer(),
        Err(ValueError::FormatMismatch {
            requested: ValueKind::Integer
        })
    );
    assert_eq!(file.value("Server", "missing").as_integer_or(42), Ok(42));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_open_directory_path_is_access_failed() {
    // Arrange: the path exists but is a directory, so it cannot be read as a file
    let dir = scratch_dir();

    // Act
    let result = ConfigFile::open(&dir, FormatOptions::default());

    // Assert
    assert!(matches!(result, Err(ConfigFileError::AccessFailed { .. })));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_write_into_removed_directory_is_write_failed() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("app.cfg");
    let mut file = ConfigFile::open(&path, FormatOptions::default()).expect("open");
    file.set_value("A", "x", "1");
    fs::remove_dir_all(&dir).unwrap();

    // Act
    let result = file.write();

    // Assert
    assert!(matches!(result, Err(ConfigFileError::WriteFailed { .. })));
}

#[test]
fn test_custom_delimiter_round_trip() {
    let dir = scratch_dir();
    let path = dir.join("app.cfg");
    let options = FormatOptions::with_delimiter(':');

    let mut file = ConfigFile::open(&path, options).expect("open");
    file.set_value("Db", "url", "postgres=local");
    file.write().expect("write");
    let reopened = ConfigFile::open(&path, options).expect("reopen");

    assert_eq!(reopened.value("Db", "url").as_string(), "postgres=local");
    fs::remove_dir_all(&dir).ok();
}
