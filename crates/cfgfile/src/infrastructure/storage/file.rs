//! File-system backed configuration storage.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::ConfigStorage;

/// Stores the configuration document in a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStorage for FileStorage {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Creates the file and any missing parent directories.  An existing file
    /// is left untouched.
    fn create_empty(&self) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        Ok(())
    }

    /// Reads the whole file.  Bytes that are not valid UTF-8 are replaced
    /// with U+FFFD so the remaining lines can still be parsed.
    fn load(&self) -> io::Result<String> {
        let bytes = fs::read(&self.path)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!(
                    "{} contains invalid UTF-8 at byte {}; decoding lossily",
                    self.path.display(),
                    err.utf8_error().valid_up_to()
                );
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }

    fn save(&self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }
}
