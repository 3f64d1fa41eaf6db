//! In-memory configuration storage.
//!
//! Keeps the document text in a `RefCell` instead of a file.  Useful for
//! tests and for callers that obtain configuration text from elsewhere (an
//! embedded resource, a network fetch) but still want the facade's
//! read/edit/write workflow.
//!
//! # Failure injection
//!
//! Set `fail_loads` or `fail_saves` to make the matching operation return an
//! I/O error, so callers can exercise their error-handling paths.

use std::cell::RefCell;
use std::io;

use super::ConfigStorage;

/// A configuration document held in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    /// `None` until a document is created or saved.
    contents: RefCell<Option<String>>,
    /// When `true`, `load` fails with `PermissionDenied`.
    pub fail_loads: bool,
    /// When `true`, `save` fails with `PermissionDenied`.
    pub fail_saves: bool,
}

impl MemoryStorage {
    /// Creates storage with no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage holding `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            ..Self::default()
        }
    }

    /// The current document text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ConfigStorage for MemoryStorage {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn exists(&self) -> bool {
        self.contents.borrow().is_some()
    }

    fn create_empty(&self) -> io::Result<()> {
        self.contents.borrow_mut().get_or_insert_with(String::new);
        Ok(())
    }

    fn load(&self) -> io::Result<String> {
        if self.fail_loads {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated load failure",
            ));
        }
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no document in memory"))
    }

    fn save(&self, contents: &str) -> io::Result<()> {
        if self.fail_saves {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated save failure",
            ));
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}
