//! Storage infrastructure: configuration document persistence.
//!
//! This module provides a thin adapter between the facade and wherever the
//! document text is kept.  Documents are always read and written whole; there
//! is no streaming, locking or partial-write recovery.
//!
//! Keeping storage behind a trait means the facade never touches `std::fs`
//! directly, and its error paths can be exercised with a mock.

use std::io;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A place a configuration document can be loaded from and saved to.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStorage {
    /// Human-readable location used in logs and error messages.
    fn location(&self) -> String;

    /// Returns `true` if a document already exists at this location.
    fn exists(&self) -> bool;

    /// Creates an empty document.
    fn create_empty(&self) -> io::Result<()>;

    /// Reads the whole document.
    fn load(&self) -> io::Result<String>;

    /// Replaces the whole document with `contents`.
    fn save(&self, contents: &str) -> io::Result<()>;
}
