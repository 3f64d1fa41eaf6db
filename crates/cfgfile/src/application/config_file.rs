//! The `ConfigFile` facade: one configuration document, loaded and editable.
//!
//! `ConfigFile` ties together a [`ConfigStorage`], the parser and the writer,
//! and forwards every query and mutation to its in-memory [`Settings`] store.
//!
//! # Lifecycle
//!
//! ```text
//! open(path)  ──► document created if missing, then read
//!    │
//!    ├─ value / set_value / add_setting / remove_* ...   (memory only)
//!    │
//!    ├─ write()  ──► store serialized and saved
//!    └─ read()   ──► store replaced wholesale by a fresh parse
//! ```
//!
//! There is no lazy loading: once `open` returns, the settings are in memory.
//! Edits are not persisted until [`ConfigFile::write`] is called.
//!
//! # Concurrency
//!
//! A `ConfigFile` has no internal synchronization.  Use one instance from one
//! thread at a time, or lock around read/mutate/write sequences.

use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use cfgfile_core::{
    parse_settings, write_settings, Diagnostic, FormatOptions, Setting, Settings, Value,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::storage::{ConfigStorage, FileStorage};

/// Error type for configuration document I/O.
///
/// Reading a setting as the wrong type is not an I/O failure; it is reported
/// by the [`Value`] accessors as [`cfgfile_core::ValueError`].
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The document could not be created or read.
    #[error("could not access configuration file {location}: {source}")]
    AccessFailed {
        location: String,
        #[source]
        source: io::Error,
    },

    /// The document could not be written.
    #[error("could not write to the configuration file {location}: {source}")]
    WriteFailed {
        location: String,
        #[source]
        source: io::Error,
    },
}

/// Read from or write settings to a configuration document.
///
/// When requesting a value of a missing category or setting, an absent
/// [`Value`] is returned.  Use [`ConfigFile::category_exists`] and
/// [`ConfigFile::setting_exists`] to tell the two cases apart.
///
/// # Example
///
/// ```rust
/// use cfgfile::{ConfigFile, FormatOptions, MemoryStorage};
///
/// let storage = MemoryStorage::with_contents("[Server]\nport=8080\n");
/// let mut file = ConfigFile::open_storage(storage, FormatOptions::default()).unwrap();
///
/// assert_eq!(file.value("Server", "port").as_integer(), Ok(8080));
///
/// file.set_integer("Server", "port", 9090);
/// file.write().unwrap();
/// assert_eq!(
///     file.storage().contents().as_deref(),
///     Some("[Server]\r\nport=9090\r\n\r\n")
/// );
/// ```
#[derive(Debug)]
pub struct ConfigFile<S: ConfigStorage = FileStorage> {
    storage: S,
    options: FormatOptions,
    settings: Settings,
    /// Diagnostics from the most recent [`ConfigFile::read`].
    diagnostics: Vec<Diagnostic>,
}

impl ConfigFile<FileStorage> {
    /// Opens the configuration file at `path`, creating an empty file (and its
    /// parent directories) if it does not exist, and reads it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::AccessFailed`] if the file cannot be created
    /// or read.
    pub fn open(path: impl Into<PathBuf>, options: FormatOptions) -> Result<Self, ConfigFileError> {
        Self::open_storage(FileStorage::new(path), options)
    }
}

impl<S: ConfigStorage> ConfigFile<S> {
    /// Wraps `storage` without touching it.  The store starts empty; call
    /// [`ConfigFile::read`] to load the document.
    pub fn with_storage(storage: S, options: FormatOptions) -> Self {
        Self {
            storage,
            options,
            settings: Settings::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Creates the document in `storage` if it does not exist, then reads it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::AccessFailed`] if the document cannot be
    /// created or read.
    pub fn open_storage(storage: S, options: FormatOptions) -> Result<Self, ConfigFileError> {
        let mut file = Self::with_storage(storage, options);
        file.create_if_missing()?;
        file.read()?;
        Ok(file)
    }

    /// Creates an empty document if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::AccessFailed`] if creation fails.
    pub fn create_if_missing(&self) -> Result<(), ConfigFileError> {
        if self.storage.exists() {
            return Ok(());
        }
        debug!("creating empty configuration file {}", self.storage.location());
        self.storage
            .create_empty()
            .map_err(|source| self.access_failed(source))
    }

    /// Reads the document, replacing the in-memory settings.
    ///
    /// Malformed lines do not fail the read; they are available from
    /// [`ConfigFile::diagnostics`] afterwards.  On failure the previous
    /// settings are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::AccessFailed`] if the document cannot be
    /// read.
    pub fn read(&mut self) -> Result<(), ConfigFileError> {
        let text = self.storage.load().map_err(|source| self.access_failed(source))?;
        let outcome = parse_settings(&text, &self.options);
        info!(
            "read {} categories from {} ({} diagnostics)",
            outcome.settings.category_count(),
            self.storage.location(),
            outcome.diagnostics.len()
        );
        self.settings = outcome.settings;
        self.diagnostics = outcome.diagnostics;
        Ok(())
    }

    /// Writes the in-memory settings to the document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::WriteFailed`] if the document cannot be
    /// written.
    pub fn write(&self) -> Result<(), ConfigFileError> {
        let text = write_settings(&self.settings, &self.options);
        self.storage
            .save(&text)
            .map_err(|source| ConfigFileError::WriteFailed {
                location: self.storage.location(),
                source,
            })?;
        info!(
            "wrote {} categories to {}",
            self.settings.category_count(),
            self.storage.location()
        );
        Ok(())
    }

    fn access_failed(&self, source: io::Error) -> ConfigFileError {
        ConfigFileError::AccessFailed {
            location: self.storage.location(),
            source,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The format options used for reading and writing.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// The in-memory settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the in-memory settings.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Malformed lines found by the most recent read.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Check if a category exists.
    pub fn category_exists(&self, category: &str) -> bool {
        self.settings.category_exists(category)
    }

    /// Check if a setting exists in the specified category.
    pub fn setting_exists(&self, category: &str, setting_name: &str) -> bool {
        self.settings.setting_exists(category, setting_name)
    }

    /// The category names, in file order.
    pub fn categories(&self) -> Vec<&str> {
        self.settings.categories()
    }

    /// The setting names of a category, or an empty list if it does not exist.
    pub fn setting_names(&self, category: &str) -> Vec<&str> {
        self.settings.setting_names(category)
    }

    /// A copy of a setting's value, absent if the setting does not exist.
    pub fn value(&self, category: &str, setting_name: &str) -> Value {
        self.settings.value(category, setting_name)
    }

    /// Mutable access to a stored value, or `None` if it does not exist.
    pub fn value_mut(&mut self, category: &str, setting_name: &str) -> Option<&mut Value> {
        self.settings.value_mut(category, setting_name)
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Sets the value of a setting.  If the setting does not exist, it will be
    /// created; otherwise it keeps its position.
    pub fn set_value(&mut self, category: &str, setting_name: &str, value: impl Into<String>) {
        self.settings.set_value(category, setting_name, value);
    }

    /// [`ConfigFile::set_value`] with an integer.
    pub fn set_integer(&mut self, category: &str, setting_name: &str, value: i64) {
        self.settings.set_value(category, setting_name, value.to_string());
    }

    /// [`ConfigFile::set_value`] with a real number.
    pub fn set_real(&mut self, category: &str, setting_name: &str, value: f64) {
        self.settings.set_value(category, setting_name, value.to_string());
    }

    /// [`ConfigFile::set_value`] with a boolean.
    pub fn set_boolean(&mut self, category: &str, setting_name: &str, value: bool) {
        self.settings.set_value(category, setting_name, value.to_string());
    }

    /// Adds a category if it does not exist.
    pub fn add_category(&mut self, category: &str) {
        self.settings.add_category(category);
    }

    /// Removes a category and its settings, if it exists.
    pub fn remove_category(&mut self, category: &str) {
        self.settings.remove_category(category);
    }

    /// Adds a setting to a category, creating the category if needed.  An
    /// existing setting with the same name is replaced and moves to the end.
    pub fn add_setting(&mut self, category: &str, setting_name: &str, value: impl Display) {
        self.settings
            .add_setting(category, Setting::new(setting_name, value.to_string()));
    }

    /// Removes a setting from a category, if it exists.
    pub fn remove_setting(&mut self, category: &str, setting_name: &str) {
        self.settings.remove_setting(category, setting_name);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
