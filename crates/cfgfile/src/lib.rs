//! cfgfile library entry point.
//!
//! Connects the pure codec in `cfgfile-core` to real storage.  Re-exports all
//! public modules so that integration tests in `tests/` and the binary entry
//! point in `main.rs` share the same module tree.
//!
//! ```text
//! file bytes ─► FileStorage::load ─► parse_settings ─► Settings
//!                                                         │ get / set / add / remove
//! file bytes ◄─ FileStorage::save ◄─ write_settings ◄─────┘
//! ```

pub mod application;
pub mod infrastructure;

pub use application::config_file::{ConfigFile, ConfigFileError};
pub use infrastructure::storage::{ConfigStorage, FileStorage, MemoryStorage};

// The data model is part of this crate's API surface.
pub use cfgfile_core::{
    DelimiterError, Diagnostic, DiagnosticKind, FormatOptions, Setting, Settings, Value,
    ValueError, ValueKind,
};
