//! # cfgfile-core
//!
//! Shared library for cfgfile containing the in-memory data model for
//! categorized key-value configuration files and the text codec that converts
//! between that model and the on-disk line format.
//!
//! This crate has zero dependencies on the file system.  Reading and writing
//! files is the job of the `cfgfile` crate, which feeds raw text into
//! [`parse_settings`] and persists the output of [`write_settings`].
//!
//! # Architecture overview (for beginners)
//!
//! A configuration file groups settings under category headers:
//!
//! ```text
//! [Server]
//! host=localhost
//! port=8080
//!
//! [Logging]
//! level=debug
//! ```
//!
//! This crate defines:
//!
//! - **`domain`** – The data model.  A [`Settings`] store maps each category
//!   name to an ordered list of [`Setting`]s, and every setting holds one
//!   [`Value`]: a string payload that can be read back as an integer, a real
//!   number or a boolean on demand.
//!
//! - **`format`** – How text becomes a [`Settings`] store and back.  The parser
//!   is deliberately forgiving: a malformed line is recorded as a
//!   [`Diagnostic`] and skipped, and the rest of the file still loads.
//!
//! # Example
//!
//! ```rust
//! use cfgfile_core::{parse_settings, write_settings, FormatOptions};
//!
//! let options = FormatOptions::default();
//! let outcome = parse_settings("[Server]\nhost=localhost\nport=8080\n", &options);
//!
//! assert!(outcome.diagnostics.is_empty());
//! assert_eq!(outcome.settings.value("Server", "port").as_integer(), Ok(8080));
//!
//! let text = write_settings(&outcome.settings, &options);
//! assert_eq!(text, "[Server]\r\nhost=localhost\r\nport=8080\r\n\r\n");
//! ```

pub mod domain;
pub mod format;

// Re-export the most-used types at the crate root so callers can write
// `cfgfile_core::Settings` instead of `cfgfile_core::domain::settings::Settings`.
pub use domain::setting::Setting;
pub use domain::settings::{Category, Settings};
pub use domain::value::{Value, ValueError, ValueKind};
pub use format::diagnostic::{Diagnostic, DiagnosticKind};
pub use format::options::{DelimiterError, FormatOptions};
pub use format::parser::{parse_settings, ParseOutcome};
pub use format::writer::write_settings;
