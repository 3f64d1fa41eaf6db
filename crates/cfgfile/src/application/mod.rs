//! Application layer for cfgfile.
//!
//! # Sub-modules
//!
//! - **`config_file`** – The [`config_file::ConfigFile`] facade: opens a
//!   configuration document through a [`crate::infrastructure::storage::ConfigStorage`],
//!   keeps the parsed settings in memory, and writes them back on request.
//!   It contains no file-system calls of its own, so every path can be tested
//!   against an in-memory or mocked storage.

pub mod config_file;
