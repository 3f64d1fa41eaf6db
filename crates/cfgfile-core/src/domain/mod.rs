//! Domain entities for cfgfile.
//!
//! This module contains the configuration data model with no infrastructure
//! dependencies.
//!
//! # Ownership model (for beginners)
//!
//! The three types nest strictly:
//!
//! ```text
//! Settings ──owns──► Category ──owns──► Setting ──owns──► Value
//! ```
//!
//! A [`value::Value`] is never shared between two settings and a
//! [`setting::Setting`] belongs to exactly one category.  Lookups on the store
//! hand out copies by default; the explicit `value_mut` accessor is the only
//! way to edit a stored value in place.

/// Typed accessor over a single textual payload.
pub mod value;

/// A named value.
pub mod setting;

/// The category → settings store.
///
/// See [`settings::Settings`] for the main type.
pub mod settings;
