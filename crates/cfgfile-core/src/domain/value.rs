//! Typed accessor wrapper around a setting's textual payload.
//!
//! Every setting stores its value as text.  A [`Value`] interprets that text as
//! a string, integer, real number or boolean only when a caller asks for it, so
//! the file format itself stays untyped.
//!
//! # Absent values
//!
//! Looking up a setting that does not exist yields an *absent* value rather
//! than an error.  An absent value is distinct from a present value whose
//! payload is the empty string:
//!
//! - Absent: every accessor returns the caller's default without parsing.
//! - Present: the payload is parsed, and a payload that does not parse as the
//!   requested type is a [`ValueError::FormatMismatch`].

use std::fmt;

use thiserror::Error;

/// The typed interpretations a [`Value`] can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Real,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when reading a [`Value`] as a typed quantity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The payload is present but does not parse as the requested type.
    #[error("invalid format for requested setting: {requested}")]
    FormatMismatch { requested: ValueKind },
}

/// The value of a configuration setting.
///
/// # Examples
///
/// ```rust
/// use cfgfile_core::{Value, ValueError, ValueKind};
///
/// let port = Value::new("8080");
/// assert_eq!(port.as_integer(), Ok(8080));
///
/// let missing = Value::empty();
/// assert_eq!(missing.as_integer_or(42), Ok(42));
///
/// let host = Value::new("localhost");
/// assert_eq!(
///     host.as_integer(),
///     Err(ValueError::FormatMismatch { requested: ValueKind::Integer })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    payload: String,
    absent: bool,
}

impl Value {
    /// Creates a present value holding `payload`.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            absent: false,
        }
    }

    /// Creates an absent value with an empty payload.
    pub fn empty() -> Self {
        Self {
            payload: String::new(),
            absent: true,
        }
    }

    /// Returns `true` if this value stands for a missing setting.
    pub fn is_absent(&self) -> bool {
        self.absent
    }

    /// The raw payload text.  Empty for absent values.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Replaces the payload in place and marks the value present.
    pub fn set(&mut self, payload: impl Into<String>) {
        self.payload = payload.into();
        self.absent = false;
    }

    /// Returns the payload, or `""` when absent.
    pub fn as_string(&self) -> String {
        self.as_string_or("")
    }

    /// Returns the payload, or `default` when absent.
    pub fn as_string_or(&self, default: &str) -> String {
        if self.absent {
            return default.to_string();
        }
        self.payload.clone()
    }

    /// Parses the payload as an integer, returning `0` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::FormatMismatch`] if the payload is present but
    /// not an integer literal.
    pub fn as_integer(&self) -> Result<i64, ValueError> {
        self.as_integer_or(0)
    }

    /// Parses the payload as an integer, returning `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::FormatMismatch`] if the payload is present but
    /// not an integer literal.
    pub fn as_integer_or(&self, default: i64) -> Result<i64, ValueError> {
        self.parse_or(default, ValueKind::Integer, |text| text.parse().ok())
    }

    /// Parses the payload as a real number, returning `0.0` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::FormatMismatch`] if the payload is present but
    /// not a real number literal.
    pub fn as_real(&self) -> Result<f64, ValueError> {
        self.as_real_or(0.0)
    }

    /// Parses the payload as a real number, returning `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::FormatMismatch`] if the payload is present but
    /// not a real number literal.
    pub fn as_real_or(&self, default: f64) -> Result<f64, ValueError> {
        self.parse_or(default, ValueKind::Real, |text| text.parse().ok())
    }

    /// Parses the payload as a boolean, returning `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::FormatMismatch`] if the payload is present but
    /// not `true` or `false` (in any letter case).
    pub fn as_boolean(&self) -> Result<bool, ValueError> {
        self.as_boolean_or(false)
    }

    /// Parses the payload as a boolean, returning `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::FormatMismatch`] if the payload is present but
    /// not `true` or `false` (in any letter case).
    pub fn as_boolean_or(&self, default: bool) -> Result<bool, ValueError> {
        self.parse_or(default, ValueKind::Boolean, parse_boolean)
    }

    /// Shared absent short-circuit and error mapping for the typed accessors.
    ///
    /// Surrounding whitespace is ignored before `parse` sees the payload.
    fn parse_or<T>(
        &self,
        default: T,
        requested: ValueKind,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, ValueError> {
        if self.absent {
            return Ok(default);
        }
        parse(self.payload.trim()).ok_or(ValueError::FormatMismatch { requested })
    }
}

fn parse_boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl Default for Value {
    /// The absent value.
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
