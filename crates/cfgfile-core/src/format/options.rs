//! Format options shared by the parser and the writer.

use thiserror::Error;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = '=';

/// Prefix that marks a whole line as a comment.
pub const COMMENT_PREFIX: &str = "//";

/// Terminator written after every line, regardless of host platform.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Characters that can never act as a delimiter: line breaks split the
/// setting line itself, and brackets collide with category headers.
const RESERVED_DELIMITERS: [char; 4] = ['\r', '\n', '[', ']'];

/// A delimiter that cannot round-trip through the file format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    #[error("delimiter {0:?} is reserved by the file format")]
    Reserved(char),
}

/// Options controlling how settings are read from and written to text.
///
/// The same options must be used for reading and writing a given file.
///
/// # Example
///
/// ```rust
/// use cfgfile_core::FormatOptions;
///
/// assert_eq!(FormatOptions::default().delimiter, '=');
/// assert_eq!(FormatOptions::with_delimiter(':').delimiter, ':');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Character separating a setting's name from its value.
    pub delimiter: char,
}

impl FormatOptions {
    /// Options with a custom delimiter.
    ///
    /// The delimiter is not checked.  Use [`FormatOptions::try_with_delimiter`]
    /// for delimiters that come from user input.
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Options with a custom delimiter, rejecting characters that would make
    /// written files unreadable.
    ///
    /// # Errors
    ///
    /// Returns [`DelimiterError::Reserved`] for a line break or a square
    /// bracket.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cfgfile_core::{DelimiterError, FormatOptions};
    ///
    /// assert!(FormatOptions::try_with_delimiter(':').is_ok());
    /// assert_eq!(
    ///     FormatOptions::try_with_delimiter('\n'),
    ///     Err(DelimiterError::Reserved('\n'))
    /// );
    /// ```
    pub fn try_with_delimiter(delimiter: char) -> Result<Self, DelimiterError> {
        if RESERVED_DELIMITERS.contains(&delimiter) {
            return Err(DelimiterError::Reserved(delimiter));
        }
        Ok(Self::with_delimiter(delimiter))
    }
}

impl Default for FormatOptions {
    /// | Field     | Default |
    /// |-----------|---------|
    /// | delimiter | `=`     |
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}
