//! Text codec for configuration files.
//!
//! File format:
//! ```text
//! // comment
//! [CategoryName]
//! settingName=value
//! anotherSetting=value
//!
//! [NextCategory]
//! ...
//! ```
//!
//! - The `=` delimiter is configurable through [`options::FormatOptions`].
//! - Lines starting with `//` and empty lines are ignored anywhere.
//! - A category header is `[` + non-empty name + `]` with nothing else on the
//!   line.
//! - Setting lines only count inside a category.
//! - On write, every line ends in CRLF and each category is followed by one
//!   blank line.

pub mod diagnostic;
pub mod options;
pub mod parser;
pub mod writer;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use options::{DelimiterError, FormatOptions};
pub use parser::{parse_settings, ParseOutcome};
pub use writer::write_settings;
