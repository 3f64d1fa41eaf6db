//! Non-fatal parse diagnostics.
//!
//! A malformed line never aborts a parse.  The parser records a
//! [`Diagnostic`] for it, the line contributes nothing to the store, and
//! parsing continues with the next line.

use std::fmt;

/// What was wrong with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The line is `[]`: a category header without a name.
    EmptyCategoryName,
    /// A line inside a category contains no delimiter.
    InvalidSettingSyntax,
}

/// A malformed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    pub kind: DiagnosticKind,
    /// The offending line, verbatim.
    pub content: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::EmptyCategoryName => write!(
                f,
                "Line {} starts a category but has empty category name. Content: {}",
                self.line, self.content
            ),
            DiagnosticKind::InvalidSettingSyntax => write!(
                f,
                "Line {} has invalid setting syntax. Content: {}",
                self.line, self.content
            ),
        }
    }
}
