//! Line-oriented parser turning configuration text into a [`Settings`] store.
//!
//! The parser is a two-state machine driven one line at a time:
//!
//! ```text
//!                 [Name]
//! OutsideCategory ──────► InsideCategory(Name) ──┐
//!                                 ▲              │ [Other]
//!                                 └──────────────┘
//! ```
//!
//! Each line is classified in priority order:
//!
//! 1. Comment (`//` prefix) or empty → skipped.
//! 2. Category header (`[` ... `]`) → enter that category, creating it.  An
//!    empty name (`[]`) is diagnosed and leaves the state unchanged.
//! 3. Anything else inside a category is a setting line and must contain the
//!    delimiter, otherwise it is diagnosed.  Outside a category such lines are
//!    dropped without a diagnostic.
//!
//! Only the first two delimiter-separated tokens of a setting line are used,
//! so with `=` the line `key=a=b` yields the value `a`.  Values therefore
//! cannot contain the delimiter.

use tracing::{debug, warn};

use crate::domain::setting::Setting;
use crate::domain::settings::Settings;
use crate::format::diagnostic::{Diagnostic, DiagnosticKind};
use crate::format::options::{FormatOptions, COMMENT_PREFIX};

/// UTF-8 byte-order mark, dropped from the start of the text.
const BOM: char = '\u{feff}';

/// The result of parsing configuration text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOutcome {
    /// Everything that parsed.
    pub settings: Settings,
    /// One entry per malformed line, in line order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses configuration text into a settings store.
///
/// Never fails: malformed lines are reported in
/// [`ParseOutcome::diagnostics`] and skipped.
///
/// # Examples
///
/// ```rust
/// use cfgfile_core::{parse_settings, FormatOptions};
///
/// let text = "[Server]\nhost=localhost\nbroken line\nport=8080";
/// let outcome = parse_settings(text, &FormatOptions::default());
///
/// assert_eq!(outcome.settings.setting_names("Server"), vec!["host", "port"]);
/// assert_eq!(outcome.diagnostics.len(), 1);
/// assert_eq!(outcome.diagnostics[0].line, 3);
/// ```
pub fn parse_settings(text: &str, options: &FormatOptions) -> ParseOutcome {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut parser = Parser::new(*options);
    for (index, line) in Lines::new(text).enumerate() {
        parser.process_line(index + 1, line);
    }

    let outcome = parser.finish();
    debug!(
        "parsed {} categories with {} diagnostics",
        outcome.settings.category_count(),
        outcome.diagnostics.len()
    );
    outcome
}

// ── State machine ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State<'a> {
    OutsideCategory,
    InsideCategory(&'a str),
}

struct Parser<'a> {
    options: FormatOptions,
    state: State<'a>,
    settings: Settings,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    fn new(options: FormatOptions) -> Self {
        Self {
            options,
            state: State::OutsideCategory,
            settings: Settings::new(),
            diagnostics: Vec::new(),
        }
    }

    fn process_line(&mut self, line_number: usize, line: &'a str) {
        if is_comment_or_empty(line) {
            return;
        }

        if is_category_line(line) {
            let name = category_name(line);
            if name.is_empty() {
                self.diagnose(line_number, DiagnosticKind::EmptyCategoryName, line);
            } else {
                self.settings.add_category(name);
                self.state = State::InsideCategory(name);
            }
            return;
        }

        // Setting lines only count inside a category.
        let State::InsideCategory(category) = self.state else {
            return;
        };

        let mut tokens = line.split(self.options.delimiter);
        match (tokens.next(), tokens.next()) {
            (Some(name), Some(value)) => {
                self.settings.add_setting(category, Setting::new(name, value));
            }
            _ => self.diagnose(line_number, DiagnosticKind::InvalidSettingSyntax, line),
        }
    }

    fn diagnose(&mut self, line: usize, kind: DiagnosticKind, content: &str) {
        let diagnostic = Diagnostic {
            line,
            kind,
            content: content.to_string(),
        };
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn finish(self) -> ParseOutcome {
        ParseOutcome {
            settings: self.settings,
            diagnostics: self.diagnostics,
        }
    }
}

fn is_comment_or_empty(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT_PREFIX)
}

fn is_category_line(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']')
}

/// The text strictly between the brackets of a category line.
fn category_name(line: &str) -> &str {
    if line.len() <= 2 {
        return "";
    }
    &line[1..line.len() - 1]
}

// ── Line splitting ────────────────────────────────────────────────────────────

/// Splits text on `\r\n`, `\n` or a lone `\r`.
///
/// A trailing terminator does not produce an extra empty line.
struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &self.rest[..end];
                let terminator_len = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
