//! Serializes a [`Settings`] store into the canonical file text.
//!
//! Output layout, per category in store order:
//!
//! ```text
//! [Category]\r\n
//! name=value\r\n
//! ...
//! \r\n
//! ```
//!
//! Every line, including the blank separator after each category, ends in
//! CRLF on every platform.  An empty store produces an empty string.

use crate::domain::settings::Settings;
use crate::format::options::{FormatOptions, LINE_TERMINATOR};

/// Renders `settings` as configuration file text.
///
/// Names and payloads are written verbatim.  A payload containing the
/// delimiter or a line break will not read back unchanged.
///
/// # Examples
///
/// ```rust
/// use cfgfile_core::{write_settings, FormatOptions, Setting, Settings};
///
/// let mut settings = Settings::new();
/// settings.add_setting("Server", Setting::new("port", "8080"));
///
/// let text = write_settings(&settings, &FormatOptions::with_delimiter(':'));
/// assert_eq!(text, "[Server]\r\nport:8080\r\n\r\n");
/// ```
pub fn write_settings(settings: &Settings, options: &FormatOptions) -> String {
    let mut out = String::new();
    for category in settings.iter() {
        out.push('[');
        out.push_str(category.name());
        out.push(']');
        out.push_str(LINE_TERMINATOR);
        for setting in category.settings() {
            out.push_str(setting.name());
            out.push(options.delimiter);
            out.push_str(setting.value().payload());
            out.push_str(LINE_TERMINATOR);
        }
        out.push_str(LINE_TERMINATOR);
    }
    out
}
