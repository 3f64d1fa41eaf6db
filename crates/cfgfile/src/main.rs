//! cfgfile: command-line access to categorized key-value configuration files.
//!
//! # Usage
//!
//! ```text
//! cfgfile --file <PATH> [--delimiter <CHAR>] <COMMAND>
//!
//! Commands:
//!   get     Print a setting's value
//!   set     Set a setting's value in place (creating it if needed)
//!   add     Add a setting, replacing and moving any existing one to the end
//!   remove  Remove a setting, or a whole category
//!   list    List categories, or the settings of one category
//!   check   Report malformed lines
//!   dump    Print the whole file in canonical form or as JSON
//! ```
//!
//! The file is created empty if it does not exist.
//!
//! # Environment variable overrides
//!
//! | Variable            | Default | Description                       |
//! |---------------------|---------|-----------------------------------|
//! | `CFGFILE_PATH`      | —       | Configuration file path           |
//! | `CFGFILE_DELIMITER` | `=`     | Name/value delimiter              |
//! | `RUST_LOG`          | `warn`  | Log filter (logs go to stderr)    |

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use cfgfile::{ConfigFile, FormatOptions, Value};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Accepts exactly one character that the file format can round-trip.
fn parse_delimiter(arg: &str) -> Result<char, String> {
    let mut chars = arg.chars();
    let (Some(delimiter), None) = (chars.next(), chars.next()) else {
        return Err(format!("expected a single character, got {arg:?}"));
    };
    FormatOptions::try_with_delimiter(delimiter)
        .map(|options| options.delimiter)
        .map_err(|err| err.to_string())
}

/// Read and edit categorized key-value configuration files.
#[derive(Debug, Parser)]
#[command(
    name = "cfgfile",
    about = "Read and edit categorized key-value configuration files",
    version
)]
struct Cli {
    /// Path of the configuration file.
    #[arg(long, short = 'f', env = "CFGFILE_PATH")]
    file: PathBuf,

    /// Character separating setting names from values.
    #[arg(
        long,
        short = 'd',
        default_value_t = '=',
        env = "CFGFILE_DELIMITER",
        value_parser = parse_delimiter
    )]
    delimiter: char,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a setting's value.
    Get {
        category: String,
        name: String,
        /// Type to read the value as.
        #[arg(long = "as", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,
        /// Printed when the setting does not exist.
        #[arg(long)]
        default: Option<String>,
    },
    /// Set a setting's value in place, creating it if needed.
    Set {
        category: String,
        name: String,
        value: String,
    },
    /// Add a setting; an existing one is replaced and moved to the end.
    Add {
        category: String,
        name: String,
        value: String,
    },
    /// Remove a setting, or the whole category when no name is given.
    Remove {
        category: String,
        name: Option<String>,
    },
    /// List category names, or the setting names of one category.
    List { category: Option<String> },
    /// Report malformed lines; exits non-zero if there are any.
    Check,
    /// Print the whole file.
    Dump {
        /// Print JSON instead of the file format.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueType {
    String,
    Integer,
    Real,
    Boolean,
}

/// How a command finished, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    /// `check` found malformed lines.
    ProblemsFound,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::ProblemsFound => ExitCode::FAILURE,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays machine-readable.  Level is
    // overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let outcome = run(cli, &mut stdout.lock())?;
    Ok(outcome.into())
}

/// Executes one command against the configuration file, printing to `out`.
fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let options = FormatOptions::with_delimiter(cli.delimiter);
    let mut file = ConfigFile::open(&cli.file, options)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;

    match cli.command {
        Command::Get {
            category,
            name,
            value_type,
            default,
        } => {
            let value = file.value(&category, &name);
            writeln!(out, "{}", render(&value, value_type, default.as_deref())?)?;
        }
        Command::Set {
            category,
            name,
            value,
        } => {
            file.set_value(&category, &name, value);
            file.write()?;
        }
        Command::Add {
            category,
            name,
            value,
        } => {
            file.add_setting(&category, &name, value);
            file.write()?;
        }
        Command::Remove { category, name } => {
            match name {
                Some(name) => file.remove_setting(&category, &name),
                None => file.remove_category(&category),
            }
            file.write()?;
        }
        Command::List { category } => {
            let names = match &category {
                Some(category) => file.setting_names(category),
                None => file.categories(),
            };
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        Command::Check => {
            for diagnostic in file.diagnostics() {
                writeln!(out, "{diagnostic}")?;
            }
            if !file.diagnostics().is_empty() {
                return Ok(Outcome::ProblemsFound);
            }
        }
        Command::Dump { json } => {
            if json {
                let text = serde_json::to_string_pretty(file.settings())
                    .context("failed to encode settings as JSON")?;
                writeln!(out, "{text}")?;
            } else {
                write!(
                    out,
                    "{}",
                    cfgfile_core::write_settings(file.settings(), file.options())
                )?;
            }
        }
    }

    Ok(Outcome::Success)
}

/// Reads `value` as `value_type`, falling back to `default` when absent.
///
/// The default is parsed with the same rules as stored payloads.
fn render(value: &Value, value_type: ValueType, default: Option<&str>) -> anyhow::Result<String> {
    let fallback = default.map(Value::new).unwrap_or_else(Value::empty);
    let invalid_default = || format!("--default is not a valid {value_type:?}");

    let rendered = match value_type {
        ValueType::String => value.as_string_or(&fallback.as_string()),
        ValueType::Integer => {
            let fallback = fallback.as_integer().with_context(invalid_default)?;
            value.as_integer_or(fallback)?.to_string()
        }
        ValueType::Real => {
            let fallback = fallback.as_real().with_context(invalid_default)?;
            value.as_real_or(fallback)?.to_string()
        }
        ValueType::Boolean => {
            let fallback = fallback.as_boolean().with_context(invalid_default)?;
            value.as_boolean_or(fallback)?.to_string()
        }
    };
    Ok(rendered)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
