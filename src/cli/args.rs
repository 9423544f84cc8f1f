//! CLI argument definitions
//!
//! All Clap derive structs for `env-switch` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{DIR_ENV, ENVIRONMENTS_ENV};
use crate::observability::LogFormat;

/// Switch between multiple environment configurations.
///
/// Copies the selected profile (`.env.<name>`) into `.env` and marks it
/// active; the previously active profile gets the current `.env` contents
/// saved back first.
#[derive(Parser, Debug)]
#[command(name = "env-switch", author, version, about)]
pub struct Cli {
    /// Environment to switch to (case-insensitive, e.g. dev, prod, testing).
    #[arg(value_name = "NEW_ENV")]
    pub target: String,

    /// Switch without asking for confirmation.
    #[arg(short, long)]
    pub force: bool,

    /// Directory containing `.env` and the profile files.
    #[arg(short = 'C', long, default_value = ".", env = DIR_ENV)]
    pub dir: PathBuf,

    /// Recognized environment names, in scan order (comma separated).
    #[arg(long, value_delimiter = ',', env = ENVIRONMENTS_ENV)]
    pub environments: Option<Vec<String>>,

    /// Print the planned file operations without performing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "ENVSWITCH_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}
