//! Error types for `env-switch`
//!
//! Every failure path ends in a single human-readable line on stderr and a
//! process exit code. Domain errors are kept small and specific; the
//! top-level [`EnvSwitchError`] aggregates them and owns the exit code
//! mapping.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `env-switch`.
///
/// Cancellation by the user is a successful exit. Argument syntax errors are
/// reported by clap with its own usage code.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution, no-op, dry run, or user cancellation
    pub const SUCCESS: i32 = 0;

    /// Validation failure, file operation failure, or unexpected error
    pub const ERROR: i32 = 1;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `env-switch` operations.
#[derive(Debug, Error)]
pub enum EnvSwitchError {
    /// Requested environment is not in the catalog
    #[error(transparent)]
    InvalidEnvironment(#[from] InvalidEnvironmentError),

    /// Copy or rename failed mid-transition
    #[error(transparent)]
    FileOperation(#[from] FileOpError),

    /// Catalog or root directory configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading the confirmation answer failed
    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvSwitchError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidEnvironment(_)
            | Self::FileOperation(_)
            | Self::Config(_)
            | Self::Prompt(_)
            | Self::Io(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// The requested environment name is not one of the recognized profiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid environment \"{input}\". Valid options are: {}{}",
    .valid.join(", "),
    .suggestion.as_ref().map(|s| format!(" (did you mean \"{s}\"?)")).unwrap_or_default()
)]
pub struct InvalidEnvironmentError {
    /// The normalized (trimmed, lowercased) input
    pub input: String,
    /// Every valid name, in catalog order
    pub valid: Vec<String>,
    /// Closest valid name, if any is near enough
    pub suggestion: Option<String>,
}

// ============================================================================
// File Operation Errors
// ============================================================================

/// A single copy or rename failed.
///
/// No compensating action is taken: steps that already ran stay applied.
#[derive(Debug, Error)]
pub enum FileOpError {
    /// Copying `from` over `to` failed
    #[error("Error copying file from {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        /// Source path
        from: PathBuf,
        /// Destination path
        to: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Renaming `from` to `to` failed
    #[error("Error renaming file from {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        /// Source path
        from: PathBuf,
        /// Destination path
        to: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Invalid catalog or directory configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No environment names were configured
    #[error("environment list is empty")]
    EmptyCatalog,

    /// A configured name cannot be used as a file suffix
    #[error("invalid environment name '{name}': {reason}")]
    InvalidName {
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The same name appears twice
    #[error("duplicate environment name '{name}'")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// Root directory cannot be used
    #[error("working directory {} is not usable: {source}", .path.display())]
    Root {
        /// The configured root
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `env-switch` operations.
pub type Result<T> = std::result::Result<T, EnvSwitchError>;

// ============================================================================
// Tests
// ============================================================================
