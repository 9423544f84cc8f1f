//! Command-line interface
//!
//! Argument definitions and the entry point that turns a parsed [`Cli`]
//! into a switch.

pub mod args;

use crate::config::Settings;
use crate::confirm::{ConfirmationGate, TerminalPrompt};
use crate::error::EnvSwitchError;
use crate::switcher::{Outcome, Switcher};
use crate::transition::StdFs;

pub use args::Cli;

/// Runs a parsed invocation against the real file system and terminal.
///
/// # Errors
///
/// Returns the first configuration, validation, prompt, or file operation
/// error.
pub fn run(cli: &Cli) -> Result<Outcome, EnvSwitchError> {
    let settings = Settings::resolve(&cli.dir, cli.environments.as_deref())?;
    let mut gate = ConfirmationGate::new(cli.force, TerminalPrompt);
    Switcher::new(settings, StdFs)
        .dry_run(cli.dry_run)
        .switch(&cli.target, &mut gate)
}
