//! Confirmation gate
//!
//! Asks the user before mutating anything unless `--force` was given. Only
//! an answer of `y` (after trimming and lowercasing) proceeds; anything
//! else, including an empty line or a closed stdin, cancels.

use std::io::{self, BufRead, Write};

use crate::profile::Environment;

/// Source of a one-line answer to a question.
pub trait Prompt {
    /// Shows `question` and returns the raw line typed in response.
    ///
    /// End of input yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the question cannot be written or the answer
    /// cannot be read.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Prompt over any reader/writer pair.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Creates a prompt reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer)
    }
}

/// Prompt on the process terminal.
///
/// Stdin is locked only for the duration of a single [`Prompt::ask`] call,
/// so the handle is released whether the read succeeds or fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let stdin = io::stdin();
        let mut prompt = LinePrompt::new(stdin.lock(), io::stdout());
        prompt.ask(question)
    }
}

/// Decides whether a switch may proceed.
#[derive(Debug)]
pub struct ConfirmationGate<P> {
    force: bool,
    prompt: P,
}

impl<P: Prompt> ConfirmationGate<P> {
    /// Creates a gate; with `force` set the prompt is never shown.
    pub const fn new(force: bool, prompt: P) -> Self {
        Self { force, prompt }
    }

    /// Whether the prompt is skipped.
    #[must_use]
    pub const fn is_forced(&self) -> bool {
        self.force
    }

    /// Asks for confirmation to switch to `target`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the prompt if the answer cannot be read.
    pub fn approve(&mut self, target: &Environment) -> io::Result<bool> {
        if self.force {
            return Ok(true);
        }
        let answer = self
            .prompt
            .ask(&format!("Are you sure you want to switch to \"{target}\"? (y/n): "))?;
        Ok(is_yes(&answer))
    }
}

/// True only for `y`, ignoring case and surrounding whitespace.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}
