//! Switch orchestration
//!
//! Glues the pieces together for one invocation: validate the requested
//! name, read the active state, short-circuit when nothing changes, ask for
//! confirmation, then run the transition.

use tracing::info;

use crate::config::Settings;
use crate::confirm::{ConfirmationGate, Prompt};
use crate::error::EnvSwitchError;
use crate::profile::{EnvFiles, Environment};
use crate::state::StateReader;
use crate::transition::{FileSystem, Plan, TransitionEngine};

/// How an invocation ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Target was already active; nothing was touched.
    AlreadyActive(Environment),
    /// Dry run: the plan that would have been executed.
    DryRun(Plan),
    /// The user declined the prompt; nothing was touched.
    Cancelled(Environment),
    /// The transition ran to completion.
    Switched(Plan),
}

/// Runs switch requests against one root directory.
#[derive(Debug)]
pub struct Switcher<F> {
    settings: Settings,
    files: EnvFiles,
    fs: F,
    dry_run: bool,
}

impl<F: FileSystem> Switcher<F> {
    /// Creates a switcher over `settings` using `fs` for all file access.
    pub fn new(settings: Settings, fs: F) -> Self {
        let files = settings.files();
        Self {
            settings,
            files,
            fs,
            dry_run: false,
        }
    }

    /// Plan only; never prompt or mutate.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Switches to `requested`, asking `gate` before any mutation.
    ///
    /// # Errors
    ///
    /// - [`EnvSwitchError::InvalidEnvironment`] if `requested` is not in the
    ///   catalog (nothing on disk is read or written)
    /// - [`EnvSwitchError::Prompt`] if the confirmation cannot be read
    /// - [`EnvSwitchError::FileOperation`] if a copy or rename fails; earlier
    ///   steps stay applied
    pub fn switch<P: Prompt>(
        &self,
        requested: &str,
        gate: &mut ConfirmationGate<P>,
    ) -> Result<Outcome, EnvSwitchError> {
        let target = self.settings.catalog.validate(requested)?;
        let active = StateReader::new(&self.settings.catalog, &self.files, &self.fs)
            .detect_checked();

        info!("New Environment:\t{target}");
        info!(
            "Active Environment:\t{}",
            active.as_ref().map_or("None", Environment::as_str)
        );

        if active.as_ref() == Some(&target) {
            info!("No action needed. Already in \"{target}\" environment.");
            return Ok(Outcome::AlreadyActive(target));
        }

        let engine = TransitionEngine::new(&self.files, &self.fs);

        if self.dry_run {
            let plan = engine.plan(&target, active.as_ref());
            for step in &plan.steps {
                info!("Would {step}");
            }
            return Ok(Outcome::DryRun(plan));
        }

        if !gate.approve(&target).map_err(EnvSwitchError::Prompt)? {
            info!("Operation cancelled.");
            return Ok(Outcome::Cancelled(target));
        }

        let plan = engine.switch_to(&target, active.as_ref())?;
        info!("Successfully switched to \"{target}\" environment.");
        Ok(Outcome::Switched(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::LinePrompt;
    use crate::profile::Catalog;
    use crate::transition::{RecordingFs, StdFs};
    use std::path::Path;

    struct NoPrompt;

    impl Prompt for NoPrompt {
        fn ask(&mut self, _question: &str) -> std::io::Result<String> {
            panic!("prompt must not be shown");
        }
    }

    fn switcher<'a>(root: &Path, fs: &'a RecordingFs) -> Switcher<&'a RecordingFs> {
        Switcher::new(Settings::new(root, Catalog::default()), fs)
    }

    #[test]
    fn invalid_name_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let fs = RecordingFs::new(StdFs);
        let mut gate = ConfirmationGate::new(true, NoPrompt);

        let err = switcher(dir.path(), &fs)
            .switch("qa", &mut gate)
            .unwrap_err();

        assert!(matches!(err, EnvSwitchError::InvalidEnvironment(_)));
        assert!(fs.ops().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn already_active_is_noop_without_prompt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.dev.active"), "X").unwrap();
        std::fs::write(dir.path().join(".env"), "X").unwrap();
        let fs = RecordingFs::new(StdFs);
        let mut gate = ConfirmationGate::new(false, NoPrompt);

        let outcome = switcher(dir.path(), &fs)
            .switch("DEV", &mut gate)
            .unwrap();

        assert!(matches!(outcome, Outcome::AlreadyActive(ref e) if e.as_str() == "dev"));
        assert!(fs.ops().is_empty());
    }

    #[test]
    fn declined_prompt_cancels() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.example"), "T").unwrap();
        let fs = RecordingFs::new(StdFs);
        let mut out = Vec::new();
        let mut gate = ConfirmationGate::new(false, LinePrompt::new("n\n".as_bytes(), &mut out));

        let outcome = switcher(dir.path(), &fs)
            .switch("prod", &mut gate)
            .unwrap();

        assert!(matches!(outcome, Outcome::Cancelled(_)));
        assert!(fs.ops().is_empty());
        assert!(!dir.path().join(".env").exists());
    }

    #[test]
    fn accepted_prompt_switches() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.example"), "T").unwrap();
        let fs = RecordingFs::new(StdFs);
        let mut out = Vec::new();
        let mut gate = ConfirmationGate::new(false, LinePrompt::new("y\n".as_bytes(), &mut out));

        let outcome = switcher(dir.path(), &fs)
            .switch("prod", &mut gate)
            .unwrap();

        let Outcome::Switched(plan) = outcome else {
            panic!("expected switch, got {outcome:?}");
        };
        assert!(plan.seeds_target());
        assert_eq!(fs.ops().len(), 3);
        assert!(dir.path().join(".env.prod.active").exists());
    }

    #[test]
    fn dry_run_plans_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.dev.active"), "X").unwrap();
        std::fs::write(dir.path().join(".env"), "Y").unwrap();
        let fs = RecordingFs::new(StdFs);
        let mut gate = ConfirmationGate::new(false, NoPrompt);

        let outcome = switcher(dir.path(), &fs)
            .dry_run(true)
            .switch("testing", &mut gate)
            .unwrap();

        let Outcome::DryRun(plan) = outcome else {
            panic!("expected dry run, got {outcome:?}");
        };
        assert_eq!(plan.previous.as_ref().map(Environment::as_str), Some("dev"));
        assert_eq!(plan.steps.len(), 5);
        assert!(fs.ops().is_empty());
        assert!(dir.path().join(".env.dev.active").exists());
    }

    #[test]
    fn prompt_failure_is_an_error() {
        struct Closed;
        impl Prompt for Closed {
            fn ask(&mut self, _question: &str) -> std::io::Result<String> {
                Err(std::io::Error::other("terminal gone"))
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let fs = RecordingFs::new(StdFs);
        let mut gate = ConfirmationGate::new(false, Closed);

        let err = switcher(dir.path(), &fs)
            .switch("dev", &mut gate)
            .unwrap_err();

        assert!(matches!(err, EnvSwitchError::Prompt(_)));
        assert!(fs.ops().is_empty());
    }
}
