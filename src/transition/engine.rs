//! Transition engine
//!
//! Moves the directory from one active profile to another with a fixed
//! sequence of copies and renames:
//!
//! 1. deactivate the current profile: copy `.env` over `.env.A.active`, then
//!    rename `.env.A.active` to `.env.A`;
//! 2. seed `.env.T` from `.env.example` if it does not exist yet;
//! 3. activate the target: copy `.env.T` over `.env`, then rename `.env.T` to
//!    `.env.T.active`.
//!
//! The live file must stay at `.env`, so it only ever receives copies. The
//! per-profile file is relabeled by rename so its active status survives
//! restarts without any state file. Every step is fatal on failure and
//! nothing already done is undone.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::fs::FileSystem;
use crate::error::FileOpError;
use crate::profile::{EnvFiles, Environment};

/// One file operation in a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Copy `from` over `to`.
    Copy {
        /// Source path
        from: PathBuf,
        /// Destination path
        to: PathBuf,
    },
    /// Create a missing base file from the template.
    Seed {
        /// Template path
        from: PathBuf,
        /// Base file being created
        to: PathBuf,
    },
    /// Rename `from` to `to`.
    Rename {
        /// Source path
        from: PathBuf,
        /// Destination path
        to: PathBuf,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy { from, to } => {
                write!(f, "copy {} to {}", from.display(), to.display())
            }
            Self::Seed { from, to } => {
                write!(f, "create {} from {}", to.display(), from.display())
            }
            Self::Rename { from, to } => {
                write!(f, "rename {} to {}", from.display(), to.display())
            }
        }
    }
}

/// Ordered steps moving from `previous` to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Profile being activated
    pub target: Environment,
    /// Profile active before the transition, if any
    pub previous: Option<Environment>,
    /// Operations, in execution order
    pub steps: Vec<Step>,
}

impl Plan {
    /// True when the target is already active.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.steps.is_empty()
    }

    /// True when the target's base file will be created from the template.
    #[must_use]
    pub fn seeds_target(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, Step::Seed { .. }))
    }
}

/// Plans and executes profile transitions.
#[derive(Debug)]
pub struct TransitionEngine<'a, F> {
    files: &'a EnvFiles,
    fs: F,
}

impl<'a, F: FileSystem> TransitionEngine<'a, F> {
    /// Creates an engine over `files`.
    pub const fn new(files: &'a EnvFiles, fs: F) -> Self {
        Self { files, fs }
    }

    /// Builds the step list without touching anything.
    ///
    /// Returns an empty plan when `target` is already active. Whether the
    /// target needs seeding is decided from the current disk state;
    /// deactivation never touches the target's files, so the answer does
    /// not change between planning and execution.
    #[must_use]
    pub fn plan(&self, target: &Environment, active: Option<&Environment>) -> Plan {
        let mut steps = Vec::new();

        if active != Some(target) {
            if let Some(current) = active {
                let marker = self.files.marker(current);
                steps.push(Step::Copy {
                    from: self.files.live(),
                    to: marker.clone(),
                });
                steps.push(Step::Rename {
                    from: marker,
                    to: self.files.base(current),
                });
            }

            let base = self.files.base(target);
            if !self.fs.exists(&base) {
                steps.push(Step::Seed {
                    from: self.files.template(),
                    to: base.clone(),
                });
            }

            steps.push(Step::Copy {
                from: base.clone(),
                to: self.files.live(),
            });
            steps.push(Step::Rename {
                from: base,
                to: self.files.marker(target),
            });
        }

        Plan {
            target: target.clone(),
            previous: active.cloned(),
            steps,
        }
    }

    /// Runs every step of `plan` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step and returns it as a [`FileOpError`].
    /// Earlier steps stay applied.
    pub fn execute(&self, plan: &Plan) -> Result<(), FileOpError> {
        debug!(target_env = %plan.target, steps = plan.steps.len(), "executing plan");
        for step in &plan.steps {
            self.apply(step)?;
        }
        Ok(())
    }

    /// Plans and executes a switch to `target`.
    ///
    /// # Errors
    ///
    /// Returns the first copy or rename failure.
    pub fn switch_to(
        &self,
        target: &Environment,
        active: Option<&Environment>,
    ) -> Result<Plan, FileOpError> {
        let plan = self.plan(target, active);
        self.execute(&plan)?;
        Ok(plan)
    }

    fn apply(&self, step: &Step) -> Result<(), FileOpError> {
        match step {
            Step::Copy { from, to } => self.copy(from, to),
            Step::Seed { from, to } => {
                warn!(
                    "Environment file {} does not exist. Creating from {}.",
                    to.display(),
                    from.display()
                );
                self.copy(from, to)
            }
            Step::Rename { from, to } => {
                self.fs
                    .rename(from, to)
                    .map_err(|source| FileOpError::Rename {
                        from: from.clone(),
                        to: to.clone(),
                        source,
                    })?;
                info!("Renamed {} to {}", from.display(), to.display());
                Ok(())
            }
        }
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), FileOpError> {
        self.fs
            .copy(from, to)
            .map_err(|source| FileOpError::Copy {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })?;
        info!("Copied {} to {}", from.display(), to.display());
        Ok(())
    }
}
