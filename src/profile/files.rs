//! File layout for environment profiles
//!
//! | Path                  | Meaning                              |
//! |-----------------------|--------------------------------------|
//! | `.env`                | live file read by downstream tools   |
//! | `.env.<name>`         | inactive snapshot of profile `name`  |
//! | `.env.<name>.active`  | marker: `name` is the active profile |
//! | `.env.example`        | template seeding a first activation  |

use std::path::{Path, PathBuf};

use super::catalog::Environment;

/// Live file name.
pub const LIVE_FILE: &str = ".env";

/// Template file name.
pub const TEMPLATE_FILE: &str = ".env.example";

/// Suffix appended to a base file to mark it active.
pub const ACTIVE_SUFFIX: &str = ".active";

/// Resolves profile paths under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFiles {
    root: PathBuf,
}

impl EnvFiles {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory all paths are joined onto.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `.env`
    #[must_use]
    pub fn live(&self) -> PathBuf {
        self.root.join(LIVE_FILE)
    }

    /// `.env.example`
    #[must_use]
    pub fn template(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE)
    }

    /// `.env.<name>`
    #[must_use]
    pub fn base(&self, env: &Environment) -> PathBuf {
        self.root.join(format!("{LIVE_FILE}.{env}"))
    }

    /// `.env.<name>.active`
    #[must_use]
    pub fn marker(&self, env: &Environment) -> PathBuf {
        self.root.join(format!("{LIVE_FILE}.{env}{ACTIVE_SUFFIX}"))
    }
}
