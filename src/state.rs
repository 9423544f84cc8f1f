//! Active profile detection
//!
//! Which profile is active is never stored anywhere: it is recomputed on
//! every invocation from the presence of `.env.<name>.active` markers.

use tracing::{debug, warn};

use crate::profile::{Catalog, EnvFiles, Environment};
use crate::transition::fs::FileSystem;

/// Reads active state from marker files.
#[derive(Debug)]
pub struct StateReader<'a, F> {
    catalog: &'a Catalog,
    files: &'a EnvFiles,
    fs: F,
}

impl<'a, F: FileSystem> StateReader<'a, F> {
    /// Creates a reader over `catalog` and `files`.
    pub const fn new(catalog: &'a Catalog, files: &'a EnvFiles, fs: F) -> Self {
        Self { catalog, files, fs }
    }

    /// First profile, in catalog order, whose active marker exists.
    #[must_use]
    pub fn detect_active(&self) -> Option<Environment> {
        self.catalog
            .iter()
            .find(|env| self.fs.exists(&self.files.marker(env)))
            .cloned()
    }

    /// Every profile whose active marker exists, in catalog order.
    ///
    /// More than one entry means the directory was edited by hand.
    #[must_use]
    pub fn active_markers(&self) -> Vec<Environment> {
        self.catalog
            .iter()
            .filter(|env| self.fs.exists(&self.files.marker(env)))
            .cloned()
            .collect()
    }

    /// Detects the active profile and warns when several markers exist.
    ///
    /// The first marker in catalog order still wins.
    #[must_use]
    pub fn detect_checked(&self) -> Option<Environment> {
        let markers = self.active_markers();
        if markers.len() > 1 {
            let names: Vec<&str> = markers.iter().map(Environment::as_str).collect();
            warn!(
                "Multiple active markers found ({}); using \"{}\"",
                names.join(", "),
                names[0]
            );
        }
        let active = markers.into_iter().next();
        debug!(active = ?active.as_ref().map(Environment::as_str), "scanned active markers");
        active
    }
}
