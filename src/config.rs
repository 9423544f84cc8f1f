//! Runtime settings
//!
//! The root directory and the catalog are resolved once from CLI arguments
//! (or their `ENVSWITCH_*` environment fallbacks) and handed to every
//! component explicitly.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::profile::{Catalog, EnvFiles};

/// Environment variable overriding the root directory.
pub const DIR_ENV: &str = "ENVSWITCH_DIR";

/// Environment variable overriding the catalog (comma separated).
pub const ENVIRONMENTS_ENV: &str = "ENVSWITCH_ENVIRONMENTS";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding `.env` and the profile files
    pub root: PathBuf,
    /// Recognized profile names, in scan order
    pub catalog: Catalog,
}

impl Settings {
    /// Creates settings from already-validated parts.
    pub fn new(root: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            root: root.into(),
            catalog,
        }
    }

    /// Resolves settings from raw configuration values.
    ///
    /// `environments` of `None` selects the default catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Root`] if `root` is not an existing directory,
    /// or a catalog error for an invalid `environments` list.
    pub fn resolve(root: &Path, environments: Option<&[String]>) -> Result<Self, ConfigError> {
        let meta = std::fs::metadata(root).map_err(|source| ConfigError::Root {
            path: root.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(ConfigError::Root {
                path: root.to_path_buf(),
                source: io::Error::other("not a directory"),
            });
        }

        let catalog = match environments {
            Some(names) => Catalog::new(names)?,
            None => Catalog::default(),
        };

        Ok(Self::new(root, catalog))
    }

    /// File layout under the root directory.
    #[must_use]
    pub fn files(&self) -> EnvFiles {
        EnvFiles::new(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::resolve(dir.path(), None).unwrap();
        assert_eq!(settings.catalog, Catalog::default());
        assert_eq!(settings.files().live(), dir.path().join(".env"));
    }

    #[test]
    fn resolve_custom_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let names = vec!["staging".to_string(), "prod".to_string()];
        let settings = Settings::resolve(dir.path(), Some(&names)).unwrap();
        assert!(settings.catalog.validate("staging").is_ok());
        assert!(settings.catalog.validate("dev").is_err());
    }

    #[test]
    fn resolve_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Settings::resolve(&missing, None).unwrap_err();
        assert!(matches!(err, ConfigError::Root { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn resolve_rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".env");
        std::fs::write(&file, "A=1").unwrap();
        assert!(matches!(
            Settings::resolve(&file, None),
            Err(ConfigError::Root { .. })
        ));
    }

    #[test]
    fn resolve_rejects_bad_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let names = vec!["dev".to_string(), "Dev".to_string()];
        assert!(matches!(
            Settings::resolve(dir.path(), Some(&names)),
            Err(ConfigError::DuplicateName { .. })
        ));
    }
}
