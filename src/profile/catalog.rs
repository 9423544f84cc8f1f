//! Environment catalog and name validation
//!
//! The catalog is the closed, ordered list of profile names the tool
//! recognizes. Order matters: the state reader scans markers in catalog
//! order and the first match wins.

use std::fmt;

use crate::error::{ConfigError, InvalidEnvironmentError};

/// Names recognized when no override is configured, in scan order.
pub const DEFAULT_ENVIRONMENTS: &[&str] = &["dev", "prod", "testing"];

/// Largest Damerau-Levenshtein distance still offered as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// A validated environment name.
///
/// Only [`Catalog::validate`] (or catalog iteration) produces values of this
/// type, so holding one means the name is part of the active catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment(String);

impl Environment {
    /// The lowercase name, as used in file suffixes.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered set of recognized environment names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<Environment>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_ENVIRONMENTS
                .iter()
                .map(|name| Environment((*name).to_string()))
                .collect(),
        }
    }
}

impl Catalog {
    /// Builds a catalog from configured names, keeping their order.
    ///
    /// Names are trimmed and lowercased. Each must be non-empty, unique and
    /// made of `[a-z0-9_-]` so that `.env.<name>` and `.env.<name>.active`
    /// cannot collide with another profile's files.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty list, an unusable name, or a
    /// duplicate.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Environment> = Vec::new();
        for raw in names {
            let name = normalize(raw.as_ref());
            check_name(&name)?;
            if out.iter().any(|e| e.0 == name) {
                return Err(ConfigError::DuplicateName { name });
            }
            out.push(Environment(name));
        }
        if out.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { names: out })
    }

    /// Resolves a requested name against the catalog.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Pure:
    /// never touches the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEnvironmentError`] carrying the normalized input,
    /// every valid name, and the closest name when one is near enough.
    pub fn validate(&self, requested: &str) -> Result<Environment, InvalidEnvironmentError> {
        let normalized = normalize(requested);
        if let Some(env) = self.names.iter().find(|e| e.0 == normalized) {
            return Ok(env.clone());
        }
        Err(InvalidEnvironmentError {
            suggestion: self.suggest(&normalized),
            valid: self.names.iter().map(|e| e.0.clone()).collect(),
            input: normalized,
        })
    }

    /// Closest catalog name for typo correction.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }
        self.names
            .iter()
            .map(|e| (e, strsim::damerau_levenshtein(input, &e.0)))
            .filter(|(_, dist)| *dist <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(_, dist)| *dist)
            .map(|(e, _)| e.0.clone())
    }

    /// Names in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Environment> {
        self.names.iter()
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn check_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty",
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ConfigError::InvalidName {
            name: name.to_string(),
            reason: "only lowercase letters, digits, '-' and '_' are allowed",
        });
    }
    if name == "example" {
        return Err(ConfigError::InvalidName {
            name: name.to_string(),
            reason: "'.env.example' is the template file",
        });
    }
    Ok(())
}
