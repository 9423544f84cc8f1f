//! Environment profiles
//!
//! The catalog of recognized profile names and the on-disk layout of each
//! profile's files.

pub mod catalog;
pub mod files;

pub use catalog::{Catalog, DEFAULT_ENVIRONMENTS, Environment};
pub use files::{ACTIVE_SUFFIX, EnvFiles, LIVE_FILE, TEMPLATE_FILE};
