//! `env-switch` - switch between multiple `.env` environment configurations
//!
//! The active profile is tracked purely on disk: `.env.<name>.active`
//! marks the profile whose contents currently sit in `.env`. Switching
//! saves `.env` back into the old profile, seeds the new profile from
//! `.env.example` on first use, and copies it into `.env`.

pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod observability;
pub mod profile;
pub mod state;
pub mod switcher;
pub mod transition;
