//! Observability
//!
//! Logging setup for `env-switch`. Library code reports progress through
//! `tracing` macros; the binary installs the subscriber.

pub mod logging;

pub use logging::{LogFormat, init_logging};
