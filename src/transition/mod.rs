//! Profile transitions
//!
//! The [`engine`] turns "activate T while A is active" into an ordered list
//! of copies and renames; [`fs`] is the file system seam it runs against.

pub mod engine;
pub mod fs;

pub use engine::{Plan, Step, TransitionEngine};
pub use fs::{FileSystem, FsOp, RecordingFs, StdFs};
