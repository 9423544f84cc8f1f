//! File system seam
//!
//! The state reader and transition engine only need three primitives. Putting
//! them behind [`FileSystem`] lets tests wrap the real file system in a
//! [`RecordingFs`] and assert exactly which mutations happened.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

/// Minimal file system operations used by `env-switch`.
pub trait FileSystem {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Copies `from` over `to`, creating or truncating `to`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Renames `from` to `to`, replacing `to` if it exists.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).copy(from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }
}

/// The real file system via `std::fs`.
///
/// `std::fs::rename` replaces an existing destination on both Unix and
/// Windows; any platform that refuses surfaces as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl FileSystem for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::copy(from, to).map(|_| ())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// A mutation observed by [`RecordingFs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    /// `copy(from, to)` was attempted
    Copy(PathBuf, PathBuf),
    /// `rename(from, to)` was attempted
    Rename(PathBuf, PathBuf),
}

/// Wraps another [`FileSystem`] and records every attempted mutation.
#[derive(Debug, Default)]
pub struct RecordingFs<F = StdFs> {
    inner: F,
    ops: RefCell<Vec<FsOp>>,
}

impl<F: FileSystem> RecordingFs<F> {
    /// Wraps `inner`.
    pub const fn new(inner: F) -> Self {
        Self {
            inner,
            ops: RefCell::new(Vec::new()),
        }
    }

    /// Mutations attempted so far, in order.
    #[must_use]
    pub fn ops(&self) -> Vec<FsOp> {
        self.ops.borrow().clone()
    }
}

impl<F: FileSystem> FileSystem for RecordingFs<F> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.ops
            .borrow_mut()
            .push(FsOp::Copy(from.to_path_buf(), to.to_path_buf()));
        self.inner.copy(from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.ops
            .borrow_mut()
            .push(FsOp::Rename(from.to_path_buf(), to.to_path_buf()));
        self.inner.rename(from, to)
    }
}
