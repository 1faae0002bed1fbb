//! Common error types used throughout coursetime.
//!
//! These cover the failures that abort a report: a bad root folder, a course
//! with nothing counted, and I/O failures while listing sections. Per-file
//! probe failures live in `coursetime-probe` and never reach this type.

use std::path::PathBuf;

/// Common error type for coursetime.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The root folder does not exist.
    #[error("Root folder not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The root folder exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// No counted section contributed any duration, so percentages are undefined.
    #[error(
        "No counted course duration under {}: name section folders with a leading number (e.g. \"01 - Intro\") or mark them \"[Done] \"",
        .0.display()
    )]
    NoCountedDuration(PathBuf),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new RootNotFound error.
    pub fn root_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::RootNotFound(path.into())
    }

    /// Create a new NotADirectory error.
    pub fn not_a_directory<P: Into<PathBuf>>(path: P) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Create a new NoCountedDuration error.
    pub fn no_counted_duration<P: Into<PathBuf>>(path: P) -> Self {
        Self::NoCountedDuration(path.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
