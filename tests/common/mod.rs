//! Shared fixtures for integration tests.
//!
//! Writes course folders full of synthetic AVI files whose headers declare an
//! exact runtime, so the real probe can read them without any media tools.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 25 fps
const MICROS_PER_FRAME: u32 = 40_000;

/// Minimal RIFF/AVI header declaring `seconds` of video.
pub fn avi_bytes(seconds: u32) -> Vec<u8> {
    let mut avih = MICROS_PER_FRAME.to_le_bytes().to_vec();
    avih.extend_from_slice(&[0u8; 12]);
    avih.extend_from_slice(&(seconds * 25).to_le_bytes());
    avih.extend_from_slice(&[0u8; 36]);

    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&(4 + 12 + 8 + avih.len() as u32).to_le_bytes());
    data.extend_from_slice(b"AVI LIST");
    data.extend_from_slice(&(12 + avih.len() as u32).to_le_bytes());
    data.extend_from_slice(b"hdrlavih");
    data.extend_from_slice(&(avih.len() as u32).to_le_bytes());
    data.extend_from_slice(&avih);
    data
}

/// A course root in a temporary directory.
pub struct TestCourse {
    dir: TempDir,
}

impl TestCourse {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty section folder.
    pub fn section(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::create_dir_all(&path).expect("failed to create section");
        path
    }

    /// Write a synthetic AVI of `seconds` at `relative` (parents created).
    pub fn video(&self, relative: &str, seconds: u32) -> PathBuf {
        self.write(relative, &avi_bytes(seconds))
    }

    /// Write arbitrary bytes at `relative` (parents created).
    pub fn write(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent");
        }
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }
}
