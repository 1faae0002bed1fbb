//! Coursetime-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across coursetime:
//!
//! - **Durations**: The [`Hours`] type and the `HHh MMm` report format
//! - **Path Utilities**: Functions to detect course video files by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use coursetime_common::{format_duration, Hours};
//! use coursetime_common::paths::is_video_file;
//! use std::path::Path;
//!
//! let lecture = Hours::from_secs_f64(5400.0);
//! assert_eq!(lecture.to_string(), "01h 30m");
//! assert_eq!(format_duration(25.0), "25h 00m");
//!
//! assert!(is_video_file(Path::new("01 - Intro.mkv")));
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
