//! Coursetime - Video course progress from section folder runtimes
//!
//! This library crate exposes the core functionality for integration testing.

pub mod probe;
pub mod report;
pub mod scanner;
