//! Core types for probe results

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Duration probed from a media file
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDuration {
    /// Path to the probed file
    pub file_path: PathBuf,
    /// Container format (e.g., "Matroska", "MP4", "AVI", "ASF")
    pub container: String,
    /// Playback duration
    pub duration: Duration,
    /// Backend that produced the result
    pub backend: ProbeBackend,
}

impl MediaDuration {
    /// Duration in seconds
    pub fn as_secs_f64(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// Probe backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProbeBackend {
    /// Pure Rust container parsing, falling back to ffprobe
    #[default]
    Auto,
    /// Pure Rust container parsing only
    PureRust,
    /// ffprobe CLI only
    Ffprobe,
}

impl fmt::Display for ProbeBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeBackend::Auto => write!(f, "auto"),
            ProbeBackend::PureRust => write!(f, "pure-rust"),
            ProbeBackend::Ffprobe => write!(f, "ffprobe"),
        }
    }
}
