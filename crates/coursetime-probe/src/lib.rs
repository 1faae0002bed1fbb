//! # coursetime-probe
//!
//! Video duration probing for course folders.
//!
//! This crate reads the playback duration of a video file without decoding
//! it, by parsing only the container headers:
//!
//! - MP4/MOV (via `mp4parse`)
//! - MKV/WebM (via `matroska`)
//! - AVI (`avih` main header, OpenDML extended header)
//! - WMV/ASF (File Properties object)
//!
//! Files the pure Rust parsers cannot read fall back to the `ffprobe` CLI
//! when [`ProbeBackend::Auto`] is used.
//!
//! ## Example
//!
//! ```no_run
//! let info = coursetime_probe::probe_file("01 - Intro/lecture.mp4").unwrap();
//! println!("{}: {:.1}s ({})", info.container, info.as_secs_f64(), info.backend);
//! ```

pub mod container;
pub mod error;
pub mod ffprobe;
pub mod types;

pub use error::ProbeError;
pub use ffprobe::{ffprobe_available, probe_with_ffprobe};
pub use types::*;

use std::path::Path;
use std::time::Duration;

use container::Container;
use tracing::debug;

/// Probe a media file's duration with the default backend chain
///
/// Every file handle opened here is scoped to the call and closed before it
/// returns, on success and on failure.
pub fn probe_file<P: AsRef<Path>>(path: P) -> Result<MediaDuration, ProbeError> {
    probe_file_with(path, ProbeBackend::Auto)
}

/// Probe a media file's duration with a specific backend
pub fn probe_file_with<P: AsRef<Path>>(
    path: P,
    backend: ProbeBackend,
) -> Result<MediaDuration, ProbeError> {
    let path = path.as_ref();

    match backend {
        ProbeBackend::PureRust => probe_pure_rust(path),
        ProbeBackend::Ffprobe => probe_ffprobe(path),
        ProbeBackend::Auto => match probe_pure_rust(path) {
            Ok(info) => Ok(info),
            // Nothing to fall back to for a missing file
            Err(e @ ProbeError::FileNotFound(_)) => Err(e),
            Err(e) => {
                debug!(
                    "Pure Rust probe failed for {}: {}; trying ffprobe",
                    path.display(),
                    e
                );
                probe_ffprobe(path).map_err(|ff_err| match ff_err {
                    // Without ffprobe the parser error is the informative one
                    ProbeError::ToolNotFound(_) => e,
                    other => other,
                })
            }
        },
    }
}

/// Probe just the duration
pub fn probe_duration<P: AsRef<Path>>(path: P) -> Result<Duration, ProbeError> {
    probe_file(path).map(|info| info.duration)
}

fn probe_pure_rust(path: &Path) -> Result<MediaDuration, ProbeError> {
    if !path.exists() {
        return Err(ProbeError::FileNotFound(path.to_path_buf()));
    }

    // Detect container format
    let container_type = container::detect_container(path).or_else(|_| {
        // Fall back to extension-based detection
        container::container_from_extension(path)
            .ok_or_else(|| ProbeError::UnsupportedContainer("Unknown".to_string()))
    })?;

    let duration = match container_type {
        Container::Matroska => container::mkv::probe(path),
        Container::Mp4 => container::mp4::probe(path),
        Container::Avi => container::avi::probe(path),
        Container::Asf => container::asf::probe(path),
    }?;

    Ok(MediaDuration {
        file_path: path.to_path_buf(),
        container: container_type.to_string(),
        duration,
        backend: ProbeBackend::PureRust,
    })
}

fn probe_ffprobe(path: &Path) -> Result<MediaDuration, ProbeError> {
    let (container, duration) = probe_with_ffprobe(path)?;
    Ok(MediaDuration {
        file_path: path.to_path_buf(),
        container,
        duration,
        backend: ProbeBackend::Ffprobe,
    })
}

/// Get the detected container format for a file
pub fn detect_container<P: AsRef<Path>>(path: P) -> Result<Container, ProbeError> {
    container::detect_container(path.as_ref())
}
