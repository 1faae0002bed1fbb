//! Duration probing for the scanner.
//!
//! [`DurationProbe`] is the seam between folder aggregation and the media
//! parsers in `coursetime-probe`, so tests can substitute known durations.

pub use coursetime_probe::{ffprobe_available, ProbeBackend, ProbeError};

use coursetime_common::Hours;
use std::path::Path;
use tracing::debug;

/// Extracts a playable duration from a video file.
pub trait DurationProbe {
    /// Duration of the file at `path`, or why it could not be read.
    fn probe(&self, path: &Path) -> Result<Hours, ProbeError>;
}

impl<F> DurationProbe for F
where
    F: Fn(&Path) -> Result<Hours, ProbeError>,
{
    fn probe(&self, path: &Path) -> Result<Hours, ProbeError> {
        self(path)
    }
}

/// Probe backed by the container parsers in `coursetime-probe`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaDurationProbe {
    backend: ProbeBackend,
}

impl MediaDurationProbe {
    /// Create a probe using the default backend chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe pinned to one backend.
    pub fn with_backend(backend: ProbeBackend) -> Self {
        Self { backend }
    }

    /// Backend in use.
    pub fn backend(&self) -> ProbeBackend {
        self.backend
    }
}

impl DurationProbe for MediaDurationProbe {
    fn probe(&self, path: &Path) -> Result<Hours, ProbeError> {
        let info = coursetime_probe::probe_file_with(path, self.backend)?;
        debug!(
            "Probed {} ({}, {}): {:.1}s",
            path.display(),
            info.container,
            info.backend,
            info.as_secs_f64()
        );
        Ok(Hours::from(info.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_probe() {
        let probe = |_: &Path| -> Result<Hours, ProbeError> { Ok(Hours::from_secs_f64(1800.0)) };
        assert_eq!(probe.probe(Path::new("a.mp4")).unwrap(), Hours::new(0.5));
    }

    #[test]
    fn test_media_probe_missing_file() {
        let probe = MediaDurationProbe::new();
        assert_eq!(probe.backend(), ProbeBackend::Auto);

        let result = probe.probe(Path::new("/nonexistent/lecture.mp4"));
        assert!(matches!(result, Err(ProbeError::FileNotFound(_))));
    }

    #[test]
    fn test_with_backend() {
        let probe = MediaDurationProbe::with_backend(ProbeBackend::PureRust);
        assert_eq!(probe.backend(), ProbeBackend::PureRust);
    }
}
