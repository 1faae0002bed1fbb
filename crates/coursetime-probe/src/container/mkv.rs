//! Matroska (MKV/WebM) container parsing

use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::time::Duration;

use matroska::Matroska;

use super::open;
use crate::error::ProbeError;

/// Probe the duration of a Matroska file
pub fn probe(path: &Path) -> Result<Duration, ProbeError> {
    let file = open(path)?;
    probe_reader(BufReader::new(file))
}

/// Probe the duration of Matroska data from any seekable reader
pub fn probe_reader<R: Read + Seek>(reader: R) -> Result<Duration, ProbeError> {
    let mkv = Matroska::open(reader)
        .map_err(|e| ProbeError::ContainerParse(format!("MKV parse error: {}", e)))?;

    mkv.info
        .duration
        .filter(|d| !d.is_zero())
        .ok_or_else(|| ProbeError::NoDuration("Matroska".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// EBML header, then a Segment holding only an Info element whose
    /// Duration is `duration_ms` at the default 1 ms timestamp scale
    fn mkv_bytes(duration_ms: f64) -> Vec<u8> {
        let mut info_body = vec![0x44, 0x89, 0x88];
        info_body.extend_from_slice(&duration_ms.to_be_bytes());

        let mut info = vec![0x15, 0x49, 0xA9, 0x66, 0x80 | info_body.len() as u8];
        info.extend_from_slice(&info_body);

        let mut data = vec![0x1A, 0x45, 0xDF, 0xA3, 0x80];
        data.extend_from_slice(&[0x18, 0x53, 0x80, 0x67, 0x80 | info.len() as u8]);
        data.extend_from_slice(&info);
        data
    }

    #[test]
    fn test_segment_duration() {
        let duration = probe_reader(Cursor::new(mkv_bytes(90_000.0))).unwrap();
        assert_eq!(duration, Duration::from_secs(90));
    }

    #[test]
    fn test_fractional_duration() {
        let duration = probe_reader(Cursor::new(mkv_bytes(1_500.5))).unwrap();
        assert_eq!(duration, Duration::from_micros(1_500_500));
    }

    #[test]
    fn test_zero_duration() {
        let result = probe_reader(Cursor::new(mkv_bytes(0.0)));
        assert!(matches!(result, Err(ProbeError::NoDuration(_))));
    }

    #[test]
    fn test_probe_truncated_header() {
        // EBML magic with nothing behind it
        let data = vec![0x1A, 0x45, 0xDF, 0xA3, 0x80];
        let result = probe_reader(Cursor::new(data));
        assert!(result.is_err());
    }

    #[test]
    fn test_probe_missing_file() {
        let result = probe(Path::new("/nonexistent/lecture.mkv"));
        assert!(matches!(result, Err(ProbeError::FileNotFound(_))));
    }
}
