//! MP4/MOV container parsing

use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Duration;

use mp4parse::{read_mp4, MediaContext};

use super::{duration_from_secs, open};
use crate::error::ProbeError;

/// Probe the duration of an MP4 file
pub fn probe(path: &Path) -> Result<Duration, ProbeError> {
    let file = open(path)?;
    let mut reader = BufReader::new(file);
    probe_reader(&mut reader)
}

/// Probe the duration of MP4 data from any reader
pub fn probe_reader<R: Read>(reader: &mut R) -> Result<Duration, ProbeError> {
    let context = read_mp4(reader)
        .map_err(|e| ProbeError::ContainerParse(format!("MP4 parse error: {:?}", e)))?;

    let secs =
        longest_track(&context).ok_or_else(|| ProbeError::NoDuration("MP4".to_string()))?;
    duration_from_secs(secs, "MP4")
}

/// Longest track duration in seconds, each track in its own timescale
fn longest_track(context: &MediaContext) -> Option<f64> {
    let movie_scale = context.timescale.map(|ts| ts.0);

    context
        .tracks
        .iter()
        .filter_map(|t| {
            let units = t.duration?.0;
            let scale = t.timescale.map(|s| s.0).or(movie_scale)?;
            if scale == 0 {
                return None;
            }
            Some(units as f64 / scale as f64)
        })
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .fold(None, |longest: Option<f64>, secs| {
            Some(longest.map_or(secs, |l| l.max(secs)))
        })
}
