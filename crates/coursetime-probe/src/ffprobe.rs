//! FFprobe-based duration probing.
//!
//! Used when the pure Rust parsers cannot read a file (unusual codecs,
//! damaged headers, containers we do not parse).

use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::container::duration_from_secs;
use crate::error::ProbeError;

const FFPROBE: &str = "ffprobe";

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    format_name: Option<String>,
    duration: Option<String>,
}

/// Whether `ffprobe` is on `PATH`.
pub fn ffprobe_available() -> bool {
    which::which(FFPROBE).is_ok()
}

/// Probe a media file's duration using ffprobe.
///
/// Returns the container name reported by ffprobe alongside the duration.
pub fn probe_with_ffprobe(path: &Path) -> Result<(String, Duration), ProbeError> {
    if !path.exists() {
        return Err(ProbeError::FileNotFound(path.to_path_buf()));
    }

    let output = Command::new(FFPROBE)
        .args(["-v", "quiet", "-print_format", "json", "-show_format"])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProbeError::ToolNotFound(FFPROBE.to_string())
            } else {
                ProbeError::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ProbeError::tool_failed(
            FFPROBE,
            format!("exit status {}: {}", output.status, stderr.trim()),
        ));
    }

    parse_ffprobe_output(&output.stdout)
}

fn parse_ffprobe_output(stdout: &[u8]) -> Result<(String, Duration), ProbeError> {
    let parsed: FfprobeOutput = serde_json::from_slice(stdout)
        .map_err(|e| ProbeError::tool_failed(FFPROBE, format!("invalid JSON: {}", e)))?;

    let container = parsed
        .format
        .format_name
        .unwrap_or_else(|| "unknown".to_string());

    let secs = parsed
        .format
        .duration
        .as_deref()
        .and_then(|d| d.trim().parse::<f64>().ok())
        .ok_or_else(|| ProbeError::NoDuration(container.clone()))?;
    let duration = duration_from_secs(secs, &container)?;

    Ok((container, duration))
}
