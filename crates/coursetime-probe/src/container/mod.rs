//! Container format detection and duration parsing

pub mod asf;
pub mod avi;
pub mod mkv;
pub mod mp4;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::time::Duration;

use crate::error::ProbeError;

/// Supported container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// Matroska (.mkv, .webm)
    Matroska,
    /// MPEG-4 Part 14 / QuickTime (.mp4, .m4v, .mov)
    Mp4,
    /// RIFF AVI (.avi)
    Avi,
    /// Advanced Systems Format (.wmv, .asf)
    Asf,
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Matroska => write!(f, "Matroska"),
            Container::Mp4 => write!(f, "MP4"),
            Container::Avi => write!(f, "AVI"),
            Container::Asf => write!(f, "ASF"),
        }
    }
}

/// Detect container format from file magic bytes
pub fn detect_container(path: &Path) -> Result<Container, ProbeError> {
    let file = open(path)?;
    let mut reader = BufReader::new(file);
    detect_container_from_reader(&mut reader)
}

/// Detect container format from a reader
pub fn detect_container_from_reader<R: Read + Seek>(
    reader: &mut R,
) -> Result<Container, ProbeError> {
    let mut magic = Vec::with_capacity(16);
    reader.by_ref().take(16).read_to_end(&mut magic)?;

    // Reset reader position
    reader.rewind()?;

    if magic.len() < 12 {
        return Err(ProbeError::UnsupportedContainer(
            "File too short to identify".to_string(),
        ));
    }

    // EBML header
    if magic[0..4] == [0x1A, 0x45, 0xDF, 0xA3] {
        return Ok(Container::Matroska);
    }

    // ftyp box at offset 4, or a file that opens with moov/mdat/free/wide
    if matches!(&magic[4..8], b"ftyp" | b"moov" | b"mdat" | b"free" | b"wide") {
        return Ok(Container::Mp4);
    }

    if &magic[0..4] == b"RIFF" && &magic[8..12] == b"AVI " {
        return Ok(Container::Avi);
    }

    if magic.len() == 16 && magic[..] == asf::HEADER_OBJECT_GUID {
        return Ok(Container::Asf);
    }

    Err(ProbeError::UnsupportedContainer(
        "Unable to detect container format from magic bytes".to_string(),
    ))
}

/// Get container type from file extension (fallback)
pub fn container_from_extension(path: &Path) -> Option<Container> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "mkv" | "webm" | "mk3d" => Some(Container::Matroska),
        "mp4" | "m4v" | "mov" | "3gp" => Some(Container::Mp4),
        "avi" => Some(Container::Avi),
        "wmv" | "asf" => Some(Container::Asf),
        _ => None,
    }
}

/// Open a file, mapping a missing path to `FileNotFound`
pub(crate) fn open(path: &Path) -> Result<File, ProbeError> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::FileNotFound(path.to_path_buf())
        } else {
            ProbeError::Io(e)
        }
    })
}

pub(crate) fn read_u32_le<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

pub(crate) fn read_u64_le<R: Read>(reader: &mut R) -> std::io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

pub(crate) fn read_fourcc<R: Read>(reader: &mut R) -> std::io::Result<[u8; 4]> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Seconds as a `Duration`, or `NoDuration` when the value is not positive
/// or too large to represent.
pub(crate) fn duration_from_secs(secs: f64, container: &str) -> Result<Duration, ProbeError> {
    if secs.is_nan() || secs <= 0.0 {
        return Err(ProbeError::NoDuration(container.to_string()));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|_| ProbeError::NoDuration(format!("{} (duration out of range)", container)))
}
