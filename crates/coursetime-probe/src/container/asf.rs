//! Advanced Systems Format (WMV/ASF) container parsing
//!
//! The header object holds a File Properties object whose play duration is
//! in 100-nanosecond units and includes the preroll (in milliseconds).

use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

use super::{duration_from_secs, open, read_u32_le, read_u64_le};
use crate::error::ProbeError;

/// ASF Header Object GUID (75B22630-668E-11CF-A6D9-00AA0062CE6C)
pub const HEADER_OBJECT_GUID: [u8; 16] = [
    0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];

/// ASF File Properties Object GUID (8CABDCA1-A947-11CF-8EE4-00C00C205365)
pub const FILE_PROPERTIES_GUID: [u8; 16] = [
    0xA1, 0xDC, 0xAB, 0x8C, 0x47, 0xA9, 0xCF, 0x11, 0x8E, 0xE4, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65,
];

/// GUID plus 64-bit object size
const OBJECT_HEADER_LEN: u64 = 24;

/// Probe the duration of a WMV/ASF file
pub fn probe(path: &Path) -> Result<Duration, ProbeError> {
    let file = open(path)?;
    let mut reader = BufReader::new(file);
    probe_reader(&mut reader)
}

/// Probe the duration of ASF data from a seekable reader
pub fn probe_reader<R: Read + Seek>(reader: &mut R) -> Result<Duration, ProbeError> {
    let (guid, _size) = read_object_header(reader)?;
    if guid != HEADER_OBJECT_GUID {
        return Err(parse_err("missing header object"));
    }
    let object_count = read_u32_le(reader)?;
    // Reserved1, Reserved2
    reader.seek(SeekFrom::Current(2))?;

    for _ in 0..object_count {
        let (guid, size) = read_object_header(reader)?;
        if size < OBJECT_HEADER_LEN {
            return Err(parse_err("object size smaller than its header"));
        }

        if guid == FILE_PROPERTIES_GUID {
            return read_file_properties(reader);
        }

        let skip = i64::try_from(size - OBJECT_HEADER_LEN)
            .map_err(|_| parse_err("object size out of range"))?;
        reader.seek(SeekFrom::Current(skip))?;
    }

    Err(parse_err("no file properties object"))
}

fn read_file_properties<R: Read + Seek>(reader: &mut R) -> Result<Duration, ProbeError> {
    // File ID, File Size, Creation Date, Data Packets Count
    reader.seek(SeekFrom::Current(16 + 8 + 8 + 8))?;
    let play_duration = read_u64_le(reader)?;
    let _send_duration = read_u64_le(reader)?;
    let preroll_ms = read_u64_le(reader)?;

    let secs = play_duration as f64 / 10_000_000.0 - preroll_ms as f64 / 1000.0;
    duration_from_secs(secs, "ASF")
}

fn read_object_header<R: Read>(reader: &mut R) -> Result<([u8; 16], u64), ProbeError> {
    let mut guid = [0u8; 16];
    reader.read_exact(&mut guid)?;
    let size = read_u64_le(reader)?;
    Ok((guid, size))
}

fn parse_err(msg: &str) -> ProbeError {
    ProbeError::ContainerParse(format!("ASF parse error: {}", msg))
}
