//! RIFF AVI container parsing
//!
//! Duration comes from the main AVI header (`avih`): microseconds per frame
//! times total frames. OpenDML files (over 1 GiB) split their frames across
//! several RIFF chunks, and `avih` only counts the first one, so the extended
//! header (`odml`/`dmlh`) total wins when present.

use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

use super::{duration_from_secs, open, read_fourcc, read_u32_le};
use crate::error::ProbeError;

/// Probe the duration of an AVI file
pub fn probe(path: &Path) -> Result<Duration, ProbeError> {
    let file = open(path)?;
    let mut reader = BufReader::new(file);
    probe_reader(&mut reader)
}

/// Probe the duration of AVI data from a seekable reader
pub fn probe_reader<R: Read + Seek>(reader: &mut R) -> Result<Duration, ProbeError> {
    let header = read_headers(reader)?;

    let frames = header.odml_frames.unwrap_or(0).max(header.total_frames);
    let secs = header.micros_per_frame as f64 * frames as f64 / 1_000_000.0;
    duration_from_secs(secs, "AVI")
}

#[derive(Debug, Default)]
struct AviHeader {
    micros_per_frame: u32,
    total_frames: u32,
    odml_frames: Option<u32>,
}

fn parse_err(msg: &str) -> ProbeError {
    ProbeError::ContainerParse(format!("AVI parse error: {}", msg))
}

fn read_headers<R: Read + Seek>(reader: &mut R) -> Result<AviHeader, ProbeError> {
    if &read_fourcc(reader)? != b"RIFF" {
        return Err(parse_err("missing RIFF signature"));
    }
    let _riff_size = read_u32_le(reader)?;
    if &read_fourcc(reader)? != b"AVI " {
        return Err(parse_err("RIFF form is not AVI"));
    }

    // hdrl is normally the first chunk, but tolerate junk before it
    loop {
        let id = read_fourcc(reader).map_err(|_| parse_err("no hdrl list"))?;
        let size = read_u32_le(reader)?;

        if &id == b"LIST" {
            let list_type = read_fourcc(reader)?;
            if &list_type == b"hdrl" {
                return read_hdrl(reader, size.saturating_sub(4));
            }
            skip(reader, size.saturating_sub(4))?;
        } else {
            skip(reader, size)?;
        }
    }
}

fn read_hdrl<R: Read + Seek>(reader: &mut R, len: u32) -> Result<AviHeader, ProbeError> {
    let mut header = None;
    let mut odml_frames = None;
    let mut consumed = 0u32;

    while consumed.saturating_add(8) <= len {
        let id = read_fourcc(reader)?;
        let size = read_u32_le(reader)?;
        consumed = consumed.saturating_add(8).saturating_add(padded(size));

        match &id {
            b"avih" => {
                if size < 20 {
                    return Err(parse_err("avih chunk too small"));
                }
                let micros_per_frame = read_u32_le(reader)?;
                // dwMaxBytesPerSec, dwPaddingGranularity, dwFlags
                skip(reader, 12)?;
                let total_frames = read_u32_le(reader)?;
                header = Some(AviHeader {
                    micros_per_frame,
                    total_frames,
                    odml_frames: None,
                });
                skip(reader, size - 20)?;
            }
            b"LIST" => {
                let list_type = read_fourcc(reader)?;
                if &list_type == b"odml" && size >= 16 {
                    // dmlh chunk header, then dwTotalFrames
                    let dmlh = read_fourcc(reader)?;
                    let _dmlh_size = read_u32_le(reader)?;
                    if &dmlh == b"dmlh" {
                        odml_frames = Some(read_u32_le(reader)?);
                        skip(reader, size - 16)?;
                    } else {
                        skip(reader, size - 12)?;
                    }
                } else {
                    skip(reader, size.saturating_sub(4))?;
                }
            }
            _ => skip(reader, size)?,
        }
    }

    let mut header = header.ok_or_else(|| parse_err("missing avih chunk"))?;
    header.odml_frames = odml_frames;
    Ok(header)
}

/// RIFF chunks are word aligned
fn padded(size: u32) -> u32 {
    size.saturating_add(size & 1)
}

fn skip<R: Seek>(reader: &mut R, size: u32) -> std::io::Result<()> {
    reader.seek(SeekFrom::Current(padded(size) as i64))?;
    Ok(())
}
