//! Path utilities for detecting course video files by extension.
//!
//! Only the containers a course folder is expected to hold are recognised.
//! Everything else (subtitles, slides, archives) is skipped by the scanner.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv"];

/// Check if a path's file name ends in a video file extension.
///
/// The match is a case-insensitive suffix test on the file name, so a file
/// named just `.mp4` still counts.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use coursetime_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("01 - Intro.mkv")));
/// assert!(is_video_file(Path::new("/course/02 - Setup/lecture.MP4")));
/// assert!(!is_video_file(Path::new("slides.pdf")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    VIDEO_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

/// Final path segment of `path` as a display string.
///
/// Falls back to the whole path when there is no final segment (e.g. `/` or `..`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
