//! Section classification.
//!
//! A section is an immediate subfolder of the course root. Its name decides
//! how its runtime counts:
//!
//! - `"[Done] ..."`: finished; counts toward both done and total time
//! - leading digits (`"03 - Topic"`): pending; counts toward total time
//! - anything else (`"Extras"`): ignored in the totals
//!
//! Both tests run against the raw folder name, so `"[Done] 02 - Setup"` is done
//! but not counted (it starts with `[`), and `"[Done]02 - Setup"` matches
//! neither rule.

use coursetime_common::Hours;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Literal marker for a finished section.
pub const DONE_PREFIX: &str = "[Done] ";

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("static pattern is valid"));

static FIRST_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("static pattern is valid"));

/// How a section name feeds the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    /// Name starts with [`DONE_PREFIX`].
    pub is_done: bool,
    /// Name starts with one or more decimal digits.
    pub is_counted: bool,
}

impl Classification {
    /// Classify a section folder name.
    pub fn of(name: &str) -> Self {
        Self {
            is_done: name.starts_with(DONE_PREFIX),
            is_counted: LEADING_DIGITS.is_match(name),
        }
    }

    /// Whether the section's duration feeds the course total.
    pub fn contributes(&self) -> bool {
        self.is_done || self.is_counted
    }
}

/// One course section and its summed runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Folder name (final path segment).
    pub name: String,
    /// Full path to the folder.
    pub path: PathBuf,
    /// Name starts with `"[Done] "`.
    pub is_done: bool,
    /// Name starts with a digit.
    pub is_counted: bool,
    /// Runtime of every video beneath the folder.
    pub duration: Hours,
    /// Video files found beneath the folder.
    pub video_count: usize,
    /// Video files whose duration could not be read.
    pub failed_count: usize,
}

impl Section {
    /// Create a section, classifying it by name.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P, duration: Hours) -> Self {
        let name = name.into();
        let Classification {
            is_done,
            is_counted,
        } = Classification::of(&name);
        Self {
            name,
            path: path.into(),
            is_done,
            is_counted,
            duration,
            video_count: 0,
            failed_count: 0,
        }
    }

    /// Classification flags as a value.
    pub fn classification(&self) -> Classification {
        Classification {
            is_done: self.is_done,
            is_counted: self.is_counted,
        }
    }

    /// Summary line shown in the per-section breakdown.
    pub fn summary_line(&self) -> String {
        format!("Section duration: {}: {}", self.name, self.duration)
    }
}

/// Sort key for a summary line: its first run of decimal digits, or 0.
///
/// Runs too long for a `u64` sort last.
pub fn section_number(line: &str) -> u64 {
    FIRST_DIGIT_RUN
        .find(line)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_done() {
        let c = Classification::of("[Done] 03 - Topic");
        assert!(c.is_done);
        assert!(!c.is_counted);
        assert!(c.contributes());
    }

    #[test]
    fn test_classify_counted() {
        let c = Classification::of("03 - Topic");
        assert!(!c.is_done);
        assert!(c.is_counted);
        assert!(c.contributes());
    }

    #[test]
    fn test_classify_ignored() {
        let c = Classification::of("Extras");
        assert_eq!(c, Classification::default());
        assert!(!c.contributes());
    }

    #[test]
    fn test_classify_done_without_space() {
        // Neither the marker nor a leading digit
        let c = Classification::of("[Done]02 - X");
        assert!(!c.contributes());
    }

    #[test]
    fn test_classify_lowercase_marker() {
        assert!(!Classification::of("[done] 01 - A").is_done);
    }

    #[test]
    fn test_section_new_classifies() {
        let section = Section::new("07 - Traits", "/course/07 - Traits", Hours::new(1.25));
        assert!(section.is_counted);
        assert!(!section.is_done);
        assert_eq!(section.classification(), Classification::of("07 - Traits"));
        assert_eq!(
            section.summary_line(),
            "Section duration: 07 - Traits: 01h 15m"
        );
    }

    #[test]
    fn test_section_number() {
        assert_eq!(section_number("Section duration: 10 - X: 01h 00m"), 10);
        assert_eq!(section_number("Section duration: [Done] 02 - Y: 00h 30m"), 2);
        // Falls through to the duration when the name has no digits
        assert_eq!(section_number("Section duration: Extras: 03h 15m"), 3);
        assert_eq!(section_number("no digits at all"), 0);
        assert_eq!(section_number("99999999999999999999999 - huge"), u64::MAX);
    }
}
