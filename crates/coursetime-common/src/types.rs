//! Duration type used for every course total.
//!
//! Report arithmetic happens in decimal hours, so [`Hours`] wraps an `f64`
//! rather than `std::time::Duration`: totals are summed, subtracted and
//! divided, and the report format truncates to whole minutes.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::time::Duration;

/// Playback time in decimal hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Hours(f64);

impl Hours {
    /// Zero hours.
    pub const ZERO: Hours = Hours(0.0);

    /// Create from decimal hours.
    pub fn new(hours: f64) -> Self {
        Self(hours)
    }

    /// Create from a runtime in seconds.
    pub fn from_secs_f64(seconds: f64) -> Self {
        Self(seconds / 3600.0)
    }

    /// Value in decimal hours.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Whether this is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<Duration> for Hours {
    fn from(duration: Duration) -> Self {
        Self::from_secs_f64(duration.as_secs_f64())
    }
}

impl Add for Hours {
    type Output = Hours;

    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl AddAssign for Hours {
    fn add_assign(&mut self, rhs: Hours) {
        self.0 += rhs.0;
    }
}

impl Sub for Hours {
    type Output = Hours;

    fn sub(self, rhs: Hours) -> Hours {
        Hours(self.0 - rhs.0)
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Hours>>(iter: I) -> Hours {
        iter.fold(Hours::ZERO, Add::add)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

/// Format decimal hours as `HHh MMm`, truncating to whole minutes.
///
/// Hours are zero-padded to two digits but may grow wider. Negative input
/// (subtraction residue) renders as zero.
///
/// ```
/// use coursetime_common::format_duration;
///
/// assert_eq!(format_duration(1.5), "01h 30m");
/// assert_eq!(format_duration(0.0), "00h 00m");
/// assert_eq!(format_duration(125.25), "125h 15m");
/// ```
pub fn format_duration(hours: f64) -> String {
    let total_minutes = hours.max(0.0) * 60.0;
    let whole_hours = (total_minutes / 60.0).floor() as u64;
    let minutes = (total_minutes % 60.0).floor() as u64;
    format!("{:02}h {:02}m", whole_hours, minutes)
}
