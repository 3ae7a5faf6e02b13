use serde::{Deserialize, Serialize};
use std::fmt;

/// A minute count. Used both as a span and as a time of day
/// (minutes since midnight); hours are not bounded to 23.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(u32);

/// A time of day has the same shape as a duration.
pub type ClockTime = Duration;

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub const fn from_minutes(minutes: u32) -> Self {
        Duration(minutes)
    }

    /// Build from an `hours:minutes` pair. Minutes are added as-is,
    /// so `from_hm(1, 75)` is `2:15`. Saturates instead of overflowing.
    pub fn from_hm(hours: u32, minutes: u32) -> Self {
        Duration(hours.saturating_mul(60).saturating_add(minutes))
    }

    pub const fn total_minutes(self) -> u32 {
        self.0
    }

    pub const fn hours(self) -> u32 {
        self.0 / 60
    }

    pub const fn minutes(self) -> u32 {
        self.0 % 60
    }

    /// Difference clamped at zero.
    pub fn saturating_sub(self, other: Duration) -> Duration {
        Duration(self.0.saturating_sub(other.0))
    }

    pub fn saturating_add(self, other: Duration) -> Duration {
        Duration(self.0.saturating_add(other.0))
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Duration {
    /// `H:MM`: hours unpadded, minutes always two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}
