//! Time of day as shown by the clock, and the wall-clock source it reads
//! while live.

use core::fmt;

use thiserror_no_std::Error;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Errors raised when constructing a [`TimeOfDay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Hour out of range: {0} (expected 0..=23)")]
    Hour(u8),

    #[error("Minute out of range: {0} (expected 0..=59)")]
    Minute(u8),

    #[error("Second out of range: {0} (expected 0..=59)")]
    Second(u8),
}

/// Result type for time construction
pub type TimeResult<T> = Result<T, TimeError>;

/// Hour, minute and second of a 24-hour day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub fn new(hour: u8, minute: u8, second: u8) -> TimeResult<Self> {
        if hour > 23 {
            return Err(TimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeError::Minute(minute));
        }
        if second > 59 {
            return Err(TimeError::Second(second));
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Seconds since midnight, wrapped into a single day.
    pub fn from_seconds_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY as u32;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    /// Local time of day for a Unix timestamp shifted by a UTC offset.
    pub fn from_unix_timestamp(timestamp: u64, utc_offset_minutes: i32) -> Self {
        let local = timestamp as i64 + i64::from(utc_offset_minutes) * 60;
        Self::from_seconds_of_day(local.rem_euclid(SECONDS_PER_DAY) as u32)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Source of the current wall-clock time, as seconds since the Unix epoch.
///
/// Any `Fn() -> u64` closure works, which is how hosts usually plug in their
/// RTC or system clock.
pub trait WallClock {
    fn unix_time(&self) -> u64;
}

impl<F> WallClock for F
where
    F: Fn() -> u64,
{
    fn unix_time(&self) -> u64 {
        self()
    }
}
