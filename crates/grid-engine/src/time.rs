//! Minute-granularity wall-clock time within a single day.
//!
//! All scheduling times are tutor-local wall clock, so a day-scoped value
//! type is enough: no timezone, no date. Addition is checked -- an operation
//! that would cross midnight returns `None` instead of wrapping, which keeps
//! "session runs past the end of the day" an explicit case at every call
//! site. The exclusive end-of-day bound (24:00) is representable so a block
//! covering a fully available day has a well-formed end.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GridError;

/// Minutes in a 24-hour day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time at minute granularity, ordered within its day.
///
/// Valid values run from `00:00` through the exclusive bound `24:00`.
/// Serialized as `"HH:MM"` (24-hour, zero-padded); parsing also accepts a
/// trailing seconds field, which the backend's serializer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// The exclusive end-of-day bound, displayed as `24:00`. Only meaningful
    /// as the `end` of an interval; no segment ever starts here.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Build from an hour/minute pair. `24:00` is accepted as the end bound.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, GridError> {
        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(GridError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(TimeOfDay(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Build from minutes since midnight, up to and including `24:00`.
    pub fn from_minutes(minutes: u16) -> Result<Self, GridError> {
        if minutes > MINUTES_PER_DAY {
            return Err(GridError::InvalidTime(format!("{minutes} minutes")));
        }
        Ok(TimeOfDay(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Checked addition. `None` when the result would pass the end of the
    /// day; landing exactly on `24:00` is allowed (an interval may end there).
    pub fn checked_add_minutes(self, minutes: u16) -> Option<TimeOfDay> {
        let sum = self.0.checked_add(minutes)?;
        if sum > MINUTES_PER_DAY {
            return None;
        }
        Some(TimeOfDay(sum))
    }

    /// Round up to the next multiple of `step` minutes counted from midnight;
    /// unchanged if already aligned. `None` for a zero step or when rounding
    /// passes the end of the day.
    pub fn round_up_to_multiple(self, step: u16) -> Option<TimeOfDay> {
        if step == 0 {
            return None;
        }
        let rem = self.0 % step;
        if rem == 0 {
            return Some(self);
        }
        self.checked_add_minutes(step - rem)
    }

    /// Signed minute distance from `self` to `later`.
    pub fn minutes_until(self, later: TimeOfDay) -> i32 {
        i32::from(later.0) - i32::from(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = GridError;

    /// Parses `"HH:MM"`, tolerating a trailing `":SS"` field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidTime(s.to_string());
        let mut parts = s.split(':');
        let hour: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minute: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            let _: u8 = seconds.parse().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        TimeOfDay::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
