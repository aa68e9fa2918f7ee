//! Error types for grid construction.

use chrono::NaiveDate;
use thiserror::Error;

use crate::time::TimeOfDay;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid time of day: {0:?}")]
    InvalidTime(String),

    #[error("invalid availability window: end {end} is not after start {start}")]
    WindowOrder { start: TimeOfDay, end: TimeOfDay },

    #[error("invalid booking: end {end} is not after start {start}")]
    BookingOrder { start: TimeOfDay, end: TimeOfDay },

    #[error("granularity of {0} minutes does not divide a day evenly")]
    Granularity(u16),

    #[error("a week holds exactly 7 days, got {0}")]
    WeekLength(usize),

    #[error("week starts on {0}, which is not a Sunday")]
    WeekStart(NaiveDate),

    #[error("day {found} is out of sequence, expected {expected}")]
    DayOutOfSequence { expected: NaiveDate, found: NaiveDate },
}

/// Convenience alias used throughout grid-engine.
pub type Result<T> = std::result::Result<T, GridError>;
