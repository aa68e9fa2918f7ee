//! Shared value types for the weekly scheduling grid.
//!
//! The grid is immutable once built: a fetch or rebuild produces a fresh
//! `WeekGrid` that fully replaces the previous one. Every structural
//! invariant (seven days, contiguous dates, Sunday start) is enforced at
//! construction so downstream code can scan segments without re-checking.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::time::{TimeOfDay, MINUTES_PER_DAY};

/// A student's opaque backend identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

/// A tutor's opaque backend identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TutorId(pub i64);

/// A booking's opaque backend identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub i64);

/// The display state of one grid segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentState {
    /// Inside an availability window and not booked.
    Available,
    /// The whole day is blocked off, whatever else was scheduled.
    Blocked,
    /// Booked by the viewing student.
    BookedSelf,
    /// Booked by somebody else.
    BookedOther,
    /// Outside the tutor's working hours.
    Outside,
}

impl SegmentState {
    pub fn is_available(self) -> bool {
        self == SegmentState::Available
    }

    pub fn is_booked(self) -> bool {
        matches!(self, SegmentState::BookedSelf | SegmentState::BookedOther)
    }
}

/// One fixed-width slice of a single day.
///
/// Segments for a day come in strictly increasing time order with uniform,
/// non-overlapping width and no gaps. `booking_id` and `student_name` are
/// present only on booked segments; the name additionally only when the
/// viewer is allowed to see the occupant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub time: TimeOfDay,
    #[serde(rename = "type")]
    pub state: SegmentState,
    #[serde(
        rename = "bookingId",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub booking_id: Option<BookingId>,
    #[serde(
        rename = "studentName",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub student_name: Option<String>,
}

/// A raw availability window, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl AvailabilityWindow {
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }
}

/// An existing session booking on one day, half-open `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub student: StudentId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<BookingId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub student_name: Option<String>,
}

impl Booking {
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }
}

/// One calendar day's ordered segment sequence.
///
/// The backend's day payload carries extra bookkeeping fields alongside
/// `date` and `segments`; they are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGrid {
    pub date: NaiveDate,
    pub segments: Vec<Segment>,
}

impl DayGrid {
    /// Uniform segment width in minutes, derived from the first two
    /// segments. A single-segment day spans the whole day; an empty day
    /// has zero width.
    pub fn segment_width(&self) -> u16 {
        match self.segments.as_slice() {
            [] => 0,
            [_] => MINUTES_PER_DAY,
            [first, second, ..] => second.time.minutes() - first.time.minutes(),
        }
    }

    /// Index of the segment whose slice contains `t`, if any.
    pub fn segment_index_at(&self, t: TimeOfDay) -> Option<usize> {
        let width = self.segment_width();
        if width == 0 {
            return None;
        }
        self.segments.iter().position(|seg| {
            seg.time <= t
                && seg
                    .time
                    .checked_add_minutes(width)
                    .is_some_and(|end| t < end)
        })
    }
}

/// Seven days, Sunday-first, identified by the Sunday date.
///
/// Serialized as a bare 7-element array; the invariants are re-checked when
/// a payload is deserialized, so a malformed week from the backend is a
/// decode error rather than a silently crooked grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DayGrid>", into = "Vec<DayGrid>")]
pub struct WeekGrid {
    days: Vec<DayGrid>,
}

impl WeekGrid {
    /// Validates: exactly 7 days, `days[0]` a Sunday, each subsequent date
    /// exactly one day after the previous.
    pub fn new(days: Vec<DayGrid>) -> Result<Self> {
        if days.len() != 7 {
            return Err(GridError::WeekLength(days.len()));
        }
        let start = days[0].date;
        if start.weekday() != Weekday::Sun {
            return Err(GridError::WeekStart(start));
        }
        for (i, day) in days.iter().enumerate() {
            let expected = start + Days::new(i as u64);
            if day.date != expected {
                return Err(GridError::DayOutOfSequence {
                    expected,
                    found: day.date,
                });
            }
        }
        Ok(WeekGrid { days })
    }

    /// The Sunday that identifies this week.
    pub fn week_start(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn days(&self) -> &[DayGrid] {
        &self.days
    }

    /// The day grid for `date`, if it falls inside this week.
    pub fn day(&self, date: NaiveDate) -> Option<&DayGrid> {
        self.days.iter().find(|d| d.date == date)
    }
}

impl TryFrom<Vec<DayGrid>> for WeekGrid {
    type Error = GridError;

    fn try_from(days: Vec<DayGrid>) -> Result<Self> {
        WeekGrid::new(days)
    }
}

impl From<WeekGrid> for Vec<DayGrid> {
    fn from(week: WeekGrid) -> Self {
        week.days
    }
}

/// Tutor-level booking configuration, fetched, never computed. Slot
/// extraction must not run without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub default_session_minutes: u16,
    pub buffer_minutes: u16,
}

/// The Sunday on or before `date`.
pub fn sunday_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday();
    date - Days::new(u64::from(back))
}
