//! Wire contract of the tutoring backend's scheduling endpoints.
//!
//! Field names and formats here are the backend's, not ours; changing one
//! breaks the integration. Dates are ISO `YYYY-MM-DD`, times are `"HH:MM"`.

use chrono::{NaiveDate, Weekday};
use grid_engine::time::TimeOfDay;
use grid_engine::types::{BookingId, StudentId, WeekGrid};
use serde::{Deserialize, Serialize};

/// Response envelope of the weekly-slots endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeekResponse {
    pub week: WeekGrid,
}

/// The one mutating request the scheduling core issues: book a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub student_id: StudentId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    /// The backend materializes the recurring occurrences; this flag is
    /// passed through unchanged.
    pub repeat_weekly: bool,
}

/// Commit verdict reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatus {
    Ok,
    /// Another actor won the slot between offer and commit.
    Conflict,
    Rejected,
}

/// Raw reply of the commit and delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitReply {
    pub status: CommitStatus,
    #[serde(default)]
    pub message: String,
}

/// Outcome of a booking attempt as surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Ok { message: String },
    Conflict { message: String },
    Rejected { message: String },
}

impl BookingOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, BookingOutcome::Ok { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            BookingOutcome::Ok { message }
            | BookingOutcome::Conflict { message }
            | BookingOutcome::Rejected { message } => message,
        }
    }
}

impl From<CommitReply> for BookingOutcome {
    fn from(reply: CommitReply) -> Self {
        match reply.status {
            CommitStatus::Ok => BookingOutcome::Ok {
                message: reply.message,
            },
            CommitStatus::Conflict => BookingOutcome::Conflict {
                message: reply.message,
            },
            CommitStatus::Rejected => BookingOutcome::Rejected {
                message: reply.message,
            },
        }
    }
}

/// Delete payload; the booking id is all the backend wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBookingRequest {
    pub booking_id: BookingId,
}

/// A recurring availability window to add, pinned to a weekday.
///
/// The wire `weekday` is Sunday-zero, as the calendar columns are numbered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddAvailabilityRequest {
    pub weekday: u8,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl AddAvailabilityRequest {
    pub fn new(weekday: Weekday, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        AddAvailabilityRequest {
            weekday: weekday.num_days_from_sunday() as u8,
            start_time,
            end_time,
        }
    }
}

/// Reply of the endpoints that create a backend row (availability windows,
/// blocked days): the created row's id, used later to remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedReply {
    pub id: i64,
}

/// Removal payload for availability windows and blocked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveByIdRequest {
    pub id: i64,
}

/// Block out one calendar date entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDayRequest {
    pub date: NaiveDate,
}
