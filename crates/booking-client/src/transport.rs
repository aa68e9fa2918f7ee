//! The backend as the mediator sees it: a request-issuing collaborator.
//!
//! The trait is the seam between scheduling logic and plumbing. Production
//! injects the reqwest-backed implementation from [`crate::http`]; tests
//! inject a scripted mock. Authentication (bearer tokens, refresh-on-401)
//! belongs behind this seam too -- the mediator never sees a token.

use async_trait::async_trait;
use chrono::NaiveDate;
use grid_engine::types::{BookingId, SessionSettings, StudentId, TutorId, WeekGrid};

use crate::api::{AddAvailabilityRequest, BookingRequest, CommitReply};
use crate::error::Result;

#[async_trait]
pub trait ScheduleTransport: Send + Sync {
    /// Fetch the week starting at `week_start` (a Sunday). `student` scopes
    /// self/other attribution server-side.
    async fn fetch_week(
        &self,
        tutor: TutorId,
        week_start: NaiveDate,
        student: Option<StudentId>,
    ) -> Result<WeekGrid>;

    /// The tutor's session length and start-time buffer.
    async fn session_settings(&self, tutor: TutorId) -> Result<SessionSettings>;

    /// Ask the backend to check and book; the backend's answer is the
    /// authoritative conflict check.
    async fn commit_booking(&self, tutor: TutorId, request: &BookingRequest)
        -> Result<CommitReply>;

    /// Delete one booking.
    async fn delete_booking(&self, tutor: TutorId, booking: BookingId) -> Result<CommitReply>;

    /// Add a recurring availability window; returns the created row id.
    async fn add_availability(
        &self,
        tutor: TutorId,
        request: &AddAvailabilityRequest,
    ) -> Result<i64>;

    /// Remove a recurring availability window by row id.
    async fn remove_availability(&self, tutor: TutorId, id: i64) -> Result<()>;

    /// Block out a whole date; returns the created row id.
    async fn block_day(&self, tutor: TutorId, date: NaiveDate) -> Result<i64>;

    /// Unblock a previously blocked date by row id.
    async fn unblock_day(&self, tutor: TutorId, id: i64) -> Result<()>;
}
