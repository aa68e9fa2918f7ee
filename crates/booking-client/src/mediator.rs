//! The booking mediator: owns the displayed week, validates booking
//! candidates against it, and reconciles after every mutation.
//!
//! Consistency strategy: after any successful mutation (and after a commit
//! conflict) the whole affected week is re-fetched. The grid is never
//! patched locally -- other actors (other students, recurring-booking
//! expansion) create bookings the client cannot predict, so the backend is
//! always re-queried as the source of truth. A fetch that fails, or that
//! answers for a week no longer displayed, leaves the previous grid intact.

use chrono::NaiveDate;
use grid_engine::blocks::{extract_blocks, slot_offer, AvailabilityBlock, SlotOffer};
use grid_engine::time::TimeOfDay;
use grid_engine::types::{
    sunday_start, BookingId, SessionSettings, StudentId, TutorId, WeekGrid,
};

use crate::api::{
    AddAvailabilityRequest, BookingOutcome, BookingRequest, CommitStatus,
};
use crate::error::{ClientError, Result};
use crate::transport::ScheduleTransport;

pub struct BookingMediator<T> {
    transport: T,
    tutor: TutorId,
    settings: Option<SessionSettings>,
    /// The last successfully fetched grid; replaced whole, never patched.
    week: Option<WeekGrid>,
    /// Staleness key: the Sunday of the week the caller currently wants.
    requested_week: Option<NaiveDate>,
    /// Student scope of the displayed week, reused on refresh.
    view_student: Option<StudentId>,
}

impl<T: ScheduleTransport> BookingMediator<T> {
    pub fn new(transport: T, tutor: TutorId) -> Self {
        BookingMediator {
            transport,
            tutor,
            settings: None,
            week: None,
            requested_week: None,
            view_student: None,
        }
    }

    /// The currently displayed grid, if any fetch has succeeded.
    pub fn week(&self) -> Option<&WeekGrid> {
        self.week.as_ref()
    }

    pub fn settings(&self) -> Option<&SessionSettings> {
        self.settings.as_ref()
    }

    /// Fetch and cache the tutor's session settings. Required before any
    /// slot computation.
    pub async fn load_settings(&mut self) -> Result<SessionSettings> {
        let settings = self.transport.session_settings(self.tutor).await?;
        self.settings = Some(settings);
        Ok(settings)
    }

    /// Fetch the week containing `week_start` and make it the displayed
    /// grid. The date is snapped back to its Sunday.
    ///
    /// A response that no longer matches the requested week -- either
    /// because the caller has since asked for a different week, or because
    /// the payload itself is for the wrong week -- is discarded with
    /// [`ClientError::StaleWeek`]; the previous grid stays displayed. Any
    /// transport failure likewise leaves the grid intact.
    pub async fn load_week(
        &mut self,
        week_start: NaiveDate,
        student: Option<StudentId>,
    ) -> Result<&WeekGrid> {
        let sunday = sunday_start(week_start);
        self.requested_week = Some(sunday);
        self.view_student = student;

        let grid = self
            .transport
            .fetch_week(self.tutor, sunday, student)
            .await?;

        if self.requested_week != Some(sunday) {
            tracing::warn!(%sunday, "week changed while fetching; response discarded");
            return Err(ClientError::StaleWeek {
                requested: self.requested_week.unwrap_or(sunday),
                received: sunday,
            });
        }
        if grid.week_start() != sunday {
            tracing::warn!(
                requested = %sunday,
                received = %grid.week_start(),
                "backend answered for the wrong week; response discarded"
            );
            return Err(ClientError::StaleWeek {
                requested: sunday,
                received: grid.week_start(),
            });
        }

        Ok(&*self.week.insert(grid))
    }

    /// Re-fetch the currently displayed week, if there is one.
    pub async fn refresh(&mut self) -> Result<()> {
        if let Some(week) = self.requested_week {
            self.load_week(week, self.view_student).await?;
        }
        Ok(())
    }

    /// Compute the offerable starts for a block under the loaded settings.
    ///
    /// # Errors
    ///
    /// [`ClientError::SettingsUnavailable`] when settings have not been
    /// fetched -- callers must show an explicit "settings unavailable"
    /// state, never guess defaults.
    pub fn slot_offer(&self, block: &AvailabilityBlock) -> Result<SlotOffer> {
        let settings = self.settings.ok_or(ClientError::SettingsUnavailable)?;
        Ok(slot_offer(block, &settings))
    }

    /// Submit a booking.
    ///
    /// Advisory pre-check: when the request's date falls inside the
    /// displayed week, the chosen time must be one of the legal starts
    /// currently offerable on that day; otherwise the request is rejected
    /// locally without contacting the backend. This is a UX guard only --
    /// the backend performs the authoritative check, and a concurrent
    /// booker winning the slot comes back as a `Conflict` outcome.
    ///
    /// On `Ok` and on `Conflict` the affected week is re-fetched so the
    /// grid reflects reality. A refresh failure after a successful commit
    /// is logged, not returned: the booking did happen.
    pub async fn request_booking(&mut self, request: BookingRequest) -> Result<BookingOutcome> {
        if !self.is_locally_plausible(request.date, request.time) {
            tracing::debug!(date = %request.date, time = %request.time,
                "booking request rejected before commit; start not offered");
            return Ok(BookingOutcome::Rejected {
                message: "That start time is no longer offered. Pick another slot.".to_string(),
            });
        }

        let reply = self.transport.commit_booking(self.tutor, &request).await?;
        let outcome = BookingOutcome::from(reply);
        match &outcome {
            BookingOutcome::Ok { .. } | BookingOutcome::Conflict { .. } => {
                if let Err(err) = self.refresh().await {
                    tracing::warn!(%err, "week refresh after booking failed; grid left as-is");
                }
            }
            BookingOutcome::Rejected { .. } => {}
        }
        Ok(outcome)
    }

    /// True unless the displayed grid can prove the candidate start is not
    /// currently offered. Dates outside the displayed week (or with no grid
    /// or settings loaded) pass through to the backend's check.
    fn is_locally_plausible(&self, date: NaiveDate, time: TimeOfDay) -> bool {
        let (Some(week), Some(settings)) = (&self.week, &self.settings) else {
            return true;
        };
        let Some(day) = week.day(date) else {
            return true;
        };
        extract_blocks(day)
            .iter()
            .any(|block| slot_offer(block, settings).legal_starts.contains(&time))
    }

    /// Delete a booking. Any non-success -- transport failure or a backend
    /// refusal -- maps to one generic failure; the week is re-fetched
    /// either way so the grid reflects whatever actually happened.
    pub async fn delete_booking(&mut self, booking: BookingId) -> Result<()> {
        let result = self.transport.delete_booking(self.tutor, booking).await;
        let deleted = matches!(&result, Ok(reply) if reply.status == CommitStatus::Ok);

        if let Err(err) = self.refresh().await {
            tracing::warn!(%err, "week refresh after delete failed; grid left as-is");
        }
        if deleted {
            Ok(())
        } else {
            if let Err(err) = result {
                tracing::warn!(%err, "delete booking failed");
            }
            Err(ClientError::DeleteFailed)
        }
    }

    /// Add a recurring availability window and re-fetch the displayed week.
    pub async fn add_availability(&mut self, request: AddAvailabilityRequest) -> Result<i64> {
        let id = self.transport.add_availability(self.tutor, &request).await?;
        self.refresh().await?;
        Ok(id)
    }

    /// Remove a recurring availability window and re-fetch.
    pub async fn remove_availability(&mut self, id: i64) -> Result<()> {
        self.transport.remove_availability(self.tutor, id).await?;
        self.refresh().await
    }

    /// Block out a whole date and re-fetch.
    pub async fn block_day(&mut self, date: NaiveDate) -> Result<i64> {
        let id = self.transport.block_day(self.tutor, date).await?;
        self.refresh().await?;
        Ok(id)
    }

    /// Unblock a previously blocked date and re-fetch.
    pub async fn unblock_day(&mut self, id: i64) -> Result<()> {
        self.transport.unblock_day(self.tutor, id).await?;
        self.refresh().await
    }
}
