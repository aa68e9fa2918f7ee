//! Segment building -- raw availability, blocked days, and bookings in,
//! ordered per-day segment sequences out.
//!
//! Resolution order per tick: a blocked day paints everything `blocked`;
//! otherwise a booking claims the tick (a booking can only exist inside
//! previously available time, so it takes precedence over the window);
//! otherwise an availability window makes it `available`; otherwise
//! `outside`. All interval membership is half-open `[start, end)` -- an
//! interval ending exactly on a tick boundary does not claim that tick.
//!
//! Building is pure and deterministic: identical inputs produce identical
//! segment sequences, and nothing is mutated in place.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{GridError, Result};
use crate::time::{TimeOfDay, MINUTES_PER_DAY};
use crate::types::{
    sunday_start, AvailabilityWindow, Booking, DayGrid, Segment, SegmentState, StudentId, WeekGrid,
};

/// Fixed display granularity of the weekly grid.
pub const GRANULARITY_MINUTES: u16 = 15;

/// Who the grid is being built for. Controls self/other attribution of
/// booked segments and whether occupant names are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// The tutor's own schedule: every occupant name is visible.
    Tutor,
    /// A student browsing a tutor's calendar: their own bookings show as
    /// `booked_self` with their name; everyone else's stay anonymous.
    Student(StudentId),
}

impl Viewer {
    fn sees_occupant_of(self, booking: &Booking) -> bool {
        match self {
            Viewer::Tutor => true,
            Viewer::Student(id) => id == booking.student,
        }
    }

    fn booked_state_for(self, booking: &Booking) -> SegmentState {
        match self {
            Viewer::Student(id) if id == booking.student => SegmentState::BookedSelf,
            _ => SegmentState::BookedOther,
        }
    }
}

/// Raw inputs for a single day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayInputs {
    pub windows: Vec<AvailabilityWindow>,
    pub blocked: bool,
    pub bookings: Vec<Booking>,
}

/// Build the ordered segment sequence for one day.
///
/// One segment per `granularity`-minute tick covering the full 24-hour day.
///
/// # Errors
///
/// Rejects a granularity that does not divide the day evenly (the uniform
/// width invariant would break), and any window or booking with
/// `end <= start`.
pub fn build_day_segments(
    windows: &[AvailabilityWindow],
    blocked: bool,
    bookings: &[Booking],
    viewer: Viewer,
    granularity: u16,
) -> Result<Vec<Segment>> {
    if granularity == 0 || MINUTES_PER_DAY % granularity != 0 {
        return Err(GridError::Granularity(granularity));
    }
    for window in windows {
        if window.end <= window.start {
            return Err(GridError::WindowOrder {
                start: window.start,
                end: window.end,
            });
        }
    }
    for booking in bookings {
        if booking.end <= booking.start {
            return Err(GridError::BookingOrder {
                start: booking.start,
                end: booking.end,
            });
        }
    }

    let mut segments = Vec::with_capacity(usize::from(MINUTES_PER_DAY / granularity));
    let mut minute = 0u16;
    while minute < MINUTES_PER_DAY {
        let time = TimeOfDay::from_minutes(minute)?;
        segments.push(resolve_tick(time, windows, blocked, bookings, viewer));
        minute += granularity;
    }
    Ok(segments)
}

fn resolve_tick(
    time: TimeOfDay,
    windows: &[AvailabilityWindow],
    blocked: bool,
    bookings: &[Booking],
    viewer: Viewer,
) -> Segment {
    if blocked {
        return Segment {
            time,
            state: SegmentState::Blocked,
            booking_id: None,
            student_name: None,
        };
    }
    if let Some(booking) = bookings.iter().find(|b| b.contains(time)) {
        let student_name = if viewer.sees_occupant_of(booking) {
            booking.student_name.clone()
        } else {
            None
        };
        return Segment {
            time,
            state: viewer.booked_state_for(booking),
            booking_id: booking.id,
            student_name,
        };
    }
    let state = if windows.iter().any(|w| w.contains(time)) {
        SegmentState::Available
    } else {
        SegmentState::Outside
    };
    Segment {
        time,
        state,
        booking_id: None,
        student_name: None,
    }
}

/// Build one day's grid at the standard granularity.
pub fn build_day(date: NaiveDate, inputs: &DayInputs, viewer: Viewer) -> Result<DayGrid> {
    let segments = build_day_segments(
        &inputs.windows,
        inputs.blocked,
        &inputs.bookings,
        viewer,
        GRANULARITY_MINUTES,
    )?;
    Ok(DayGrid { date, segments })
}

/// Build a full week from seven per-day inputs, Sunday-first.
///
/// `week_start` is snapped back to its Sunday, so callers may pass any date
/// within the week they want.
pub fn build_week(
    week_start: NaiveDate,
    days: &[DayInputs; 7],
    viewer: Viewer,
) -> Result<WeekGrid> {
    let sunday = sunday_start(week_start);
    let built = days
        .iter()
        .enumerate()
        .map(|(i, inputs)| build_day(sunday + Days::new(i as u64), inputs, viewer))
        .collect::<Result<Vec<_>>>()?;
    WeekGrid::new(built)
}

/// A tutor's recurring weekly schedule: availability windows per weekday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyAvailability {
    windows: [Vec<AvailabilityWindow>; 7],
}

impl WeeklyAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, weekday: Weekday, window: AvailabilityWindow) {
        self.windows[weekday.num_days_from_sunday() as usize].push(window);
    }

    pub fn windows_for(&self, weekday: Weekday) -> &[AvailabilityWindow] {
        &self.windows[weekday.num_days_from_sunday() as usize]
    }
}

/// Materialize the recurring weekly schedule into a concrete week.
///
/// Each day gets the windows of its weekday, the blocked flag when its date
/// is in `blocked_dates`, and whatever bookings exist for that date.
pub fn expand_weekly(
    week_start: NaiveDate,
    weekly: &WeeklyAvailability,
    blocked_dates: &HashSet<NaiveDate>,
    bookings_by_date: &HashMap<NaiveDate, Vec<Booking>>,
    viewer: Viewer,
) -> Result<WeekGrid> {
    let sunday = sunday_start(week_start);
    let built = (0..7)
        .map(|i| {
            let date = sunday + Days::new(i);
            let inputs = DayInputs {
                windows: weekly.windows_for(date.weekday()).to_vec(),
                blocked: blocked_dates.contains(&date),
                bookings: bookings_by_date.get(&date).cloned().unwrap_or_default(),
            };
            build_day(date, &inputs, viewer)
        })
        .collect::<Result<Vec<_>>>()?;
    WeekGrid::new(built)
}

/// Every tick where a full session starting there fits entirely on
/// `available` segments -- the day-level bookable list, distinct from the
/// buffer-aligned offers of a single block.
pub fn bookable_starts(day: &DayGrid, session_minutes: u16) -> Vec<TimeOfDay> {
    let width = day.segment_width();
    if width == 0 || session_minutes == 0 {
        return Vec::new();
    }
    // Number of segments a session covers, counting a partial trailing slice.
    let covered = usize::from(session_minutes.div_ceil(width));
    day.segments
        .iter()
        .enumerate()
        .filter(|&(index, seg)| {
            seg.time.checked_add_minutes(session_minutes).is_some()
                && index + covered <= day.segments.len()
                && day.segments[index..index + covered]
                    .iter()
                    .all(|s| s.state.is_available())
        })
        .map(|(_, seg)| seg.time)
        .collect()
}
