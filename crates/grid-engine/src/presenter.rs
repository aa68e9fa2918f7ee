//! Calendar presenter contract -- maps segments to display cells and user
//! gestures to events.
//!
//! The presenter performs no scheduling math of its own: a click on an
//! available segment is resolved to its enclosing block with the same
//! run-boundary scan the extractor uses, and everything else is a direct
//! lookup on the clicked segment.

use chrono::{Datelike, Weekday};

use crate::blocks::enclosing_block;
use crate::time::TimeOfDay;
use crate::types::{BookingId, DayGrid, Segment, SegmentState};

/// Which surface is displaying the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMode {
    /// A student browsing a tutor's calendar to book.
    Student,
    /// The tutor editing their recurring availability.
    TutorAvailability,
    /// The tutor reviewing their booked schedule.
    TutorSchedule,
    Readonly,
}

/// Exactly one event per user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    SelectSlot {
        date: chrono::NaiveDate,
        block_start: TimeOfDay,
        block_end: TimeOfDay,
    },
    ToggleAvailability {
        weekday: Weekday,
        time: TimeOfDay,
    },
    SelectBooking(BookingId),
    DeleteBooking(BookingId),
}

/// Display color for a segment state.
pub fn segment_color(state: SegmentState) -> &'static str {
    match state {
        SegmentState::Available => "#FFFFFF",
        SegmentState::Blocked => "#555555",
        SegmentState::BookedOther => "#B3D7FF",
        SegmentState::BookedSelf => "#C7A0FF",
        SegmentState::Outside => "#EEEEEE",
    }
}

/// Resolve a click on `day.segments[segment_index]` to at most one event.
///
/// Students selecting an available segment get the whole enclosing block;
/// the tutor's availability editor gets the raw tick to toggle; the tutor's
/// schedule view selects the clicked booking. Readonly swallows everything.
pub fn resolve_click(day: &DayGrid, segment_index: usize, mode: CalendarMode) -> Option<GridEvent> {
    let segment = day.segments.get(segment_index)?;
    match mode {
        CalendarMode::Student => {
            let block = enclosing_block(day, segment_index)?;
            Some(GridEvent::SelectSlot {
                date: day.date,
                block_start: block.start,
                block_end: block.end,
            })
        }
        CalendarMode::TutorAvailability => Some(GridEvent::ToggleAvailability {
            weekday: day.date.weekday(),
            time: segment.time,
        }),
        CalendarMode::TutorSchedule => segment.booking_id.map(GridEvent::SelectBooking),
        CalendarMode::Readonly => None,
    }
}

/// The booking a delete affordance should target, when one applies: the
/// tutor may delete any booking from the schedule view, a student only
/// their own.
pub fn deletable_booking(segment: &Segment, mode: CalendarMode) -> Option<BookingId> {
    if !segment.state.is_booked() {
        return None;
    }
    match mode {
        CalendarMode::TutorSchedule => segment.booking_id,
        _ if segment.state == SegmentState::BookedSelf => segment.booking_id,
        _ => None,
    }
}

/// Runs shorter than this get no caption; the cell is too small to label.
const MIN_LABEL_MINUTES: i32 = 30;

/// The "Available: HH:MM-HH:MM" caption for the segment opening a block,
/// `None` everywhere else.
pub fn block_label(day: &DayGrid, segment_index: usize) -> Option<String> {
    let segment = day.segments.get(segment_index)?;
    let block = enclosing_block(day, segment_index)?;
    if block.start != segment.time {
        return None;
    }
    if block.start.minutes_until(block.end) < MIN_LABEL_MINUTES {
        return None;
    }
    Some(format!("Available: {}-{}", block.start, block.end))
}
