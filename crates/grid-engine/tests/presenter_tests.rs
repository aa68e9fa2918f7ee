//! Tests for the presenter contract: cell colors, gesture resolution, and
//! the delete affordance.

use chrono::{NaiveDate, Weekday};
use grid_engine::builder::{build_day, DayInputs, Viewer};
use grid_engine::presenter::{
    block_label, deletable_booking, resolve_click, segment_color, CalendarMode, GridEvent,
};
use grid_engine::time::TimeOfDay;
use grid_engine::types::{
    AvailabilityWindow, Booking, BookingId, DayGrid, Segment, SegmentState, StudentId,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

/// A Monday with availability 09:00-11:00 and a 09:30-10:00 booking by
/// student 2, viewed by student 1.
fn sample_day() -> DayGrid {
    let inputs = DayInputs {
        windows: vec![AvailabilityWindow {
            start: t(9, 0),
            end: t(11, 0),
        }],
        blocked: false,
        bookings: vec![Booking {
            start: t(9, 30),
            end: t(10, 0),
            student: StudentId(2),
            id: Some(BookingId(42)),
            student_name: Some("Sam".into()),
        }],
    };
    build_day(
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        &inputs,
        Viewer::Student(StudentId(1)),
    )
    .unwrap()
}

const IDX_0900: usize = 36;
const IDX_0930: usize = 38;
const IDX_1015: usize = 41;

// ── Colors ──────────────────────────────────────────────────────────────────

#[test]
fn each_state_has_its_cell_color() {
    assert_eq!(segment_color(SegmentState::Available), "#FFFFFF");
    assert_eq!(segment_color(SegmentState::Blocked), "#555555");
    assert_eq!(segment_color(SegmentState::BookedOther), "#B3D7FF");
    assert_eq!(segment_color(SegmentState::BookedSelf), "#C7A0FF");
    assert_eq!(segment_color(SegmentState::Outside), "#EEEEEE");
}

// ── Click resolution ────────────────────────────────────────────────────────

#[test]
fn student_click_selects_the_enclosing_block() {
    let day = sample_day();
    // Clicking 10:15 selects the whole 10:00-11:00 run, not the single tick.
    let event = resolve_click(&day, IDX_1015, CalendarMode::Student).unwrap();
    assert_eq!(
        event,
        GridEvent::SelectSlot {
            date: day.date,
            block_start: t(10, 0),
            block_end: t(11, 0),
        }
    );
}

#[test]
fn student_click_off_availability_does_nothing() {
    let day = sample_day();
    assert_eq!(resolve_click(&day, IDX_0930, CalendarMode::Student), None);
    assert_eq!(resolve_click(&day, 0, CalendarMode::Student), None);
}

#[test]
fn availability_editor_gets_the_raw_tick() {
    let day = sample_day();
    let event = resolve_click(&day, IDX_0900, CalendarMode::TutorAvailability).unwrap();
    assert_eq!(
        event,
        GridEvent::ToggleAvailability {
            weekday: Weekday::Mon,
            time: t(9, 0),
        }
    );
}

#[test]
fn schedule_view_selects_the_clicked_booking() {
    let day = sample_day();
    let event = resolve_click(&day, IDX_0930, CalendarMode::TutorSchedule).unwrap();
    assert_eq!(event, GridEvent::SelectBooking(BookingId(42)));
    // An unbooked segment selects nothing.
    assert_eq!(resolve_click(&day, IDX_0900, CalendarMode::TutorSchedule), None);
}

#[test]
fn readonly_swallows_every_gesture() {
    let day = sample_day();
    for index in [IDX_0900, IDX_0930, IDX_1015] {
        assert_eq!(resolve_click(&day, index, CalendarMode::Readonly), None);
    }
}

#[test]
fn out_of_range_click_is_ignored() {
    let day = sample_day();
    assert_eq!(resolve_click(&day, 10_000, CalendarMode::Student), None);
}

// ── Delete affordance ───────────────────────────────────────────────────────

fn booked_segment(state: SegmentState) -> Segment {
    Segment {
        time: t(9, 30),
        state,
        booking_id: Some(BookingId(7)),
        student_name: Some("Sam".into()),
    }
}

#[test]
fn tutor_schedule_may_delete_any_booking() {
    let seg = booked_segment(SegmentState::BookedOther);
    assert_eq!(
        deletable_booking(&seg, CalendarMode::TutorSchedule),
        Some(BookingId(7))
    );
}

#[test]
fn student_may_delete_only_their_own_booking() {
    let own = booked_segment(SegmentState::BookedSelf);
    let other = booked_segment(SegmentState::BookedOther);
    assert_eq!(
        deletable_booking(&own, CalendarMode::Student),
        Some(BookingId(7))
    );
    assert_eq!(deletable_booking(&other, CalendarMode::Student), None);
}

#[test]
fn unbooked_segments_are_never_deletable() {
    let seg = Segment {
        time: t(9, 0),
        state: SegmentState::Available,
        booking_id: None,
        student_name: None,
    };
    assert_eq!(deletable_booking(&seg, CalendarMode::TutorSchedule), None);
}

// ── Block labels ────────────────────────────────────────────────────────────

#[test]
fn label_appears_only_on_the_run_opening_segment() {
    let day = sample_day();
    assert_eq!(
        block_label(&day, IDX_0900).as_deref(),
        Some("Available: 09:00-09:30")
    );
    // 09:15 is inside the run, not its start.
    assert_eq!(block_label(&day, IDX_0900 + 1), None);
    // 10:00 opens the hour-long second run.
    assert_eq!(
        block_label(&day, 40).as_deref(),
        Some("Available: 10:00-11:00")
    );
}

#[test]
fn short_runs_get_no_label() {
    // A lone 15-minute run is too small to caption.
    let inputs = DayInputs {
        windows: vec![AvailabilityWindow {
            start: t(9, 0),
            end: t(9, 15),
        }],
        blocked: false,
        bookings: vec![],
    };
    let day = build_day(
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        &inputs,
        Viewer::Tutor,
    )
    .unwrap();
    assert_eq!(block_label(&day, IDX_0900), None);
}
