//! Tests for legal session-start enumeration inside a block.

use chrono::NaiveDate;
use grid_engine::blocks::{extract_blocks, legal_start_times, slot_offer, AvailabilityBlock};
use grid_engine::builder::{build_day, DayInputs, Viewer};
use grid_engine::time::TimeOfDay;
use grid_engine::types::{AvailabilityWindow, Booking, SessionSettings, StudentId};

fn t(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

// ── Contract examples ───────────────────────────────────────────────────────

#[test]
fn aligned_block_offers_every_fitting_buffer_tick() {
    // 09:00-10:00, 30-minute session, 15-minute buffer.
    // 09:45 + 30 = 10:15 would overrun, so it is excluded.
    let starts = legal_start_times(t(9, 0), t(10, 0), 30, 15);
    assert_eq!(starts, vec![t(9, 0), t(9, 15), t(9, 30)]);
}

#[test]
fn unaligned_block_start_rounds_up_first() {
    // 09:05 rounds up to 09:15 before enumeration begins.
    let starts = legal_start_times(t(9, 5), t(10, 0), 30, 15);
    assert_eq!(starts, vec![t(9, 15), t(9, 30)]);
}

#[test]
fn session_longer_than_block_offers_nothing() {
    // No capacity is a normal outcome, not an error.
    assert!(legal_start_times(t(9, 0), t(10, 0), 90, 15).is_empty());
    assert!(legal_start_times(t(9, 0), t(9, 15), 30, 15).is_empty());
}

#[test]
fn session_exactly_filling_the_block_is_offered() {
    let starts = legal_start_times(t(9, 0), t(10, 0), 60, 15);
    assert_eq!(starts, vec![t(9, 0)]);
}

#[test]
fn degenerate_settings_offer_nothing() {
    assert!(legal_start_times(t(9, 0), t(17, 0), 0, 15).is_empty());
    assert!(legal_start_times(t(9, 0), t(17, 0), 60, 0).is_empty());
}

#[test]
fn block_reaching_end_of_day_terminates() {
    let starts = legal_start_times(t(23, 0), TimeOfDay::END_OF_DAY, 30, 15);
    assert_eq!(starts, vec![t(23, 0), t(23, 15), t(23, 30)]);
}

#[test]
fn wide_buffer_thins_the_offers() {
    let starts = legal_start_times(t(9, 0), t(12, 0), 60, 45);
    assert_eq!(starts, vec![t(9, 0), t(9, 45), t(10, 30)]);
}

#[test]
fn repeated_calls_are_identical() {
    let first = legal_start_times(t(9, 5), t(12, 0), 45, 15);
    let second = legal_start_times(t(9, 5), t(12, 0), 45, 15);
    assert_eq!(first, second);
}

// ── slot_offer ──────────────────────────────────────────────────────────────

#[test]
fn slot_offer_packages_block_and_settings() {
    let block = AvailabilityBlock {
        date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        start: t(10, 0),
        end: t(11, 0),
    };
    let settings = SessionSettings {
        default_session_minutes: 30,
        buffer_minutes: 15,
    };
    let offer = slot_offer(&block, &settings);
    assert_eq!(offer.date, block.date);
    assert_eq!(offer.block_start, t(10, 0));
    assert_eq!(offer.block_end, t(11, 0));
    assert_eq!(offer.legal_starts, vec![t(10, 0), t(10, 15), t(10, 30)]);
}

// ── End to end ──────────────────────────────────────────────────────────────

#[test]
fn window_with_booking_end_to_end() {
    // Availability 09:00-11:00, booking 09:30-10:00 by another student,
    // buffer 15, session 30. Blocks: 09:00-09:30 and 10:00-11:00; legal
    // starts ["09:00"] and ["10:00", "10:15", "10:30"].
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
            id: None,
            student_name: None,
        }],
    };
    let day = build_day(
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        &inputs,
        Viewer::Student(StudentId(1)),
    )
    .unwrap();
    let settings = SessionSettings {
        default_session_minutes: 30,
        buffer_minutes: 15,
    };

    let blocks = extract_blocks(&day);
    assert_eq!(blocks.len(), 2);

    let first = slot_offer(&blocks[0], &settings);
    assert_eq!(first.legal_starts, vec![t(9, 0)]);

    let second = slot_offer(&blocks[1], &settings);
    assert_eq!(second.legal_starts, vec![t(10, 0), t(10, 15), t(10, 30)]);
}
