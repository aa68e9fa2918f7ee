//! # grid-engine
//!
//! The scheduling core of a tutoring platform's weekly calendar: recurring
//! availability, blocked days, and existing bookings in; a displayable grid
//! of fixed-width segments, contiguous availability blocks, and legal
//! session-start times out.
//!
//! Everything here is pure and synchronous. Grids are immutable value types
//! rebuilt from scratch on every refresh; the scheduling invariants
//! (half-open intervals, uniform segment width, Sunday-first weeks) live in
//! this crate and nowhere else.
//!
//! ## Modules
//!
//! - [`time`] — minute-granularity wall-clock time, `"HH:MM"` on the wire
//! - [`types`] — segments, days, weeks, and their construction invariants
//! - [`builder`] — raw windows/blocked/bookings → per-day segment sequences
//! - [`blocks`] — availability blocks and buffer-aligned legal starts
//! - [`presenter`] — display cells and gesture-to-event resolution
//! - [`error`] — error types

pub mod blocks;
pub mod builder;
pub mod error;
pub mod presenter;
pub mod time;
pub mod types;

pub use blocks::{extract_blocks, legal_start_times, slot_offer, AvailabilityBlock, SlotOffer};
pub use builder::{build_day, build_day_segments, build_week, DayInputs, Viewer};
pub use error::GridError;
pub use time::TimeOfDay;
pub use types::{
    sunday_start, AvailabilityWindow, Booking, BookingId, DayGrid, Segment, SegmentState,
    SessionSettings, StudentId, TutorId, WeekGrid,
};
