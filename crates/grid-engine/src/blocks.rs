//! Availability blocks and legal session starts.
//!
//! A block is a maximal run of consecutive `available` segments within one
//! day; its end is exclusive (last available segment time + segment width),
//! so `start + session <= end` is the complete "session fits" test. Legal
//! starts inside a block sit on the buffer grid counted from midnight,
//! which keeps the offered times fixed no matter where the underlying
//! window happens to begin.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;
use crate::types::{DayGrid, SessionSettings};

/// A maximal contiguous run of `available` segments. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBlock {
    pub date: NaiveDate,
    pub start: TimeOfDay,
    /// Exclusive end of the run.
    pub end: TimeOfDay,
}

/// A block plus the session starts that may legally be offered inside it.
/// Ephemeral -- discarded once a booking attempt resolves or is cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotOffer {
    pub date: NaiveDate,
    pub block_start: TimeOfDay,
    pub block_end: TimeOfDay,
    pub legal_starts: Vec<TimeOfDay>,
}

/// Scan a day once and report its availability blocks in time order.
///
/// A block opens where a segment is `available` and its predecessor is not
/// (or it is the first segment), and closes after the last consecutive
/// `available` segment. Segments have uniform width, so zero-length runs
/// cannot occur.
pub fn extract_blocks(day: &DayGrid) -> Vec<AvailabilityBlock> {
    let width = day.segment_width();
    let mut blocks = Vec::new();
    let mut run_start: Option<TimeOfDay> = None;

    for (index, segment) in day.segments.iter().enumerate() {
        if segment.state.is_available() {
            if run_start.is_none() {
                run_start = Some(segment.time);
            }
            let run_ends_here = day
                .segments
                .get(index + 1)
                .map_or(true, |next| !next.state.is_available());
            if run_ends_here {
                if let Some(start) = run_start.take() {
                    blocks.push(AvailabilityBlock {
                        date: day.date,
                        start,
                        end: segment
                            .time
                            .checked_add_minutes(width)
                            .unwrap_or(TimeOfDay::END_OF_DAY),
                    });
                }
            }
        }
    }

    blocks
}

/// The block enclosing the segment at `segment_index`, found with the same
/// run-boundary rules as [`extract_blocks`]. `None` when the segment is not
/// `available`.
pub fn enclosing_block(day: &DayGrid, segment_index: usize) -> Option<AvailabilityBlock> {
    let clicked = day.segments.get(segment_index)?;
    if !clicked.state.is_available() {
        return None;
    }
    extract_blocks(day)
        .into_iter()
        .find(|block| block.start <= clicked.time && clicked.time < block.end)
}

/// Enumerate the legal session starts inside a block.
///
/// Starts at `block_start` rounded up to the next multiple of
/// `buffer_minutes` (unchanged if aligned) and advances by the buffer while
/// a whole session still fits before `block_end`. An empty result is the
/// normal no-capacity outcome -- a session longer than the block, or
/// degenerate zero settings, offer nothing.
pub fn legal_start_times(
    block_start: TimeOfDay,
    block_end: TimeOfDay,
    session_minutes: u16,
    buffer_minutes: u16,
) -> Vec<TimeOfDay> {
    let mut starts = Vec::new();
    if session_minutes == 0 || buffer_minutes == 0 {
        return starts;
    }
    let mut t = match block_start.round_up_to_multiple(buffer_minutes) {
        Some(aligned) => aligned,
        None => return starts,
    };
    while let Some(session_end) = t.checked_add_minutes(session_minutes) {
        if session_end > block_end {
            break;
        }
        starts.push(t);
        t = match t.checked_add_minutes(buffer_minutes) {
            Some(next) => next,
            None => break,
        };
    }
    starts
}

/// Package a block with the starts offerable under the tutor's settings.
pub fn slot_offer(block: &AvailabilityBlock, settings: &SessionSettings) -> SlotOffer {
    SlotOffer {
        date: block.date,
        block_start: block.start,
        block_end: block.end,
        legal_starts: legal_start_times(
            block.start,
            block.end,
            settings.default_session_minutes,
            settings.buffer_minutes,
        ),
    }
}
