//! Tests for the day-scoped wall-clock time type.

use grid_engine::time::{TimeOfDay, MINUTES_PER_DAY};

fn t(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::from_hm(hour, minute).unwrap()
}

#[test]
fn formats_zero_padded() {
    assert_eq!(t(9, 5).to_string(), "09:05");
    assert_eq!(t(0, 0).to_string(), "00:00");
    assert_eq!(TimeOfDay::END_OF_DAY.to_string(), "24:00");
}

#[test]
fn parses_hh_mm() {
    assert_eq!("09:30".parse::<TimeOfDay>().unwrap(), t(9, 30));
    assert_eq!("00:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::MIDNIGHT);
    assert_eq!("24:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::END_OF_DAY);
}

#[test]
fn parses_backend_seconds_suffix() {
    // The backend serializer emits "HH:MM:SS"; the seconds are dropped.
    assert_eq!("09:30:00".parse::<TimeOfDay>().unwrap(), t(9, 30));
    assert_eq!("13:45:59".parse::<TimeOfDay>().unwrap(), t(13, 45));
}

#[test]
fn rejects_malformed_times() {
    for bad in ["", "9", "25:00", "24:15", "09:60", "ten past", "09:15:xx", "1:2:3:4"] {
        assert!(bad.parse::<TimeOfDay>().is_err(), "accepted {bad:?}");
    }
}

#[test]
fn ordering_follows_the_clock() {
    assert!(t(9, 0) < t(9, 15));
    assert!(t(23, 45) < TimeOfDay::END_OF_DAY);
}

#[test]
fn checked_add_stops_at_midnight() {
    assert_eq!(t(9, 0).checked_add_minutes(30), Some(t(9, 30)));
    // Landing exactly on 24:00 is fine -- an interval may end there.
    assert_eq!(t(23, 30).checked_add_minutes(30), Some(TimeOfDay::END_OF_DAY));
    // Going past it is not.
    assert_eq!(t(23, 30).checked_add_minutes(31), None);
    assert_eq!(TimeOfDay::END_OF_DAY.checked_add_minutes(1), None);
}

#[test]
fn round_up_counts_from_midnight() {
    assert_eq!(t(9, 0).round_up_to_multiple(15), Some(t(9, 0)));
    assert_eq!(t(9, 5).round_up_to_multiple(15), Some(t(9, 15)));
    assert_eq!(t(9, 1).round_up_to_multiple(45), Some(t(9, 45)));
    assert_eq!(t(9, 5).round_up_to_multiple(0), None);
}

#[test]
fn minute_accessors() {
    let time = t(14, 45);
    assert_eq!(time.hour(), 14);
    assert_eq!(time.minute(), 45);
    assert_eq!(time.minutes(), 14 * 60 + 45);
    assert_eq!(TimeOfDay::END_OF_DAY.minutes(), MINUTES_PER_DAY);
}

#[test]
fn serde_round_trip_as_hh_mm() {
    let json = serde_json::to_string(&t(9, 15)).unwrap();
    assert_eq!(json, "\"09:15\"");
    let back: TimeOfDay = serde_json::from_str("\"09:15:00\"").unwrap();
    assert_eq!(back, t(9, 15));
}
