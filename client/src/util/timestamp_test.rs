use time::macros::{datetime, offset};

use super::*;

#[test]
fn iso_utc_includes_millis_and_z_suffix() {
    assert_eq!(iso_utc(datetime!(2024-03-15 10:30:05.123456 UTC)), "2024-03-15T10:30:05.123Z");
}

#[test]
fn iso_utc_converts_offsets_to_utc() {
    assert_eq!(iso_utc(datetime!(2024-03-15 01:00 +02:00)), "2024-03-14T23:00:00.000Z");
}

#[test]
fn unix_millis_truncates_nanos() {
    assert_eq!(unix_millis(datetime!(1970-01-01 00:00:01.5009 UTC)), 1500);
}

#[test]
fn expiry_date_normalizes_to_midnight_utc() {
    assert_eq!(normalize_expiry("2024-03-15").as_deref(), Some("2024-03-15T00:00:00.000Z"));
}

#[test]
fn blank_expiry_stays_blank() {
    assert_eq!(normalize_expiry("  ").as_deref(), Some(""));
}

#[test]
fn malformed_expiry_is_rejected() {
    assert_eq!(normalize_expiry("15/03/2024"), None);
    assert_eq!(normalize_expiry("2024-02-30"), None);
}

#[test]
fn blank_processed_date_uses_now() {
    let now = datetime!(2025-01-02 03:04:05 UTC);
    assert_eq!(normalize_processed_at("", now).as_deref(), Some("2025-01-02T03:04:05.000Z"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn datetime_local_values_are_accepted_with_and_without_seconds() {
    let now = datetime!(2025-01-02 03:04:05 UTC);
    assert_eq!(normalize_processed_at("2024-03-15T10:30", now).as_deref(), Some("2024-03-15T10:30:00.000Z"));
    assert_eq!(normalize_processed_at("2024-03-15T10:30:45", now).as_deref(), Some("2024-03-15T10:30:45.000Z"));
}

#[test]
fn wall_clock_values_use_the_local_offset() {
    let now = datetime!(2025-01-02 03:04:05 UTC);
    let new_york_summer = |_: PrimitiveDateTime| offset!(-4);
    assert_eq!(
        normalize_processed_at_with("2024-03-10T14:45", now, new_york_summer).as_deref(),
        Some("2024-03-10T18:45:00.000Z")
    );
    let kolkata = |_: PrimitiveDateTime| offset!(+5:30);
    assert_eq!(
        normalize_processed_at_with("2024-03-10T01:00", now, kolkata).as_deref(),
        Some("2024-03-09T19:30:00.000Z")
    );
}

#[test]
fn local_offset_is_looked_up_for_the_entered_wall_clock() {
    let now = datetime!(2025-01-02 03:04:05 UTC);
    // Winter and summer sides of a DST switch resolve to different offsets.
    let berlin = |at: PrimitiveDateTime| if at.month() == time::Month::July { offset!(+2) } else { offset!(+1) };
    assert_eq!(
        normalize_processed_at_with("2024-01-15T12:00", now, berlin).as_deref(),
        Some("2024-01-15T11:00:00.000Z")
    );
    assert_eq!(
        normalize_processed_at_with("2024-07-15T12:00", now, berlin).as_deref(),
        Some("2024-07-15T10:00:00.000Z")
    );
}

#[test]
fn local_offset_is_ignored_for_blank_and_offset_bearing_input() {
    let now = datetime!(2025-01-02 03:04:05 UTC);
    let far_east = |_: PrimitiveDateTime| offset!(+9);
    assert_eq!(normalize_processed_at_with("", now, far_east).as_deref(), Some("2025-01-02T03:04:05.000Z"));
    assert_eq!(
        normalize_processed_at_with("2024-03-15T10:30:00+01:00", now, far_east).as_deref(),
        Some("2024-03-15T09:30:00.000Z")
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_offset_outside_the_browser_is_utc() {
    assert_eq!(local_offset_at(datetime!(2024-03-10 14:45)), UtcOffset::UTC);
}

#[test]
fn rfc3339_processed_date_is_converted() {
    let now = datetime!(2025-01-02 03:04:05 UTC);
    assert_eq!(
        normalize_processed_at("2024-03-15T10:30:00+01:00", now).as_deref(),
        Some("2024-03-15T09:30:00.000Z")
    );
}

#[test]
fn garbage_processed_date_is_rejected() {
    assert_eq!(normalize_processed_at("yesterday", datetime!(2025-01-02 03:04:05 UTC)), None);
}

#[test]
fn now_utc_is_after_2020() {
    assert!(now_utc().year() >= 2020);
}
