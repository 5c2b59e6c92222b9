//! Clock access and ISO-8601 normalization for form dates.
//!
//! `time`'s system clock is unavailable on `wasm32-unknown-unknown`, so the
//! browser build reads `Date.now()` instead.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Current wall-clock time in UTC.
pub fn now_utc() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i128;
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Milliseconds since the Unix epoch.
pub fn unix_millis(at: OffsetDateTime) -> i128 {
    at.unix_timestamp_nanos() / 1_000_000
}

/// Format as `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC, the shape the backend stores.
pub fn iso_utc(at: OffsetDateTime) -> String {
    let fmt = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(UtcOffset::UTC)
        .format(&fmt)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Normalize a `datetime-local` value to a full UTC timestamp.
///
/// Blank input means "now". Wall-clock values without an offset are read in
/// the browser's local timezone; values that already carry an offset are
/// converted.
pub fn normalize_processed_at(raw: &str, now: OffsetDateTime) -> Option<String> {
    normalize_processed_at_with(raw, now, local_offset_at)
}

/// [`normalize_processed_at`] with an explicit source for the UTC offset in
/// force at a given wall-clock time.
pub fn normalize_processed_at_with(
    raw: &str,
    now: OffsetDateTime,
    local_offset: impl Fn(PrimitiveDateTime) -> UtcOffset,
) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(iso_utc(now));
    }
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(iso_utc(at));
    }
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let without_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    PrimitiveDateTime::parse(raw, &with_seconds)
        .or_else(|_| PrimitiveDateTime::parse(raw, &without_seconds))
        .ok()
        .map(|at| iso_utc(at.assume_offset(local_offset(at))))
}

/// UTC offset the browser applies to the wall-clock time `at`, DST included.
/// Server renders and tests have no user timezone and use UTC.
pub fn local_offset_at(at: PrimitiveDateTime) -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        let local = js_sys::Date::new_with_year_month_day_hr_min_sec(
            u32::try_from(at.year()).unwrap_or(1970),
            i32::from(u8::from(at.month())) - 1,
            i32::from(at.day()),
            i32::from(at.hour()),
            i32::from(at.minute()),
            i32::from(at.second()),
        );
        // getTimezoneOffset() is UTC minus local time, in minutes.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = local.get_timezone_offset().round() as i32;
        UtcOffset::from_whole_seconds(-minutes * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = at;
        UtcOffset::UTC
    }
}

/// Normalize a `date` value (`YYYY-MM-DD`) to midnight UTC of that day.
///
/// Blank input stays blank: expiry is optional.
pub fn normalize_expiry(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(String::new());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|day| iso_utc(day.midnight().assume_utc()))
}
