use chrono::{Datelike, NaiveDate, NaiveTime};

// ── Weekday labels ────────────────────────────────────────────────────────────

/// Canonical weekday display labels, Monday first.
///
/// This fixed order is part of the output contract of the weekday
/// aggregation and the calendar grid columns.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Full display name for a date's weekday (proleptic Gregorian).
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// Zero-based Monday..Sunday index for a date's weekday.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

// ── Chat-format token parsing ─────────────────────────────────────────────────

/// Resolve a two-digit year token to a full year.
///
/// The export format carries only `YY`; the pivot is fixed at 1970:
/// `00–69 → 20YY`, `70–99 → 19YY`.  This matches the pivot the original
/// date-parsing library applied implicitly and is the documented rule for
/// this codebase.
pub fn resolve_two_digit_year(yy: u32) -> i32 {
    if yy <= 69 {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Parse a `DD/MM/YY` date token into a [`NaiveDate`].
///
/// The field order is explicitly day-month-year; no locale inference is
/// performed.  Returns `None` when the token does not have three `/`-separated
/// numeric fields or when the fields do not name a real calendar date
/// (e.g. `31/02/24`).
pub fn parse_chat_date(token: &str) -> Option<NaiveDate> {
    let mut fields = token.split('/');
    let day: u32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let yy: u32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() || yy > 99 {
        return None;
    }
    NaiveDate::from_ymd_opt(resolve_two_digit_year(yy), month, day)
}

/// Parse an `HH:MM:SS` time token into a [`NaiveTime`].
///
/// Returns `None` when the token does not have three `:`-separated numeric
/// fields or when the fields do not name a real wall-clock time.
pub fn parse_chat_time(token: &str) -> Option<NaiveTime> {
    let mut fields = token.split(':');
    let hour: u32 = fields.next()?.parse().ok()?;
    let minute: u32 = fields.next()?.parse().ok()?;
    let second: u32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, second)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
