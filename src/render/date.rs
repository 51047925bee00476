// src/render/date.rs
// =============================================================================
// Turns "last updated" timestamps into short display dates like "Jan 05, 2024".
//
// GitHub sends timestamps as ISO-8601 strings in UTC ("2024-01-05T10:30:00Z").
// We show them in the local timezone of whoever runs the tool, with a numeric
// year, an abbreviated month name and a two-digit day.
//
// Rust concepts:
// - Generics with trait bounds: `Tz: TimeZone` lets one function format for
//   any timezone (Local in the app, Utc or fixed offsets in tests)
// =============================================================================

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

// chrono format string: abbreviated month, zero-padded day, four-digit year
const DISPLAY_FORMAT: &str = "%b %d, %Y";

// Formats a timestamp in the local timezone of the process
pub fn display_date(timestamp: &DateTime<Utc>) -> String {
    display_date_in(timestamp, &Local)
}

// Formats a timestamp in an explicit timezone
//
// The `Tz::Offset: Display` bound is what chrono needs to format a
// DateTime<Tz>.
pub fn display_date_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}
