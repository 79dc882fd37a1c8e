//! Serving-window parsing: extracts the trailing end-of-window clock time
//! from free text like "Breakfast 07:30 AM - 9:30 AM".

use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

fn end_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)$").unwrap())
}

/// Returns the end of the serving window as minutes since midnight, or
/// `None` when the text carries no trailing `H:MM AM|PM` time.
///
/// `None` means lateness cannot be determined from the text; callers must
/// not read it as either late or not late.
pub fn parse_end_minutes(text: &str) -> Option<u32> {
    let caps = end_time_re().captures(text)?;

    let mut hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    let pm = caps[3].eq_ignore_ascii_case("pm");

    // 12-hour clock: 12 AM is midnight, 12 PM is noon
    if pm && hours != 12 {
        hours += 12;
    }
    if !pm && hours == 12 {
        hours = 0;
    }

    Some(hours * 60 + minutes)
}

pub fn minutes_of_day(now: &NaiveDateTime) -> u32 {
    now.hour() * 60 + now.minute()
}
