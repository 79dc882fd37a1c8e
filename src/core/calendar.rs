//! Weekday calendar: maps an instant to the Monday-first mess-menu day.

use crate::models::day::Day;
use chrono::{Datelike, NaiveDateTime};

/// Samples the wall clock once. Every classification inside one pass must
/// reuse the instant returned here instead of re-reading the clock.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn current_day(now: &NaiveDateTime) -> Day {
    Day::from(now.weekday())
}
