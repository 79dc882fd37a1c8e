use crate::core::{calendar, window};
use crate::models::meal::Meal;
use crate::models::status::MealStatus;
use chrono::NaiveDateTime;

/// Derives the lifecycle state of one meal relative to `now`.
///
/// Pure function of (meal, now): the served flag wins outright, a past day
/// is missed, and the current day is missed only once a parsed window end
/// has passed. Everything else stays pending, including meals without a
/// recognizable day and windows without a parseable end time.
pub fn classify(meal: &Meal, now: &NaiveDateTime) -> MealStatus {
    if meal.served {
        return MealStatus::Served;
    }

    let today = calendar::current_day(now);

    match meal.day {
        Some(day) if day.is_before(today) => MealStatus::Missed,
        Some(day) if day == today => match window::parse_end_minutes(&meal.timing) {
            Some(end) if window::minutes_of_day(now) > end => MealStatus::Missed,
            _ => MealStatus::Pending,
        },
        _ => MealStatus::Pending,
    }
}
