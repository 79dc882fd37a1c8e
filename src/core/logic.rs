use crate::core::{classifier, progress};
use crate::models::day::Day;
use crate::models::meal::Meal;
use crate::models::status::MealStatus;
use crate::models::week_progress::WeekProgress;
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Per-record status tags, in input order, all judged against `now`.
    pub fn classify_all(meals: &[Meal], now: &NaiveDateTime) -> Vec<MealStatus> {
        meals.iter().map(|m| classifier::classify(m, now)).collect()
    }

    pub fn build_week_progress(meals: &[Meal], now: &NaiveDateTime) -> WeekProgress {
        progress::aggregate(meals, now)
    }

    /// Records carrying the given day tag, in input order. Records whose
    /// day could not be recognized match no day and are never returned.
    pub fn meals_for_day(meals: &[Meal], day: Day) -> Vec<&Meal> {
        meals.iter().filter(|m| m.day == Some(day)).collect()
    }
}
