use crate::core::classifier;
use crate::models::meal::Meal;
use crate::models::status::MealStatus;
use crate::models::week_progress::WeekProgress;
use chrono::NaiveDateTime;

/// Folds a record set into the weekly counters.
///
/// Every classification in the pass is judged against the single `now`
/// passed in. `remaining` is derived by subtraction, never counted, which
/// keeps `served + missed + remaining == total` for any input.
pub fn aggregate(meals: &[Meal], now: &NaiveDateTime) -> WeekProgress {
    let total = meals.len();
    let served = meals.iter().filter(|m| m.served).count();
    let missed = meals
        .iter()
        .filter(|m| classifier::classify(m, now) == MealStatus::Missed)
        .count();
    let remaining = total - served - missed;

    let percentage = if total > 0 {
        (served as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    WeekProgress {
        total,
        served,
        missed,
        remaining,
        percentage,
    }
}
