use chrono::{NaiveDate, NaiveDateTime};
use messtrack::core::classifier::classify;
use messtrack::models::day::Day;
use messtrack::models::meal::Meal;
use messtrack::models::status::MealStatus;

/// Reference instant for most tests: Wednesday 2025-10-01 at the given time.
fn wednesday_at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 1)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn meal(day: Option<Day>, served: bool, timing: &str) -> Meal {
    Meal {
        name: "Breakfast".to_string(),
        day,
        timing: timing.to_string(),
        served,
        served_at: None,
        items: "Idli\nSambar".to_string(),
    }
}

#[test]
fn served_flag_wins_for_a_past_day() {
    let m = meal(Some(Day::Mon), true, "Breakfast 07:30 AM - 09:30 AM");
    assert_eq!(classify(&m, &wednesday_at(10, 0)), MealStatus::Served);
}

#[test]
fn served_flag_wins_regardless_of_day_and_time() {
    // even a future-day meal with an unparseable window is Served once flagged
    let m = meal(Some(Day::Fri), true, "whenever");
    assert_eq!(classify(&m, &wednesday_at(10, 0)), MealStatus::Served);

    let m = meal(None, true, "");
    assert_eq!(classify(&m, &wednesday_at(10, 0)), MealStatus::Served);
}

#[test]
fn unserved_meal_on_a_past_day_is_missed() {
    let m = meal(Some(Day::Mon), false, "Breakfast 07:30 AM - 09:30 AM");
    assert_eq!(classify(&m, &wednesday_at(10, 0)), MealStatus::Missed);
}

#[test]
fn same_day_meal_is_missed_after_the_window_ends() {
    let m = meal(Some(Day::Wed), false, "Breakfast 07:30 AM - 09:30 AM");
    assert_eq!(classify(&m, &wednesday_at(10, 0)), MealStatus::Missed);
}

#[test]
fn same_day_meal_is_pending_before_the_window_ends() {
    let m = meal(Some(Day::Wed), false, "Breakfast 07:30 AM - 09:30 AM");
    assert_eq!(classify(&m, &wednesday_at(8, 0)), MealStatus::Pending);
}

#[test]
fn same_day_meal_at_the_exact_window_end_is_still_pending() {
    // lateness requires now to be strictly past the end
    let m = meal(Some(Day::Wed), false, "Breakfast 07:30 AM - 09:30 AM");
    assert_eq!(classify(&m, &wednesday_at(9, 30)), MealStatus::Pending);
}

#[test]
fn future_day_meal_is_pending() {
    let m = meal(Some(Day::Fri), false, "Lunch 12:00 PM - 02:00 PM");
    assert_eq!(classify(&m, &wednesday_at(10, 0)), MealStatus::Pending);
}

#[test]
fn same_day_meal_with_unparseable_window_is_pending() {
    // no end time → lateness cannot be determined → never auto-missed
    let m = meal(Some(Day::Wed), false, "all morning");
    assert_eq!(classify(&m, &wednesday_at(23, 59)), MealStatus::Pending);
}

#[test]
fn meal_without_a_recognizable_day_is_never_missed() {
    let m = meal(None, false, "Breakfast 07:30 AM - 09:30 AM");
    // even on a Sunday evening, with every real day already behind us
    let sunday_late = NaiveDate::from_ymd_opt(2025, 10, 5)
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap();
    assert_eq!(classify(&m, &sunday_late), MealStatus::Pending);
}

#[test]
fn classification_is_deterministic() {
    let m = meal(Some(Day::Wed), false, "Breakfast 07:30 AM - 09:30 AM");
    let now = wednesday_at(10, 0);
    assert_eq!(classify(&m, &now), classify(&m, &now));
}

#[test]
fn every_combination_yields_exactly_one_status() {
    let days = [
        None,
        Some(Day::Mon),
        Some(Day::Tue),
        Some(Day::Wed),
        Some(Day::Thu),
        Some(Day::Fri),
        Some(Day::Sat),
        Some(Day::Sun),
    ];
    let timings = ["Breakfast 07:30 AM - 09:30 AM", "no window here", ""];

    for day in days {
        for served in [false, true] {
            for timing in timings {
                let m = meal(day, served, timing);
                let status = classify(&m, &wednesday_at(10, 0));
                // the match is the assertion: classify is total over its inputs
                match status {
                    MealStatus::Served => assert!(m.served),
                    MealStatus::Missed => assert!(!m.served),
                    MealStatus::Pending => assert!(!m.served),
                }
            }
        }
    }
}
