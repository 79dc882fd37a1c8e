//! ANSI color helper utilities for terminal output.

use crate::models::status::MealStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";

/// Status color:
/// Served → green
/// Missed → red
/// Pending → blue
pub fn color_for_status(status: MealStatus) -> &'static str {
    match status {
        MealStatus::Served => GREEN,
        MealStatus::Missed => RED,
        MealStatus::Pending => BLUE,
    }
}

/// Colored status badge, e.g. "<green>✔ Served<reset>"
pub fn colorize_status(status: MealStatus) -> String {
    let icon = match status {
        MealStatus::Served => "✔",
        MealStatus::Missed => "✘",
        MealStatus::Pending => "●",
    };
    format!("{}{} {}{}", color_for_status(status), icon, status.as_str(), RESET)
}

/// Greys out empty or placeholder field values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
