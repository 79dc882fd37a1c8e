use super::day::Day;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Serve-status value the upstream menu API uses for an availed meal.
const SERVED_SENTINEL: &str = "C";

/// First parenthesized group in a meal code, e.g. the "(Mon)" in
/// "Breakfast(Mon)".
fn day_group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]+)\)").unwrap())
}

/// One meal entry in the wire shape produced by the menu-fetch tool.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMeal {
    /// Meal code, meal name plus a parenthesized day, e.g. "Breakfast(Mon)"
    #[serde(rename = "msCde")]
    pub code: String,

    /// Free-text serving window, e.g. "Breakfast 07:30 AM - 9:30 AM"
    #[serde(rename = "mealTm", default)]
    pub timing: String,

    /// Serve status flag ('C' = completed/availed)
    #[serde(rename = "srvSts", default)]
    pub serve_status: String,

    /// Timestamp the meal was availed at, display only
    #[serde(rename = "srvDte", default)]
    pub served_at: Option<String>,

    /// Newline-delimited menu items, display only
    #[serde(rename = "msNme", default)]
    pub items: String,
}

/// A typed meal record as the classification core consumes it.
///
/// The day abbreviation is extracted from the code exactly once here, at the
/// ingestion boundary; `day` is `None` when the code carries no recognizable
/// abbreviation. Records are never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub name: String,
    pub day: Option<Day>,
    pub timing: String,
    pub served: bool,
    pub served_at: Option<String>,
    pub items: String,
}

impl Meal {
    pub fn from_raw(raw: RawMeal) -> Self {
        let (name, day) = split_code(&raw.code);
        Self {
            name,
            day,
            timing: raw.timing,
            served: raw.serve_status == SERVED_SENTINEL,
            served_at: raw.served_at,
            items: raw.items,
        }
    }

    /// Non-empty menu lines, in the order the upstream lists them.
    pub fn menu_lines(&self) -> impl Iterator<Item = &str> {
        self.items.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        Meal::from_raw(raw)
    }
}

/// Splits "Breakfast(Mon)" into ("Breakfast", Some(Mon)).
///
/// The parenthesized group is stripped from the name only when it is an
/// actual day abbreviation; anything else stays part of the name and the
/// day degrades to `None`.
fn split_code(code: &str) -> (String, Option<Day>) {
    if let Some(caps) = day_group_re().captures(code)
        && let Some(day) = Day::parse(&caps[1])
    {
        let full = caps.get(0).unwrap();
        let mut name = String::with_capacity(code.len());
        name.push_str(&code[..full.start()]);
        name.push_str(&code[full.end()..]);
        return (name.trim().to_string(), Some(day));
    }
    (code.trim().to_string(), None)
}
