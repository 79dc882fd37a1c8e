//! Menu data loading: reads meal records previously captured from the
//! upstream menu API as JSON. This is the stand-in for the network-fetch
//! side; the classification core itself never touches the filesystem.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::meal::{Meal, RawMeal};
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::Path;

/// Per-day capture files tried by `load_week`, Monday first.
const DAY_FILES: [&str; 7] = [
    "mon.json",
    "tue.json",
    "wed.json",
    "thu.json",
    "fri.json",
    "sat.json",
    "sun.json",
];

/// Reads one JSON array of raw meal records and types them at the boundary.
pub fn load_file(path: &Path) -> AppResult<Vec<Meal>> {
    let content = fs::read_to_string(path)?;
    let raw: Vec<RawMeal> = serde_json::from_str(&content)
        .map_err(|e| AppError::MenuFile(path.display().to_string(), e))?;
    Ok(raw.into_iter().map(Meal::from).collect())
}

/// Loads up to seven day-scoped capture files from `dir`.
///
/// A missing day file simply contributes no records, and an unreadable one
/// is skipped with a warning: the same continue-on-failure policy the fetch
/// side applies per day, so a partial week still aggregates correctly.
pub fn load_week(dir: &Path) -> AppResult<Vec<Meal>> {
    if !dir.is_dir() {
        return Err(AppError::NoMenuData(dir.display().to_string()));
    }

    let mut meals = Vec::new();
    for name in DAY_FILES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_file(&path) {
            Ok(mut day) => meals.append(&mut day),
            Err(e) => messages::warning(format!("Skipping {}: {}", path.display(), e)),
        }
    }
    Ok(meals)
}

/// Resolves the record source for a command: an explicit `--file` wins,
/// otherwise the configured menu directory is scanned for day files.
pub fn load_source(file: Option<&str>, cfg: &Config) -> AppResult<Vec<Meal>> {
    match file {
        Some(f) => load_file(&expand_tilde(f)),
        None => load_week(&expand_tilde(&cfg.menu_dir)),
    }
}
