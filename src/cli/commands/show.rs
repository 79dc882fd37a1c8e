use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{calendar, classifier, logic::Core};
use crate::errors::{AppError, AppResult};
use crate::menu;
use crate::models::day::Day;
use crate::models::meal::Meal;
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::formatting::bold;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { day, all, file } = cmd {
        let meals = menu::load_source(file.as_deref(), cfg)?;

        if meals.is_empty() {
            println!("No menu data available");
            return Ok(());
        }

        // One clock sample for the whole pass
        let now = calendar::now_local();

        let days: Vec<Day> = if *all {
            Day::WEEK.to_vec()
        } else if let Some(d) = day {
            vec![Day::parse(d).ok_or_else(|| AppError::InvalidDay(d.clone()))?]
        } else {
            vec![calendar::current_day(&now)]
        };

        for d in days {
            let day_meals = Core::meals_for_day(&meals, d);
            if day_meals.is_empty() {
                if !*all {
                    println!("No meals for {}", d.full_name());
                }
                continue;
            }

            messages::header(d.full_name());
            for meal in day_meals {
                print_meal(meal, &now);
            }
        }
    }
    Ok(())
}

fn print_meal(meal: &Meal, now: &NaiveDateTime) {
    let status = classifier::classify(meal, now);

    println!("\n{}  {}", bold(&meal.name), colors::colorize_status(status));
    println!("  🕐 {}", colors::colorize_optional(&meal.timing));

    if meal.served && let Some(at) = &meal.served_at {
        println!("  Availed at: {}", at);
    }

    if status.is_missed() {
        println!("  {}Meal time has passed{}", colors::RED, colors::RESET);
    }

    for line in meal.menu_lines() {
        messages::bullet(line);
    }
}
