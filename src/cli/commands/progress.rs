use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{calendar, logic::Core};
use crate::errors::AppResult;
use crate::menu;
use crate::utils::formatting::progress_bar;
use crate::utils::table::Table;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Progress { file } = cmd {
        let meals = menu::load_source(file.as_deref(), cfg)?;

        let now = calendar::now_local();
        let progress = Core::build_week_progress(&meals, &now);

        if progress.total == 0 {
            println!("No menu data available");
            return Ok(());
        }

        println!("\n📊 Weekly Meal Progress\n");
        println!(
            "  {}  {}% availed ({} of {} meals)\n",
            Colour::Blue.bold().paint(progress_bar(progress.percentage, 20)),
            progress.percentage,
            progress.served,
            progress.total
        );

        let mut table = Table::new(vec!["Status".to_string(), "Meals".to_string()]);
        table.add_row(vec!["✔ Availed".to_string(), progress.served.to_string()]);
        table.add_row(vec!["✘ Missed".to_string(), progress.missed.to_string()]);
        table.add_row(vec![
            "● Remaining".to_string(),
            progress.remaining.to_string(),
        ]);

        for line in table.render().lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}
