use clap::{Parser, Subcommand};

/// Command-line interface definition for messtrack
/// CLI application to view the weekly mess menu and track availed meals
#[derive(Parser)]
#[command(
    name = "messtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple mess menu CLI: view the weekly cafeteria menu and track availed vs missed meals",
    long_about = None
)]
pub struct Cli {
    /// Override the menu directory (useful for tests or custom captures)
    #[arg(global = true, long = "menu-dir")]
    pub menu_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and menu directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Show the menu for one day, or the whole week
    Show {
        /// Day to show (Mon, Tue, ... Sun); defaults to today
        #[arg(long, short, help = "Day abbreviation (Mon..Sun), defaults to today")]
        day: Option<String>,

        /// Show every day of the week
        #[arg(long, conflicts_with = "day", help = "Show the whole week grouped by day")]
        all: bool,

        /// Read records from a single JSON capture instead of the menu directory
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Show the weekly meal progress summary
    Progress {
        /// Read records from a single JSON capture instead of the menu directory
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Clear the stored session fields used by the menu-fetch tool
    Logout,
}
