use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the menu capture directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing messtrack…");

    Config::init_all(cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();

    println!("📄 Config file : {}", path.display());
    println!("🍽️  Menu dir   : {}", &cfg.menu_dir);

    println!("🎉 messtrack initialization completed!");
    Ok(())
}
