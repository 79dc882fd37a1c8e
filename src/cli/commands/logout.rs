use crate::config::Config;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages;

/// Handle the `logout` command: forget the persisted session fields the
/// menu-fetch tool uses. Menu captures already on disk are left alone.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if cfg.session.is_empty() {
        messages::info("No session stored");
        return Ok(());
    }

    let cleared = Config {
        menu_dir: cfg.menu_dir.clone(),
        session: Session::default(),
    };
    cleared.save()?;

    messages::success("Session cleared");
    Ok(())
}
