use crate::config::{BotConfig, CONFIG_FILE_NAME};
use crate::error::BotError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(mentions: Vec<String>, force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(BotError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut config = BotConfig::default();
    config.comments.mentions = mentions;
    config.save(&config_path)?;

    tracing::debug!(path = %config_path.display(), "Wrote configuration");
    println!("{} orgbot in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());

    Ok(())
}
