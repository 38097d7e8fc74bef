mod comment;
mod init;
mod list;
mod membership;
mod utils;

pub use comment::{handle_actions_comment, handle_invite_comment};
pub use init::handle_init;
pub use list::handle_list;
pub use membership::handle_membership;

use crate::config::BotConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BotConfig,
}

impl CommandContext {
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    /// Loads the explicit config file, or searches upward from the working directory.
    pub fn load(config_path: Option<&Path>, api_url: Option<String>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => BotConfig::load_from(path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })?,
            None => {
                let cwd = std::env::current_dir()?;
                let (config, _root) = BotConfig::load_or_default(&cwd)
                    .context("Failed to load orgbot configuration")?;
                config
            }
        };

        if let Some(url) = api_url {
            config.github.api_url = url;
        }

        Ok(Self::new(config))
    }
}
