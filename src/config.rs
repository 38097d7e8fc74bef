use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".orgbot.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub github: GithubSettings,

    #[serde(default)]
    pub comments: CommentSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Name of the environment variable holding the API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_per_page() -> u32 {
    100
}

fn default_user_agent() -> String {
    "orgbot".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSettings {
    /// Usernames cc'd on every comment when none are given explicitly.
    #[serde(default)]
    pub mentions: Vec<String>,

    #[serde(default = "default_role")]
    pub default_role: String,
}

fn default_role() -> String {
    crate::comment::DEFAULT_ROLE.to_string()
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_env: default_token_env(),
            per_page: default_per_page(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CommentSettings {
    fn default() -> Self {
        Self {
            mentions: Vec::new(),
            default_role: default_role(),
        }
    }
}

impl GithubSettings {
    /// Reads the token from the configured environment variable, ignoring blank values.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

impl BotConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let config = Self::load_from(&config_path)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BotError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    /// Like [`BotConfig::load`], but falls back to defaults when no config file exists.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::load(start_path) {
            Ok((config, root)) => Ok((config, Some(root))),
            Err(BotError::NotInitialized) => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok((Self::default(), None))
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BotConfig = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BotError::NotInitialized);
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: BotConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.comments.default_role, "member");
        assert!(config.comments.mentions.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: BotConfig = serde_yaml::from_str(
            "comments:\n  mentions: [froi, elstudio]\ngithub:\n  per_page: 30\n",
        )
        .unwrap();
        assert_eq!(config.comments.mentions, vec!["froi", "elstudio"]);
        assert_eq!(config.comments.default_role, "member");
        assert_eq!(config.github.per_page, 30);
        assert_eq!(config.github.token_env, "GITHUB_TOKEN");
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        BotConfig::default()
            .save(&temp_dir.path().join(CONFIG_FILE_NAME))
            .unwrap();

        let (config, root) = BotConfig::load(&nested).unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = BotConfig::load_or_default(temp_dir.path()).unwrap();
        assert_eq!(config, BotConfig::default());
        assert!(root.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "github: [").unwrap();
        assert!(matches!(
            BotConfig::load_or_default(temp_dir.path()),
            Err(BotError::Yaml(_))
        ));
    }
}
