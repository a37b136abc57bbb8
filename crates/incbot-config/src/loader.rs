//! Configuration loading: optional TOML file, `.env`, then environment.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{Config, LayoutKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the config file.
pub const CONFIG_PATH_VAR: &str = "INCBOT_CONFIG";

/// Config file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "incbot.toml";

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a loader for the file named by `INCBOT_CONFIG`, falling back
    /// to `incbot.toml` in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::new(path)
    }

    /// Path this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file, applies `.env` and process environment overrides, and
    /// validates the result.
    pub async fn load(&self) -> ConfigResult<Config> {
        let mut config = self.load_file().await?;

        load_dotenv();
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

        config.validate()?;
        Ok(config)
    }

    /// Reads the TOML file. A missing file yields the default configuration.
    pub async fn load_file(&self) -> ConfigResult<Config> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    "No config file at {}, using defaults",
                    self.path.display()
                );
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let config = toml::from_str(&contents)?;
        info!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }
}

/// Loads a `.env` file from the working directory or its parents, if any.
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    if let Ok(path) = dotenv::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
}

/// Applies environment overrides through `lookup` so callers and tests can
/// supply variables without touching the process environment.
///
/// Empty values are ignored, matching an unset variable.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = get("BOT_TOKEN") {
        config.discord.token = token;
    }
    if let Some(id) = get("CLIENT_ID") {
        config.discord.application_id = Some(parse_number("CLIENT_ID", &id)?);
    }
    if let Some(id) = get("GUILD_ID") {
        config.discord.guild_id = Some(parse_number("GUILD_ID", &id)?);
    }
    if let Some(prefix) = get("COMMAND_PREFIX") {
        config.discord.prefix = prefix;
    }
    if let Some(url) = get("STATS_API_URL") {
        config.api.base_url = url;
    }
    if let Some(agent) = get("STATS_USER_AGENT") {
        config.api.user_agent = agent;
    }
    if let Some(secs) = get("STATS_TIMEOUT_SECS") {
        config.api.timeout_secs = Some(parse_number("STATS_TIMEOUT_SECS", &secs)?);
    }
    if let Some(layout) = get("STATS_LAYOUT") {
        config.display.layout =
            layout
                .parse::<LayoutKind>()
                .map_err(|reason| ConfigError::InvalidEnv {
                    var: "STATS_LAYOUT",
                    value: layout.clone(),
                    reason,
                })?;
    }

    Ok(())
}

fn parse_number(var: &'static str, value: &str) -> ConfigResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
