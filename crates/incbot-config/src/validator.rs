//! Runtime validation of a merged configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.discord.token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Discord token cannot be empty (set BOT_TOKEN)".to_string(),
            ));
        }

        if config.discord.guild_id == Some(0) || config.discord.application_id == Some(0) {
            return Err(ConfigError::Invalid(
                "Discord IDs must be non-zero snowflakes".to_string(),
            ));
        }

        if config.discord.prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "Command prefix cannot be empty".to_string(),
            ));
        }

        let url = Url::parse(&config.api.base_url).map_err(|e| {
            ConfigError::Invalid(format!(
                "Stats API base URL '{}' is not a valid URL: {e}",
                config.api.base_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "Stats API base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if config.api.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "Stats API timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate(self)
    }
}
