//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] incbot_config::ConfigError),

    /// The stats HTTP client could not be built.
    #[error("Stats client error: {0}")]
    StatsClient(#[from] incbot_stats::ClientError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// A global tracing subscriber was already installed.
    #[error("Logging error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
