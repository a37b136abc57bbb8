//! Main entry point for Incbot.

use incbot_bot::{init_logging, BotResult, IncBot, LoggingConfig};
use incbot_config::{load_dotenv, ConfigLoader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    // .env may carry RUST_LOG and LOG_FORMAT, so it is read before logging starts
    load_dotenv();
    init_logging(&LoggingConfig::from_env())?;

    info!("Starting Incbot v{}", env!("CARGO_PKG_VERSION"));

    let loader = ConfigLoader::from_env();
    let config = match loader.load().await {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let bot = IncBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot stopped: {}", e);
        return Err(e);
    }

    Ok(())
}
