//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use incbot_commands::{create_framework, Data, Error};
use incbot_config::Config;
use incbot_stats::{StatsClient, StatsSource};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

/// Gateway intents: non-privileged events plus message content, which the
/// legacy text trigger reads.
pub fn gateway_intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT
}

/// Main bot structure.
pub struct IncBot {
    config: Arc<Config>,
}

impl IncBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Configuration the bot runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Connects to the gateway and runs until the client stops.
    pub async fn start(&self) -> BotResult<()> {
        let stats: Arc<dyn StatsSource> = Arc::new(StatsClient::new(&self.config.api)?);
        let config = self.config.clone();

        let framework = create_framework()
            .setup(move |ctx, _ready, framework| {
                Box::pin(async move {
                    register_commands(ctx, &framework.options().commands, config.discord.guild_id)
                        .await;
                    Ok(Data::new(config, stats))
                })
            })
            .build();

        let mut builder = serenity::ClientBuilder::new(&self.config.discord.token, gateway_intents())
            .framework(framework);
        if let Some(id) = self.config.discord.application_id {
            builder = builder.application_id(serenity::ApplicationId::new(id));
        }

        let mut client = builder.await?;
        info!("Connecting to Discord");
        client.start().await?;
        Ok(())
    }
}

/// Registers slash commands in `guild_id`, or globally when unset.
/// Failures are logged and the bot keeps running.
async fn register_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<Data, Error>],
    guild_id: Option<u64>,
) {
    let result = match guild_id {
        Some(id) => {
            poise::builtins::register_in_guild(ctx, commands, serenity::GuildId::new(id)).await
        }
        None => poise::builtins::register_globally(ctx, commands).await,
    };

    match (result, guild_id) {
        (Ok(()), Some(id)) => info!(guild_id = id, "Registered {} command(s) in guild", commands.len()),
        (Ok(()), None) => info!("Registered {} command(s) globally", commands.len()),
        (Err(e), _) => error!("Failed to register commands: {}", e),
    }
}
