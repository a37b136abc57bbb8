//! Poise framework setup, shared command data, and error handling.

use incbot_config::Config;
use incbot_stats::{StatsFormatter, StatsSource};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Application data accessible in all commands.
///
/// Everything here is immutable after startup, so concurrent invocations
/// share it without locking.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Where stats come from.
    pub stats: Arc<dyn StatsSource>,
    /// How stats are rendered.
    pub formatter: StatsFormatter,
}

impl Data {
    /// Creates command data, deriving the formatter from `config`.
    pub fn new(config: Arc<Config>, stats: Arc<dyn StatsSource>) -> Self {
        let formatter = StatsFormatter::from_config(&config.display);
        Self {
            config,
            stats,
            formatter,
        }
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Framework options: the command list, the legacy text trigger, and
/// logging hooks.
pub fn framework_options() -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![crate::stats::stats()],
        event_handler: |ctx, event, framework, data| {
            Box::pin(event_handler(ctx, event, framework, data))
        },
        pre_command: |ctx| {
            Box::pin(async move {
                debug!(
                    command = %ctx.command().qualified_name,
                    author = %ctx.author().id,
                    "Running command"
                );
            })
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options())
}

async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("Logged in as {}", data_about_bot.user.tag());
        }
        serenity::FullEvent::Message { new_message } => {
            crate::legacy::handle_message(ctx, new_message, data).await?;
        }
        _ => {}
    }
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up framework: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!(
                "Error while handling {} event: {:?}",
                event.snake_case_name(),
                error
            );
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
