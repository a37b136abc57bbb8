//! Legacy `!stats [@user]` text trigger.
//!
//! Older users still type the prefix form, which predates slash commands.
//! Any message starting with `{prefix}stats` triggers a lookup for the first
//! mentioned user, or the author when nobody is mentioned.

use crate::framework::{Data, Error};
use crate::reply::{create_message, user_ref};
use crate::stats::resolve_target;
use incbot_stats::lookup_stats;
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Name of the text command after the prefix.
pub const LEGACY_COMMAND: &str = "stats";

/// Whether `content` invokes the legacy command under `prefix`.
pub fn is_legacy_trigger(content: &str, prefix: &str) -> bool {
    content
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(LEGACY_COMMAND))
}

/// Picks the lookup target: the first mention, else the author.
pub fn legacy_target<'a>(
    author: &'a serenity::User,
    mentions: &'a [serenity::User],
) -> &'a serenity::User {
    resolve_target(mentions.first(), author)
}

/// Whether a message from `author` with `content` should be answered.
/// Bots never trigger a lookup.
pub fn should_answer(author: &serenity::User, content: &str, prefix: &str) -> bool {
    !author.bot && is_legacy_trigger(content, prefix)
}

/// Answers a legacy trigger. Other messages, and messages from bots, are
/// ignored.
pub async fn handle_message(
    ctx: &serenity::Context,
    message: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    if !should_answer(&message.author, &message.content, &data.config.discord.prefix) {
        return Ok(());
    }

    let target = legacy_target(&message.author, &message.mentions);
    debug!(author = %message.author.id, target = %target.id, "Legacy stats trigger");

    let reply = lookup_stats(
        data.stats.as_ref(),
        &data.formatter,
        &user_ref(&message.author),
        &user_ref(target),
    )
    .await;

    message
        .channel_id
        .send_message(ctx, create_message(&reply, message))
        .await?;
    Ok(())
}
