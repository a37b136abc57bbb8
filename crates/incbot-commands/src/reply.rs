//! Conversion of rendered stats into Discord builders.

use incbot_common::UserRef;
use incbot_stats::{DisplayPayload, StatsReply, FETCH_FAILED_MESSAGE};
use poise::serenity_prelude as serenity;

/// Platform-independent view of a Discord user.
pub fn user_ref(user: &serenity::User) -> UserRef {
    UserRef::new(user.id.get(), user.tag()).with_avatar(user.face())
}

/// Builds the stats embed.
pub fn create_embed(payload: &DisplayPayload) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(&payload.title)
        .color(payload.color)
        .footer(serenity::CreateEmbedFooter::new(&payload.footer));

    if let Some(description) = &payload.description {
        embed = embed.description(description);
    }
    if let Some(url) = &payload.thumbnail {
        embed = embed.thumbnail(url);
    }
    for field in &payload.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Ok(timestamp) = serenity::Timestamp::from_unix_timestamp(payload.timestamp.timestamp()) {
        embed = embed.timestamp(timestamp);
    }

    embed
}

/// Interaction reply for a lookup outcome.
pub fn create_reply(reply: &StatsReply) -> poise::CreateReply {
    match reply {
        StatsReply::Stats(payload) => poise::CreateReply::default()
            .content(payload.content.clone())
            .embed(create_embed(payload)),
        StatsReply::Failed => poise::CreateReply::default().content(FETCH_FAILED_MESSAGE),
    }
}

/// Channel message for a lookup outcome, sent as a reply to `trigger`.
pub fn create_message(reply: &StatsReply, trigger: &serenity::Message) -> serenity::CreateMessage {
    let message = match reply {
        StatsReply::Stats(payload) => serenity::CreateMessage::new()
            .content(payload.content.clone())
            .embed(create_embed(payload)),
        StatsReply::Failed => serenity::CreateMessage::new().content(FETCH_FAILED_MESSAGE),
    };
    message.reference_message(trigger)
}
