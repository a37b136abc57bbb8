//! The `/stats` slash command.

use crate::framework::{Context, Error};
use crate::reply::{create_reply, user_ref};
use incbot_stats::lookup_stats;
use poise::serenity_prelude as serenity;

/// The user whose stats are shown: the one picked, else the invoker.
pub fn resolve_target<'a>(
    user: Option<&'a serenity::User>,
    author: &'a serenity::User,
) -> &'a serenity::User {
    user.unwrap_or(author)
}

/// Check your stats or someone else's stats.
#[poise::command(slash_command)]
pub async fn stats(
    ctx: Context<'_>,
    #[description = "User to check stats for"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let target = resolve_target(user.as_ref(), ctx.author());

    // The backend can take longer than the interaction acknowledgement window.
    ctx.defer().await?;

    let data = ctx.data();
    let reply = lookup_stats(
        data.stats.as_ref(),
        &data.formatter,
        &user_ref(ctx.author()),
        &user_ref(target),
    )
    .await;

    ctx.send(create_reply(&reply)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> serenity::User {
        let mut user = serenity::User::default();
        user.id = serenity::UserId::new(id);
        user.name = name.to_string();
        user
    }

    #[test]
    fn test_target_defaults_to_invoker() {
        let author = user(1, "author");
        assert_eq!(resolve_target(None, &author).id, author.id);
    }

    #[test]
    fn test_picked_user_wins() {
        let author = user(1, "author");
        let picked = user(2, "picked");
        assert_eq!(resolve_target(Some(&picked), &author).id, picked.id);
    }
}
