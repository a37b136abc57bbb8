//! The fetch-then-format flow behind the `stats` command.

use crate::client::StatsSource;
use crate::formatter::{DisplayPayload, StatsFormatter, FETCH_FAILED_MESSAGE};
use incbot_common::UserRef;

/// Outcome of a stats lookup, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsReply {
    /// The backend answered; show the embed.
    Stats(Box<DisplayPayload>),
    /// The lookup failed; show [`FETCH_FAILED_MESSAGE`].
    Failed,
}

impl StatsReply {
    /// Plain-text body for a failed lookup.
    pub const fn failure_text(&self) -> Option<&'static str> {
        match self {
            Self::Stats(_) => None,
            Self::Failed => Some(FETCH_FAILED_MESSAGE),
        }
    }
}

/// Looks up `target`'s stats and renders them, attributed to `requester`.
///
/// Failures are already logged by the source; callers only see
/// [`StatsReply::Failed`].
pub async fn lookup_stats(
    source: &dyn StatsSource,
    formatter: &StatsFormatter,
    requester: &UserRef,
    target: &UserRef,
) -> StatsReply {
    match source.fetch(target.id).await {
        Ok(stats) => StatsReply::Stats(Box::new(formatter.format(&stats, requester, target))),
        Err(_) => StatsReply::Failed,
    }
}
