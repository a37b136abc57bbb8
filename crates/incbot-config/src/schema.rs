//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Main configuration structure for Incbot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Stats backend configuration.
    pub api: ApiConfig,
    /// Reply rendering configuration.
    pub display: DisplayConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Application (client) ID. Informational; the gateway reports it too.
    pub application_id: Option<u64>,
    /// Guild to register slash commands in. Global registration when unset.
    pub guild_id: Option<u64>,
    /// Prefix for the legacy text command (`!stats`).
    pub prefix: String,
}

/// Stats backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the backend, e.g. `https://www.incbot.site`.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Request timeout. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

/// Reply rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Which field set to render.
    pub layout: LayoutKind,
    /// Embed accent color as `0xRRGGBB`.
    pub color: u32,
    /// Optional text shown under the embed title.
    pub description: Option<String>,
    /// Icons prefixed to section titles.
    pub icons: SectionIcons,
}

/// Named field sets the formatter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Today, total, biggest hit, last hit, and network sections.
    Standard,
    /// Standard plus referral counts, last hit amounts, and account details.
    Extended,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(format!("unknown layout '{other}'")),
        }
    }
}

/// Section title icons. Custom emoji markup such as `<:name:123>` works too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionIcons {
    /// Today, total, and biggest hit sections.
    pub stats: String,
    /// Last hit section.
    pub last_hit: String,
    /// Network section.
    pub network: String,
    /// Account section.
    pub account: String,
}
