//! Default values for every configuration section.

use crate::schema::*;

/// Production stats backend.
pub const DEFAULT_BASE_URL: &str = "https://www.incbot.site";

/// `User-Agent` the backend expects from the bot.
pub const DEFAULT_USER_AGENT: &str = "Incbot-Discord-Bot";

/// Legacy text command prefix.
pub const DEFAULT_PREFIX: &str = "!";

/// Embed accent color.
pub const DEFAULT_EMBED_COLOR: u32 = 0x002b_2d31;

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            api: ApiConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            application_id: None,
            guild_id: None,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::default(),
            color: DEFAULT_EMBED_COLOR,
            description: None,
            icons: SectionIcons::default(),
        }
    }
}

impl Default for LayoutKind {
    fn default() -> Self {
        Self::Standard
    }
}

impl Default for SectionIcons {
    fn default() -> Self {
        Self {
            stats: "📊".to_string(),
            last_hit: "🎯".to_string(),
            network: "🌐".to_string(),
            account: "👤".to_string(),
        }
    }
}
