//! Renders a [`StatsResponse`] into a chat-agnostic embed description.

use crate::layout::{FieldDefault, FieldKind, FieldSpec, IconSlot, Layout, SectionSpec};
use crate::model::StatsResponse;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use incbot_common::{
    format_grouped_f64, format_grouped_i64, format_grouped_u64, format_relative_timestamp,
    truncate_string, UserRef,
};
use incbot_config::{DisplayConfig, SectionIcons};
use serde::Serialize;
use serde_json::{Number, Value};

/// The only text users see when a lookup fails.
pub const FETCH_FAILED_MESSAGE: &str = "❌ Failed to fetch stats.";

/// Placeholder for missing text and time values.
pub const NOT_AVAILABLE: &str = "N/A";

// Discord embed limits.
const MAX_FIELD_NAME: usize = 256;
const MAX_FIELD_VALUE: usize = 1024;
const MAX_TITLE: usize = 256;
const MAX_DESCRIPTION: usize = 4096;
const MAX_FOOTER: usize = 2048;
const MAX_EMBED_TOTAL: usize = 6000;

// Room kept for each field value when the description is shortened.
const MIN_FIELD_VALUE_BUDGET: usize = 64;

/// One titled block of the embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    /// Section title including its icon.
    pub name: String,
    /// `Label: value` lines joined by newlines.
    pub value: String,
    /// Whether Discord may lay the field out side by side.
    pub inline: bool,
}

/// Everything needed to send the stats reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPayload {
    /// Message content outside the embed; mentions the target.
    pub content: String,
    /// Embed title.
    pub title: String,
    /// Text under the title, when configured.
    pub description: Option<String>,
    /// Embed accent color.
    pub color: u32,
    /// Target's avatar.
    pub thumbnail: Option<String>,
    /// Sections in layout order.
    pub fields: Vec<DisplayField>,
    /// Attribution line naming the requester.
    pub footer: String,
    /// When the reply was rendered.
    pub timestamp: DateTime<Utc>,
}

/// Turns backend documents into [`DisplayPayload`]s.
#[derive(Debug, Clone)]
pub struct StatsFormatter {
    layout: Layout,
    icons: SectionIcons,
    color: u32,
    description: Option<String>,
}

impl StatsFormatter {
    /// Creates a formatter.
    pub const fn new(layout: Layout, icons: SectionIcons, color: u32) -> Self {
        Self {
            layout,
            icons,
            color,
            description: None,
        }
    }

    /// Sets the embed description. Blank text means none.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    /// Creates a formatter from the `[display]` configuration section.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(
            Layout::for_kind(config.layout),
            config.icons.clone(),
            config.color,
        )
        .with_description(config.description.clone())
    }

    /// The layout in use.
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Renders `stats` for `target`, attributed to `requester`.
    pub fn format(
        &self,
        stats: &StatsResponse,
        requester: &UserRef,
        target: &UserRef,
    ) -> DisplayPayload {
        self.format_at(stats, requester, target, Utc::now())
    }

    /// Same as [`format`](Self::format) with a fixed render time.
    pub fn format_at(
        &self,
        stats: &StatsResponse,
        requester: &UserRef,
        target: &UserRef,
        now: DateTime<Utc>,
    ) -> DisplayPayload {
        let fields = self
            .layout
            .sections
            .iter()
            .filter_map(|section| self.render_section(stats, section))
            .collect();

        let mut payload = DisplayPayload {
            content: target.id.mention(),
            title: truncate_string(&format!("{}'s Stats", target.tag), MAX_TITLE),
            description: self.description.clone(),
            color: self.color,
            thumbnail: target.avatar_url.clone(),
            fields,
            footer: truncate_string(&format!("Requested by {}", requester.tag), MAX_FOOTER),
            timestamp: now,
        };
        fit_embed_total(&mut payload);
        payload
    }

    /// Renders one section, or `None` when every line was omitted.
    pub fn render_section(
        &self,
        stats: &StatsResponse,
        section: &SectionSpec,
    ) -> Option<DisplayField> {
        let lines: Vec<String> = section
            .fields
            .iter()
            .filter_map(|field| {
                render_field(stats, field).map(|value| format!("{}: {value}", field.label))
            })
            .collect();

        if lines.is_empty() {
            return None;
        }

        Some(DisplayField {
            name: truncate_string(&self.section_name(section), MAX_FIELD_NAME),
            value: truncate_string(&lines.join("\n"), MAX_FIELD_VALUE),
            inline: false,
        })
    }

    fn section_name(&self, section: &SectionSpec) -> String {
        let icon = match section.icon {
            IconSlot::Stats => &self.icons.stats,
            IconSlot::LastHit => &self.icons.last_hit,
            IconSlot::Network => &self.icons.network,
            IconSlot::Account => &self.icons.account,
        };
        let icon = icon.trim();
        if icon.is_empty() {
            section.title.to_string()
        } else {
            format!("{icon} {}", section.title)
        }
    }
}

impl Default for StatsFormatter {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

/// Characters Discord counts against the combined embed limit.
pub fn embed_text_len(payload: &DisplayPayload) -> usize {
    let count = |s: &str| s.chars().count();
    count(&payload.title)
        + payload.description.as_deref().map_or(0, count)
        + count(&payload.footer)
        + payload
            .fields
            .iter()
            .map(|f| count(&f.name) + count(&f.value))
            .sum::<usize>()
}

/// Shortens the description, then the field values in equal shares, until
/// the embed fits Discord's combined limit.
fn fit_embed_total(payload: &mut DisplayPayload) {
    let count = |s: &str| s.chars().count();
    let fixed = count(&payload.title)
        + count(&payload.footer)
        + payload.fields.iter().map(|f| count(&f.name)).sum::<usize>();
    let reserved = payload.fields.len() * MIN_FIELD_VALUE_BUDGET;

    if let Some(description) = &mut payload.description {
        let budget = MAX_EMBED_TOTAL
            .saturating_sub(fixed + reserved)
            .min(MAX_DESCRIPTION);
        *description = truncate_string(description, budget);
    }

    let used = fixed + payload.description.as_deref().map_or(0, count);
    let available = MAX_EMBED_TOTAL.saturating_sub(used);
    let values: usize = payload.fields.iter().map(|f| count(&f.value)).sum();
    if values <= available || payload.fields.is_empty() {
        return;
    }

    let share = available / payload.fields.len();
    for field in &mut payload.fields {
        field.value = truncate_string(&field.value, share);
    }
}

/// Renders one field's value, applying its default when absent.
pub fn render_field(stats: &StatsResponse, field: &FieldSpec) -> Option<String> {
    let rendered = stats
        .first_present(field.paths)
        .and_then(|value| render_value(value, field.kind));

    match (rendered, field.default) {
        (Some(text), _) => Some(text),
        (None, FieldDefault::Zero) => Some("0".to_string()),
        (None, FieldDefault::NotAvailable) => Some(NOT_AVAILABLE.to_string()),
        (None, FieldDefault::Omit) => None,
    }
}

/// Renders a present JSON value. Containers, and times that do not parse,
/// count as missing.
pub fn render_value(value: &Value, kind: FieldKind) -> Option<String> {
    match (kind, value) {
        (_, Value::Null | Value::Array(_) | Value::Object(_)) => None,
        (FieldKind::RelativeTime, value) => parse_timestamp(value).map(format_relative_timestamp),
        (FieldKind::Amount, Value::Number(n)) => Some(grouped_number(n)),
        (_, Value::Number(n)) => Some(plain_number(n)),
        (_, Value::String(s)) => Some(s.clone()),
        (_, Value::Bool(b)) => Some(b.to_string()),
    }
}

fn grouped_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        format_grouped_i64(i)
    } else if let Some(u) = n.as_u64() {
        format_grouped_u64(u)
    } else {
        format_grouped_f64(n.as_f64().unwrap_or_default())
    }
}

fn plain_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().unwrap_or_default().to_string()
    } else {
        n.to_string()
    }
}

/// Parses an RFC 3339 / ISO 8601 string (zone-less values are UTC) or an
/// epoch-milliseconds number. The number `0` means no timestamp.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        #[allow(clippy::float_cmp)]
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => {
            #[allow(clippy::cast_possible_truncation)]
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        Value::String(raw) => parse_timestamp_str(raw.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
