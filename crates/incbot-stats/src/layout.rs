//! Declarative field sets for the stats embed.
//!
//! A [`Layout`] is an ordered list of sections; each section lists labeled
//! fields, the JSON paths they read, how the value is rendered, and what to
//! show when it is missing. Revisions of the embed differ only in these
//! tables.

use incbot_config::LayoutKind;

/// How a field's value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain number, e.g. `1234567`.
    Count,
    /// Number with thousands separators, e.g. `1,234,567`.
    Amount,
    /// Text shown verbatim.
    Text,
    /// Timestamp shown as Discord relative time markup.
    RelativeTime,
}

/// What a field shows when its value is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// `0`
    Zero,
    /// `N/A`
    NotAvailable,
    /// Drop the line.
    Omit,
}

/// Which configured icon a section title uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    /// Today, total, and biggest hit.
    Stats,
    /// Last hit.
    LastHit,
    /// Referral network.
    Network,
    /// Account details.
    Account,
}

/// One `Label: value` line inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Text before the colon.
    pub label: &'static str,
    /// Dotted JSON paths; the first present one is rendered.
    pub paths: &'static [&'static str],
    /// Rendering rule.
    pub kind: FieldKind,
    /// Placeholder rule.
    pub default: FieldDefault,
}

impl FieldSpec {
    /// A plain number defaulting to `0`.
    pub const fn count(label: &'static str, paths: &'static [&'static str]) -> Self {
        Self {
            label,
            paths,
            kind: FieldKind::Count,
            default: FieldDefault::Zero,
        }
    }

    /// A separated number defaulting to `0`.
    pub const fn amount(label: &'static str, paths: &'static [&'static str]) -> Self {
        Self {
            label,
            paths,
            kind: FieldKind::Amount,
            default: FieldDefault::Zero,
        }
    }

    /// Text defaulting to `N/A`.
    pub const fn text(label: &'static str, paths: &'static [&'static str]) -> Self {
        Self {
            label,
            paths,
            kind: FieldKind::Text,
            default: FieldDefault::NotAvailable,
        }
    }

    /// Relative time defaulting to `N/A`.
    pub const fn relative_time(label: &'static str, paths: &'static [&'static str]) -> Self {
        Self {
            label,
            paths,
            kind: FieldKind::RelativeTime,
            default: FieldDefault::NotAvailable,
        }
    }

    /// Same field, dropped when missing.
    #[must_use]
    pub const fn or_omit(mut self) -> Self {
        self.default = FieldDefault::Omit;
        self
    }
}

/// One embed field: a titled block of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Upper-case section title.
    pub title: &'static str,
    /// Icon shown before the title.
    pub icon: IconSlot,
    /// Lines in display order.
    pub fields: &'static [FieldSpec],
}

/// An ordered set of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Which named layout this is.
    pub kind: LayoutKind,
    /// Sections in display order.
    pub sections: &'static [SectionSpec],
}

const TODAY: SectionSpec = SectionSpec {
    title: "TODAY STATS",
    icon: IconSlot::Stats,
    fields: &[
        FieldSpec::count("Hits", &["todayStats.hits"]),
        FieldSpec::amount("Summary", &["todayStats.summary"]),
        FieldSpec::amount("RAP", &["todayStats.rap"]),
        FieldSpec::amount("Robux", &["todayStats.robux"]),
    ],
};

const TODAY_WITH_REFERRALS: SectionSpec = SectionSpec {
    fields: &[
        FieldSpec::count("Hits", &["todayStats.hits"]),
        FieldSpec::amount("Summary", &["todayStats.summary"]),
        FieldSpec::amount("RAP", &["todayStats.rap"]),
        FieldSpec::amount("Robux", &["todayStats.robux"]),
        FieldSpec::count("Refer", &["todayStats.refer"]),
    ],
    ..TODAY
};

const TOTAL: SectionSpec = SectionSpec {
    title: "TOTAL STATS",
    icon: IconSlot::Stats,
    fields: &[
        FieldSpec::count("Total Hits", &["totalStats.hits"]),
        FieldSpec::amount("Summary", &["totalStats.summary"]),
        FieldSpec::amount("RAP", &["totalStats.rap"]),
        FieldSpec::amount("Robux", &["totalStats.robux"]),
    ],
};

const BIGGEST_HIT: SectionSpec = SectionSpec {
    title: "BIGGEST HIT",
    icon: IconSlot::Stats,
    fields: &[
        FieldSpec::amount("Summary", &["biggestHits.summary"]),
        FieldSpec::amount("RAP", &["biggestHits.rap"]),
        FieldSpec::amount("Robux", &["biggestHits.robux"]),
    ],
};

const LAST_HIT_USER: FieldSpec = FieldSpec::text("User", &["lastHit.user", "lastHit.username"]);
const LAST_HIT_TIME: FieldSpec = FieldSpec::relative_time("Time", &["lastHit.timestamp"]);

const LAST_HIT: SectionSpec = SectionSpec {
    title: "LAST HIT",
    icon: IconSlot::LastHit,
    fields: &[LAST_HIT_USER, LAST_HIT_TIME],
};

const LAST_HIT_DETAILED: SectionSpec = SectionSpec {
    fields: &[
        LAST_HIT_USER,
        FieldSpec::amount("Summary", &["lastHit.summary"]).or_omit(),
        FieldSpec::amount("RAP", &["lastHit.rap"]).or_omit(),
        FieldSpec::amount("Robux", &["lastHit.robux"]).or_omit(),
        LAST_HIT_TIME,
    ],
    ..LAST_HIT
};

const NETWORK: SectionSpec = SectionSpec {
    title: "NETWORK",
    icon: IconSlot::Network,
    fields: &[
        FieldSpec::count("Direct Referrals", &["networkStats.directReferrals"]),
        FieldSpec::count("Total Network", &["networkStats.totalNetwork"]),
        FieldSpec::text("Referral Code", &["networkStats.referralCode"]),
    ],
};

const ACCOUNT: SectionSpec = SectionSpec {
    title: "ACCOUNT",
    icon: IconSlot::Account,
    fields: &[
        FieldSpec::text("Discord Username", &["discordUsername"]),
        FieldSpec::text("Discord ID", &["discordId"]),
        FieldSpec::text("Directory", &["directory"]),
        FieldSpec::text("Service Type", &["serviceType"]),
    ],
};

impl Layout {
    /// The production embed: today, total, biggest hit, last hit, network.
    pub const STANDARD: Self = Self {
        kind: LayoutKind::Standard,
        sections: &[TODAY, TOTAL, BIGGEST_HIT, LAST_HIT, NETWORK],
    };

    /// Every field the backend is known to send.
    pub const EXTENDED: Self = Self {
        kind: LayoutKind::Extended,
        sections: &[
            TODAY_WITH_REFERRALS,
            TOTAL,
            BIGGEST_HIT,
            LAST_HIT_DETAILED,
            NETWORK,
            ACCOUNT,
        ],
    };

    /// Looks up a built-in layout.
    pub const fn for_kind(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Standard => Self::STANDARD,
            LayoutKind::Extended => Self::EXTENDED,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::STANDARD
    }
}
