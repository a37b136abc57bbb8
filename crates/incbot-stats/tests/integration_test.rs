//! Integration tests for incbot-stats crate.
//!
//! These tests cover the backend client against a local HTTP responder and
//! the rendering contract of both built-in layouts.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use incbot_common::test_utils::{
    discord_fixtures, init_test_logging, stats_fixtures, unreachable_base_url, MockHttpServer,
};
use incbot_common::{UserId, UserRef};
use incbot_config::{ApiConfig, DisplayConfig, LayoutKind};
use incbot_stats::{
    lookup_stats, FetchError, Layout, StatsClient, StatsFormatter, StatsReply, StatsResponse,
    StatsSource,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::time::Duration;

fn client_for(base_url: &str) -> StatsClient {
    StatsClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    })
    .unwrap()
}

fn formatter(layout: LayoutKind) -> StatsFormatter {
    StatsFormatter::from_config(&DisplayConfig {
        layout,
        ..DisplayConfig::default()
    })
}

fn field_values(stats: Value, layout: LayoutKind) -> Vec<(String, String)> {
    let payload = formatter(layout).format(
        &StatsResponse::new(stats),
        &discord_fixtures::requester(),
        &discord_fixtures::target(),
    );
    payload
        .fields
        .into_iter()
        .map(|f| (f.name, f.value))
        .collect()
}

// =============================================================================
// Backend client
// =============================================================================

#[tokio::test]
async fn test_fetch_returns_body_unchanged() {
    init_test_logging();
    let body = stats_fixtures::full_stats();
    let mut server = MockHttpServer::start(200, body.to_string()).await;

    let stats = client_for(&server.base_url)
        .fetch(UserId(987654321098765432))
        .await
        .unwrap();
    assert_eq!(stats.as_json(), &body);

    let head = server.next_request().await.unwrap().to_ascii_lowercase();
    assert!(head.starts_with("get /api/bot/stats/discord/987654321098765432 http/1.1"));
    assert!(head.contains("user-agent: incbot-discord-bot"));
    assert!(head.contains("accept: application/json"));
}

#[tokio::test]
async fn test_fetch_non_2xx_is_a_status_error() {
    for status in [404, 500, 503] {
        let server = MockHttpServer::start(status, r#"{"error":"nope"}"#).await;
        let err = client_for(&server.base_url)
            .fetch(UserId(1))
            .await
            .unwrap_err();
        assert!(
            matches!(err, FetchError::Status { status: s } if s == status),
            "unexpected error for {status}: {err}"
        );
        assert_eq!(err.status(), Some(status));
    }
}

#[tokio::test]
async fn test_fetch_invalid_json_is_a_decode_error() {
    let server = MockHttpServer::start(200, "<html>maintenance</html>").await;
    let err = client_for(&server.base_url)
        .fetch(UserId(1))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_null_body_is_a_failure() {
    let server = MockHttpServer::start(200, "null").await;
    let err = client_for(&server.base_url)
        .fetch(UserId(1))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::EmptyBody));
}

#[tokio::test]
async fn test_fetch_connection_failure_is_a_network_error() {
    let base_url = unreachable_base_url().await;
    let err = client_for(&base_url).fetch(UserId(1)).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_failed_fetch_renders_fixed_reply() {
    let server = MockHttpServer::start(502, "").await;
    let reply = lookup_stats(
        &client_for(&server.base_url),
        &StatsFormatter::default(),
        &discord_fixtures::requester(),
        &discord_fixtures::target(),
    )
    .await;
    assert_eq!(reply.failure_text(), Some("❌ Failed to fetch stats."));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_standard_layout_full_fixture() {
    let fields = field_values(stats_fixtures::full_stats(), LayoutKind::Standard);
    let expected = [
        (
            "📊 TODAY STATS",
            "Hits: 12\nSummary: 1,234,567\nRAP: 45,000\nRobux: 2,500",
        ),
        (
            "📊 TOTAL STATS",
            "Total Hits: 4321\nSummary: 98,765,432\nRAP: 1,000,000\nRobux: 750,000",
        ),
        (
            "📊 BIGGEST HIT",
            "Summary: 5,000,000\nRAP: 3,200,000\nRobux: 150,000",
        ),
        ("🎯 LAST HIT", "User: builderman\nTime: <t:1704110400:R>"),
        (
            "🌐 NETWORK",
            "Direct Referrals: 14\nTotal Network: 1337\nReferral Code: INC-42",
        ),
    ];

    assert_eq!(fields.len(), expected.len());
    for ((name, value), (want_name, want_value)) in fields.iter().zip(expected) {
        assert_eq!(name, want_name);
        assert_eq!(value, want_value);
    }
}

#[test]
fn test_extended_layout_full_fixture() {
    let fields = field_values(stats_fixtures::full_stats(), LayoutKind::Extended);
    assert_eq!(fields.len(), 6);
    assert!(fields[0].1.ends_with("Robux: 2,500\nRefer: 3"));
    assert_eq!(
        fields[3].1,
        "User: builderman\nSummary: 81,200\nRAP: 80,000\nRobux: 1,200\nTime: <t:1704110400:R>"
    );
    assert_eq!(fields[5].0, "👤 ACCOUNT");
    assert_eq!(
        fields[5].1,
        "Discord Username: target\nDiscord ID: 987654321098765432\nDirectory: main\nService Type: premium"
    );
}

#[test]
fn test_empty_document_uses_defaults() {
    let fields = field_values(stats_fixtures::empty_stats(), LayoutKind::Standard);
    assert_eq!(fields[0].1, "Hits: 0\nSummary: 0\nRAP: 0\nRobux: 0");
    assert_eq!(fields[1].1, "Total Hits: 0\nSummary: 0\nRAP: 0\nRobux: 0");
    assert_eq!(fields[2].1, "Summary: 0\nRAP: 0\nRobux: 0");
    assert_eq!(fields[3].1, "User: N/A\nTime: N/A");
    assert_eq!(
        fields[4].1,
        "Direct Referrals: 0\nTotal Network: 0\nReferral Code: N/A"
    );

    let extended = field_values(stats_fixtures::empty_stats(), LayoutKind::Extended);
    assert_eq!(extended[3].1, "User: N/A\nTime: N/A");
    assert_eq!(
        extended[5].1,
        "Discord Username: N/A\nDiscord ID: N/A\nDirectory: N/A\nService Type: N/A"
    );
}

#[test]
fn test_last_hit_username_fallback() {
    let stats = json!({"lastHit": {"username": "legacy_name", "timestamp": 1_700_000_000_000_i64}});
    let fields = field_values(stats, LayoutKind::Standard);
    assert_eq!(fields[3].1, "User: legacy_name\nTime: <t:1700000000:R>");
}

#[test]
fn test_payload_envelope() {
    let requester = discord_fixtures::requester();
    let target = discord_fixtures::target();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();

    let payload = StatsFormatter::default().format_at(
        &StatsResponse::new(stats_fixtures::full_stats()),
        &requester,
        &target,
        now,
    );

    assert_eq!(payload.content, "<@987654321098765432>");
    assert_eq!(payload.title, "target's Stats");
    assert_eq!(payload.color, 0x2b2d31);
    assert_eq!(payload.thumbnail, target.avatar_url);
    assert_eq!(payload.footer, "Requested by requester");
    assert_eq!(payload.timestamp, now);
    assert!(payload.fields.iter().all(|f| !f.inline));
}

#[test]
fn test_self_lookup_addresses_requester() {
    let me = discord_fixtures::requester();
    let payload = StatsFormatter::default().format(&StatsResponse::new(json!({})), &me, &me);
    assert_eq!(payload.content, me.id.mention());
    assert_eq!(payload.footer, format!("Requested by {}", me.tag));
}

// =============================================================================
// Concurrency
// =============================================================================

/// Echoes the requested id back inside the document after a per-id delay,
/// so the second request finishes first.
struct EchoSource;

#[async_trait]
impl StatsSource for EchoSource {
    async fn fetch(&self, user_id: UserId) -> Result<StatsResponse, FetchError> {
        let delay = if user_id.0 == 1 { 50 } else { 5 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(StatsResponse::new(json!({
            "networkStats": {"referralCode": format!("code-{}", user_id)}
        })))
    }
}

#[tokio::test]
async fn test_concurrent_lookups_do_not_cross_contaminate() {
    let source = EchoSource;
    let formatter = StatsFormatter::default();
    let alice = UserRef::new(1_u64, "alice");
    let bob = UserRef::new(2_u64, "bob");

    let (for_alice, for_bob) = tokio::join!(
        lookup_stats(&source, &formatter, &alice, &alice),
        lookup_stats(&source, &formatter, &bob, &bob),
    );

    for (reply, user) in [(for_alice, &alice), (for_bob, &bob)] {
        let StatsReply::Stats(payload) = reply else {
            panic!("lookup for {} failed", user.tag);
        };
        assert_eq!(payload.content, user.id.mention());
        assert_eq!(payload.footer, format!("Requested by {}", user.tag));
        assert!(payload.fields[4]
            .value
            .ends_with(&format!("Referral Code: code-{}", user.id)));
    }
}

#[tokio::test]
async fn test_fan_out_lookups_keep_their_targets() {
    let source = EchoSource;
    let formatter = StatsFormatter::default();
    let requester = discord_fixtures::requester();
    let targets: Vec<UserRef> = (1..=16_u64)
        .map(|id| UserRef::new(id, format!("user{id}")))
        .collect();

    let replies = futures::future::join_all(
        targets
            .iter()
            .map(|target| lookup_stats(&source, &formatter, &requester, target)),
    )
    .await;

    for (reply, target) in replies.into_iter().zip(&targets) {
        let StatsReply::Stats(payload) = reply else {
            panic!("lookup for {} failed", target.tag);
        };
        assert_eq!(payload.title, format!("{}'s Stats", target.tag));
        assert_eq!(payload.footer, "Requested by requester");
    }
}

// =============================================================================
// Property tests
// =============================================================================

const KNOWN_PATHS: &[&str] = &[
    "todayStats.hits",
    "todayStats.summary",
    "todayStats.rap",
    "todayStats.robux",
    "todayStats.refer",
    "totalStats.hits",
    "totalStats.summary",
    "totalStats.rap",
    "totalStats.robux",
    "biggestHits.summary",
    "biggestHits.rap",
    "biggestHits.robux",
    "lastHit.user",
    "lastHit.robux",
    "lastHit.rap",
    "lastHit.summary",
    "lastHit.timestamp",
    "networkStats.directReferrals",
    "networkStats.totalNetwork",
    "networkStats.referralCode",
];

fn arbitrary_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(json!({"nested": true})),
    ]
}

/// Removes, nulls, or rewrites arbitrary fields of the full fixture.
fn mangled_document() -> impl Strategy<Value = Value> {
    proptest::collection::vec(
        (0..KNOWN_PATHS.len(), proptest::option::of(arbitrary_leaf())),
        0..KNOWN_PATHS.len(),
    )
    .prop_map(|edits| {
        let mut doc = stats_fixtures::full_stats();
        for (index, leaf) in edits {
            let (group, key) = KNOWN_PATHS[index].split_once('.').unwrap();
            if let Some(object) = doc.get_mut(group).and_then(Value::as_object_mut) {
                match leaf {
                    Some(value) => object.insert(key.to_string(), value),
                    None => object.remove(key),
                };
            }
        }
        doc
    })
}

proptest! {
    #[test]
    fn test_formatter_never_fails_on_partial_documents(doc in mangled_document()) {
        for layout in [Layout::STANDARD, Layout::EXTENDED] {
            let formatter = StatsFormatter::new(layout, Default::default(), 0);
            let payload = formatter.format(
                &StatsResponse::new(doc.clone()),
                &discord_fixtures::requester(),
                &discord_fixtures::target(),
            );
            prop_assert_eq!(payload.fields.len(), layout.sections.len());
            prop_assert!(payload.fields.iter().all(|f| !f.value.is_empty()));
        }
    }

    #[test]
    fn test_formatter_survives_arbitrary_roots(root in arbitrary_leaf()) {
        let payload = StatsFormatter::default().format(
            &StatsResponse::new(root),
            &discord_fixtures::requester(),
            &discord_fixtures::target(),
        );
        prop_assert_eq!(payload.fields.len(), 5);
        prop_assert_eq!(&payload.fields[3].value, "User: N/A\nTime: N/A");
    }
}
