//! Test utilities and shared test helpers for Incbot.
//!
//! This module provides logging setup, stats fixtures, and a tiny local HTTP
//! responder that can stand in for the stats backend in integration tests.

use crate::{UserId, UserRef};
use std::sync::Once;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use super::*;

    /// Create a test user ID.
    pub fn test_user_id() -> UserId {
        UserId(987_654_321_098_765_432)
    }

    /// The user who runs the command in tests.
    pub fn requester() -> UserRef {
        UserRef::new(111_111_111_111_111_111_u64, "requester")
            .with_avatar("https://cdn.discordapp.com/avatars/111/requester.png")
    }

    /// The user whose stats are looked up in tests.
    pub fn target() -> UserRef {
        UserRef::new(test_user_id(), "target")
            .with_avatar("https://cdn.discordapp.com/avatars/987/target.png")
    }
}

/// Backend payload fixtures.
pub mod stats_fixtures {
    use serde_json::{json, Value};

    /// Epoch seconds of [`LAST_HIT_TIMESTAMP`].
    pub const LAST_HIT_EPOCH_SECS: i64 = 1_704_110_400;

    /// `lastHit.timestamp` used by [`full_stats`].
    pub const LAST_HIT_TIMESTAMP: &str = "2024-01-01T12:00:00.000Z";

    /// A fully populated backend response.
    pub fn full_stats() -> Value {
        json!({
            "discordId": "987654321098765432",
            "discordUsername": "target",
            "directory": "main",
            "serviceType": "premium",
            "todayStats": {
                "hits": 12,
                "summary": 1_234_567,
                "rap": 45_000,
                "robux": 2_500,
                "refer": 3
            },
            "totalStats": {
                "hits": 4_321,
                "summary": 98_765_432,
                "rap": 1_000_000,
                "robux": 750_000
            },
            "biggestHits": {
                "summary": 5_000_000,
                "rap": 3_200_000,
                "robux": 150_000
            },
            "lastHit": {
                "user": "builderman",
                "robux": 1_200,
                "rap": 80_000,
                "summary": 81_200,
                "timestamp": LAST_HIT_TIMESTAMP
            },
            "networkStats": {
                "directReferrals": 14,
                "totalNetwork": 1_337,
                "referralCode": "INC-42"
            }
        })
    }

    /// A response where every group is missing or null.
    pub fn empty_stats() -> Value {
        json!({
            "todayStats": null,
            "lastHit": null
        })
    }
}

/// A local HTTP server that answers every request with the same canned
/// response and records the request heads it received.
pub struct MockHttpServer {
    /// `http://127.0.0.1:{port}`, without trailing slash.
    pub base_url: String,
    requests: mpsc::UnboundedReceiver<String>,
}

impl MockHttpServer {
    /// Starts a server replying with `status` and `body` on an ephemeral port.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");
        let body = body.into();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

                let response = format!(
                    "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests: rx,
        }
    }

    /// Waits for the next recorded request head.
    pub async fn next_request(&mut self) -> Option<String> {
        self.requests.recv().await
    }
}

/// A base URL nothing listens on, for connection-failure tests.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}
