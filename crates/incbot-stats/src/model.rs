//! The backend's stats document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body returned by `GET /api/bot/stats/discord/{id}`.
///
/// The body is kept untyped because every field is optional and the backend
/// has shipped several shapes; lookups by dotted path degrade to `None`
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsResponse(Value);

impl StatsResponse {
    /// Wraps a parsed JSON body.
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw JSON document.
    pub const fn as_json(&self) -> &Value {
        &self.0
    }

    /// Unwraps the raw JSON document.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Looks up a dotted path such as `lastHit.timestamp`.
    ///
    /// Missing keys, non-object parents, and JSON `null` all yield `None`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |node, key| node.get(key))
            .filter(|value| !value.is_null())
    }

    /// The first of `paths` holding a value.
    pub fn first_present(&self, paths: &[&str]) -> Option<&Value> {
        paths.iter().find_map(|path| self.get(path))
    }
}

impl From<Value> for StatsResponse {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
