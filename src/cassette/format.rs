//! On-disk shape of a cassette: YAML with JSON-valued payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One call made on a port while recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the cassette, counting from zero.
    pub seq: u64,
    /// `"entropy"` or `"clock"`.
    pub port: String,
    /// `"fill"` for entropy, `"now"` for the clock.
    pub method: String,
    /// Call arguments; `{"len": n}` for `fill`, `null` for `now`.
    pub input: serde_json::Value,
    /// `{"Ok": value}` on success or `{"Err": message}` on failure.
    pub output: serde_json::Value,
}

/// A named, versioned list of port calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Session-derived label, e.g. `2024-06-15T10-30-00.000-entropy`.
    pub name: String,
    /// Time the cassette was written.
    pub recorded_at: DateTime<Utc>,
    /// `keymint` version that wrote it.
    pub version: String,
    /// Calls in the order they happened.
    pub interactions: Vec<Interaction>,
}
