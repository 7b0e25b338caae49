//! Replaying adapter for the Clock port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::EntropyError;
use crate::ports::clock::Clock;

/// Replays recorded clock values from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> Result<DateTime<Utc>, EntropyError> {
        let value = replay_result(&self.replayer, "clock", "now")?;
        serde_json::from_value(value).map_err(|e| {
            EntropyError::new("clock", format!("now: failed to deserialize time: {e}"))
        })
    }
}
