//! Replaying adapter for the `EntropySource` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::EntropyError;
use crate::ports::EntropySource;

/// Replays recorded random bytes from a cassette.
///
/// Also the way to simulate an unavailable entropy source: record an `Err`
/// output, or let the cassette run dry.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates a new replaying entropy source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl EntropySource for ReplayingEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let value = replay_result(&self.replayer, "entropy", "fill")?;
        let bytes: Vec<u8> = serde_json::from_value(value).map_err(|e| {
            EntropyError::new("entropy", format!("fill: failed to deserialize bytes: {e}"))
        })?;
        if bytes.len() != buf.len() {
            return Err(EntropyError::new(
                "entropy",
                format!("fill: recorded {} bytes but {} were requested", bytes.len(), buf.len()),
            ));
        }
        buf.copy_from_slice(&bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(outputs: Vec<serde_json::Value>) -> CassetteReplayer {
        let interactions = outputs
            .into_iter()
            .zip(0..)
            .map(|(output, seq)| Interaction {
                seq,
                port: "entropy".into(),
                method: "fill".into(),
                input: json!({}),
                output,
            })
            .collect();
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn serves_recorded_bytes_in_order() {
        let source = ReplayingEntropy::new(make_replayer(vec![
            json!({"Ok": [1, 2, 3]}),
            json!({"Ok": [4, 5, 6]}),
        ]));
        let mut buf = [0u8; 3];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [4, 5, 6]);
    }

    #[test]
    fn recorded_failure_is_replayed_without_touching_buffer() {
        let source =
            ReplayingEntropy::new(make_replayer(vec![json!({"Err": "entropy: no device"})]));
        let mut buf = [9u8; 2];
        let err = source.fill(&mut buf).unwrap_err();
        assert_eq!(err, EntropyError::new("entropy", "no device"));
        assert_eq!(buf, [9, 9]);
    }

    #[test]
    fn exhausted_cassette_is_an_error() {
        let source = ReplayingEntropy::new(make_replayer(vec![]));
        let err = source.fill(&mut [0u8; 1]).unwrap_err();
        assert!(err.message.contains("no interactions recorded"));
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let source = ReplayingEntropy::new(make_replayer(vec![json!({"Ok": [1, 2]})]));
        let err = source.fill(&mut [0u8; 16]).unwrap_err();
        assert!(err.message.contains("recorded 2 bytes but 16 were requested"));
    }
}
