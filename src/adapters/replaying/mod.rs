//! Replaying adapters that replay recorded interactions.

pub mod clock;
pub mod entropy;

pub use clock::ReplayingClock;
pub use entropy::ReplayingEntropy;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::EntropyError;

/// Pull the next recorded result for `port::method`.
///
/// Mirror of `recording::record_result`. Expects `{"Ok": <value>}` or
/// `{"Err": "message"}`. A recorded `Err`, an exhausted cassette, or a
/// poisoned lock all come back as [`EntropyError`] for `port`.
pub(crate) fn replay_result(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, EntropyError> {
    let output = {
        let mut replayer =
            replayer.lock().map_err(|_| EntropyError::new(port, "replayer lock poisoned"))?;
        let interaction = replayer
            .next_interaction(port, method)
            .map_err(|e| EntropyError::new(port, e.to_string()))?;
        interaction.output.clone()
    };

    if let Some(err) = output.get("Err") {
        let msg = err.as_str().unwrap_or("unknown error");
        let prefix = format!("{port}: ");
        return Err(EntropyError::new(port, msg.strip_prefix(&prefix).unwrap_or(msg)));
    }
    output.get("Ok").cloned().ok_or_else(|| {
        EntropyError::new(port, format!("{method}: malformed recorded output {output}"))
    })
}
