//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveClock, OsEntropy};
use crate::adapters::recording::{RecordingClock, RecordingEntropy};
use crate::adapters::replaying::{ReplayingClock, ReplayingEntropy};
use crate::adapters::unavailable::{UnavailableClock, UnavailableEntropy};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::{Clock, EntropySource};

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external source. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Source of random bytes.
    pub entropy: Box<dyn EntropySource>,
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Creates a live context backed by the OS random source and system clock.
    #[must_use]
    pub fn live() -> Self {
        Self { entropy: Box::new(OsEntropy::new()), clock: Box::new(LiveClock) }
    }

    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(entropy: Box<dyn EntropySource>, clock: Box<dyn Clock>) -> Self {
        Self { entropy, clock }
    }

    /// Creates a recording context that wraps the live adapters.
    ///
    /// Interactions are captured into a new timestamped directory under
    /// `base`. Drop the context, then call [`RecordingSession::finish`] to
    /// write the cassettes.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(base: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(base)?;
        let ctx = Self {
            entropy: Box::new(RecordingEntropy::new(
                Box::new(OsEntropy::new()),
                std::sync::Arc::clone(&session.entropy),
            )),
            clock: Box::new(RecordingClock::new(
                Box::new(LiveClock),
                std::sync::Arc::clone(&session.clock),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer from the same cassette so that
    /// per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::read_cassette(path)?;
        Ok(Self {
            entropy: Box::new(ReplayingEntropy::new(CassetteReplayer::new(&cassette))),
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file fail every call with a
    /// "not configured" error.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            entropy: match replayers.entropy {
                Some(r) => Box::new(ReplayingEntropy::new(r)),
                None => Box::new(UnavailableEntropy),
            },
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(UnavailableClock),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = std::env::temp_dir().join("keymint_ctx_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");

        write_cassette(
            &path,
            vec![
                Interaction {
                    seq: 0,
                    port: "clock".into(),
                    method: "now".into(),
                    input: json!(null),
                    output: json!({"Ok": "2024-06-15T10:30:00Z"}),
                },
                Interaction {
                    seq: 1,
                    port: "entropy".into(),
                    method: "fill".into(),
                    input: json!({"len": 2}),
                    output: json!({"Ok": [171, 205]}),
                },
            ],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(ctx.clock.now().unwrap().to_rfc3339(), "2024-06-15T10:30:00+00:00");
        let mut buf = [0u8; 2];
        ctx.entropy.fill(&mut buf).unwrap();
        assert_eq!(buf, [0xab, 0xcd]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unspecified_port_fails_with_clear_message() {
        let ctx = ServiceContext::replaying_from(&CassetteConfig::unavailable()).unwrap();
        let err = ctx.entropy.fill(&mut [0u8; 4]).unwrap_err();
        assert!(err.message.contains("not configured"));
        assert!(ctx.clock.now().is_err());
    }

    #[test]
    fn recording_context_writes_cassettes_after_drop() {
        let base = std::env::temp_dir().join("keymint_ctx_test_recording");
        let (ctx, session) = ServiceContext::recording_at(&base).unwrap();
        ctx.entropy.fill(&mut [0u8; 8]).unwrap();
        ctx.clock.now().unwrap();
        drop(ctx);

        let dir = session.finish().unwrap();
        let entropy = CassetteConfig::read_cassette(&dir.join("entropy.cassette.yaml")).unwrap();
        let clock = CassetteConfig::read_cassette(&dir.join("clock.cassette.yaml")).unwrap();
        assert_eq!(entropy.interactions.len(), 1);
        assert_eq!(clock.interactions.len(), 1);

        let _ = std::fs::remove_dir_all(&base);
    }
}
