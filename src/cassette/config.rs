//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Each port can optionally have its own
/// cassette file for replay. Ports without a cassette path fail every call
/// during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the entropy port cassette file.
    pub entropy: Option<PathBuf>,
    /// Path to the clock port cassette file.
    pub clock: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the entropy port.
    pub entropy: Option<CassetteReplayer>,
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Returns a config where all port paths are `None`. Any port called
    /// during replay fails because no cassette is loaded.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Config for the per-port cassettes of a recording session directory.
    ///
    /// Expects the layout written by `RecordingSession`:
    /// `<dir>/entropy.cassette.yaml` and `<dir>/clock.cassette.yaml`.
    #[must_use]
    pub fn session_dir(dir: &Path) -> Self {
        Self {
            entropy: Some(dir.join("entropy.cassette.yaml")),
            clock: Some(dir.join("clock.cassette.yaml")),
        }
    }

    /// Read and parse a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read_cassette(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Load a monolithic cassette file and create a single replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_monolithic(path: &Path) -> Result<CassetteReplayer, String> {
        Self::read_cassette(path).map(|cassette| CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            entropy: self.entropy.as_deref().map(Self::load_monolithic).transpose()?,
            clock: self.clock.as_deref().map(Self::load_monolithic).transpose()?,
        })
    }
}
