//! Accumulates port interactions and writes them out as a YAML cassette.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Buffers a cassette in memory until [`CassetteRecorder::finish`].
///
/// Sequence numbers are positions in the buffer, so they are dense and
/// strictly increasing across every port that shares the recorder.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    cassette: Cassette,
}

impl CassetteRecorder {
    /// Starts an empty cassette named `name`, destined for `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let cassette = Cassette {
            name: name.into(),
            recorded_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            interactions: Vec::new(),
        };
        Self { path: path.into(), cassette }
    }

    /// Appends one `port::method` call with its JSON input and output.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.cassette.interactions.len() as u64;
        self.cassette.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Number of interactions buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cassette.interactions.len()
    }

    /// True until the first interaction is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cassette.interactions.is_empty()
    }

    /// Stamps the cassette with the current time and writes it to disk,
    /// returning the path written.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if serialization or the write fails.
    pub fn finish(mut self) -> Result<PathBuf, std::io::Error> {
        self.cassette.recorded_at = Utc::now();
        let yaml = serde_yaml::to_string(&self.cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        tracing::debug!(
            path = %self.path.display(),
            interactions = self.cassette.interactions.len(),
            "cassette written"
        );
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::config::CassetteConfig;
    use serde_json::json;

    #[test]
    fn sequence_numbers_span_ports() {
        let path = std::env::temp_dir().join("keymint_recorder_seq.cassette.yaml");
        let mut recorder = CassetteRecorder::new(&path, "seq");
        assert!(recorder.is_empty());

        recorder.record("entropy", "fill", json!({"len": 2}), json!({"Ok": [7, 9]}));
        recorder.record("clock", "now", json!(null), json!({"Ok": "2024-01-01T00:00:00Z"}));
        recorder.record("entropy", "fill", json!({"len": 1}), json!({"Err": "gone"}));
        assert_eq!(recorder.len(), 3);

        let written = recorder.finish().unwrap();
        assert_eq!(written, path);

        let cassette = CassetteConfig::read_cassette(&written).unwrap();
        assert_eq!(cassette.name, "seq");
        assert_eq!(cassette.version, env!("CARGO_PKG_VERSION"));
        let seqs: Vec<u64> = cassette.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, [0, 1, 2]);
        let ports: Vec<&str> = cassette.interactions.iter().map(|i| i.port.as_str()).collect();
        assert_eq!(ports, ["entropy", "clock", "entropy"]);

        let _ = std::fs::remove_file(&written);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let recorder = CassetteRecorder::new("/nonexistent/dir/x.cassette.yaml", "nowhere");
        assert!(recorder.finish().is_err());
    }
}
