//! Recording adapter for the `EntropySource` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::EntropyError;
use crate::ports::EntropySource;

/// Records entropy reads while delegating to an inner implementation.
pub struct RecordingEntropy {
    inner: Box<dyn EntropySource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Creates a new recording entropy source wrapping the given implementation.
    pub fn new(inner: Box<dyn EntropySource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl EntropySource for RecordingEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let result = self.inner.fill(buf).map(|()| buf.to_vec());
        record_result(&self.recorder, "entropy", "fill", &json!({ "len": buf.len() }), &result);
        result.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::OsEntropy;
    use crate::cassette::format::Cassette;

    struct Broken;
    impl EntropySource for Broken {
        fn fill(&self, _buf: &mut [u8]) -> Result<(), EntropyError> {
            Err(EntropyError::new("entropy", "no device"))
        }
    }

    #[test]
    fn records_fill_bytes_and_failures() {
        let dir = std::env::temp_dir().join("keymint_rec_entropy_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("entropy.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));

        // Scope the adapters so they're dropped before we try to unwrap
        let bytes = {
            let live = RecordingEntropy::new(Box::new(OsEntropy::new()), Arc::clone(&recorder));
            let mut buf = [0u8; 4];
            live.fill(&mut buf).unwrap();

            let broken = RecordingEntropy::new(Box::new(Broken), Arc::clone(&recorder));
            assert!(broken.fill(&mut [0u8; 4]).is_err());
            buf
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input, json!({"len": 4}));
        assert_eq!(cassette.interactions[0].output, json!({ "Ok": bytes.to_vec() }));
        assert_eq!(cassette.interactions[1].output, json!({"Err": "entropy: no device"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
