//! Clock wrapper that captures every time reading to a cassette.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::EntropyError;
use crate::ports::Clock;

/// Passes time readings through from `inner`, logging each one (or its
/// failure) as a `clock::now` interaction.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClock {
    /// Wraps `inner`, sharing `recorder` with the rest of the session.
    pub fn new(inner: Box<dyn Clock>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> Result<DateTime<Utc>, EntropyError> {
        let reading = self.inner.now();
        record_result(&self.recorder, "clock", "now", &(), &reading);
        reading
    }
}
