//! Adapters for ports that have no source configured.

use chrono::{DateTime, Utc};

use crate::error::EntropyError;
use crate::ports::{Clock, EntropySource};

/// Entropy source that always fails.
pub struct UnavailableEntropy;

impl EntropySource for UnavailableEntropy {
    fn fill(&self, _buf: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::new("entropy", "port not configured; no cassette loaded for entropy"))
    }
}

/// Clock that always fails.
pub struct UnavailableClock;

impl Clock for UnavailableClock {
    fn now(&self) -> Result<DateTime<Utc>, EntropyError> {
        Err(EntropyError::new("clock", "port not configured; no cassette loaded for clock"))
    }
}
