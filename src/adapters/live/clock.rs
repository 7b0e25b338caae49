//! Wall-clock time for the timestamped layout.

use chrono::{DateTime, Utc};

use crate::error::EntropyError;
use crate::ports::clock::Clock;

/// Reads the host's UTC wall clock. Never fails; range checks happen in the
/// generator, which owns the 48-bit millisecond field.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> Result<DateTime<Utc>, EntropyError> {
        Ok(Utc::now())
    }
}
