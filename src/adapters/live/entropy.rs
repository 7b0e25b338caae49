//! Live adapter for the `EntropySource` port.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::EntropyError;
use crate::ports::EntropySource;

/// Reads randomness straight from the operating system.
///
/// `OsRng` is a zero-sized handle, so every call goes to the platform source
/// without any lock held in this process.
pub struct OsEntropy;

impl OsEntropy {
    /// Creates a new OS entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(buf).map_err(|e| EntropyError::new("entropy", e.to_string()))
    }
}
