//! Entropy port supplying random bytes.

use crate::error::EntropyError;

/// Fills buffers with cryptographically strong random bytes.
///
/// Abstracting randomness allows deterministic replay and failure injection
/// by substituting a recorded byte stream during tests and cassette playback.
pub trait EntropySource: Send + Sync {
    /// Fills `buf` entirely, or fails without a usable result.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if the underlying source cannot be read.
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError>;
}
