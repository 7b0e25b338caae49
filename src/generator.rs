//! Identifier generation.
//!
//! An [`IdentifierGenerator`] turns bits from its entropy source (and, for
//! [`Layout::Timestamped`], its clock) into an [`Identifier`]. It keeps no
//! record of what it has issued: uniqueness comes from the bit width, not
//! from a registry, so any number of threads may share one generator or
//! build their own without coordinating.

use chrono::{DateTime, Utc};
use uuid::Builder;

use crate::config::Layout;
use crate::context::ServiceContext;
use crate::error::{EntropyError, GenerateError};
use crate::identifier::Identifier;
use crate::ports::{Clock, EntropySource};

/// Largest millisecond count that fits the 48-bit timestamp field.
const MAX_TIMESTAMP_MILLIS: u64 = (1 << 48) - 1;

/// Produces opaque identifiers from an entropy source and a clock.
pub struct IdentifierGenerator {
    ctx: ServiceContext,
    layout: Layout,
}

impl IdentifierGenerator {
    /// Creates a generator reading from the ports in `ctx`.
    #[must_use]
    pub fn new(ctx: ServiceContext, layout: Layout) -> Self {
        Self { ctx, layout }
    }

    /// Creates a generator backed by the OS random source and system clock.
    #[must_use]
    pub fn live(layout: Layout) -> Self {
        Self::new(ServiceContext::live(), layout)
    }

    /// Creates a generator from explicit port implementations.
    #[must_use]
    pub fn with_sources(
        entropy: Box<dyn EntropySource>,
        clock: Box<dyn Clock>,
        layout: Layout,
    ) -> Self {
        Self::new(ServiceContext::new(entropy, clock), layout)
    }

    /// Produces a new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EntropyUnavailable`] if the entropy source or
    /// clock cannot be read. No identifier is produced in that case and the
    /// call is not retried.
    pub fn generate(&self) -> Result<Identifier, GenerateError> {
        let uuid = match self.layout {
            Layout::Random => {
                let mut bytes = [0u8; 16];
                self.ctx.entropy.fill(&mut bytes).inspect_err(log_failure)?;
                Builder::from_random_bytes(bytes).into_uuid()
            }
            Layout::Timestamped => {
                let millis =
                    self.ctx.clock.now().and_then(unix_millis).inspect_err(log_failure)?;
                let mut bytes = [0u8; 10];
                self.ctx.entropy.fill(&mut bytes).inspect_err(log_failure)?;
                Builder::from_unix_timestamp_millis(millis, &bytes).into_uuid()
            }
        };
        Ok(Identifier::from_canonical(uuid.hyphenated().to_string()))
    }

    /// Produces `count` identifiers, or none at all if any call fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerateError`] encountered.
    pub fn generate_batch(&self, count: usize) -> Result<Vec<Identifier>, GenerateError> {
        tracing::debug!(count, layout = %self.layout, "generating batch");
        (0..count).map(|_| self.generate()).collect()
    }
}

fn log_failure(err: &EntropyError) {
    tracing::debug!(source = %err.source_name, error = %err.message, "generation failed");
}

fn unix_millis(now: DateTime<Utc>) -> Result<u64, EntropyError> {
    u64::try_from(now.timestamp_millis())
        .ok()
        .filter(|ms| *ms <= MAX_TIMESTAMP_MILLIS)
        .ok_or_else(|| {
            EntropyError::new("clock", format!("time {now} is outside the 48-bit range"))
        })
}

/// Generates one identifier from the operating system's random source.
///
/// This is the entry point for hosts that only need a fresh key string.
///
/// # Errors
///
/// Returns [`GenerateError::EntropyUnavailable`] if the OS source cannot be read.
pub fn generate_identifier() -> Result<String, GenerateError> {
    IdentifierGenerator::live(Layout::Random).generate().map(Identifier::into_string)
}
