//! Port traits defining external boundaries.
//!
//! Each trait represents a source the generator reads from (randomness,
//! time). Implementations live in `src/adapters/`.

pub mod clock;
pub mod entropy;

pub use clock::Clock;
pub use entropy::EntropySource;
