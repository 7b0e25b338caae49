//! Live adapters for real external interactions.

pub mod clock;
pub mod entropy;

pub use clock::LiveClock;
pub use entropy::OsEntropy;
