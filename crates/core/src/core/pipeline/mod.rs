//! Five-stage pipeline machinery.

pub mod hazards;
pub mod latches;
pub mod stages;

pub use latches::{Stage, StageEntry};
