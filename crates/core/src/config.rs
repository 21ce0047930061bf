//! Configuration system for the simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (cycle budget, forwarding, tracing).
//! 2. **Structure:** A flat config deserializable from JSON or built with
//!    `SimConfig::default()` for the CLI.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline behavior when not explicitly overridden.
pub mod defaults {
    /// Maximum number of cycles the runner executes before giving up.
    ///
    /// Bounds runs of programs that never reach a HALT instruction.
    pub const CYCLE_BUDGET: u64 = 100_000;

    /// Operand forwarding is disabled by default (stall-only hazard policy).
    pub const FORWARDING: bool = false;

    /// Per-cycle pipeline tracing to stderr is disabled by default.
    pub const TRACE: bool = false;

    pub(super) fn cycle_budget() -> u64 {
        CYCLE_BUDGET
    }
}

/// Simulation run configuration.
///
/// Deserializable from JSON; missing fields take their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Enable operand forwarding from Execute and Memory into Decode.
    pub forwarding: bool,
    /// Print a pipeline occupancy diagram to stderr each cycle.
    pub trace: bool,
    /// Maximum number of cycles to run before reporting budget exhaustion.
    #[serde(default = "defaults::cycle_budget")]
    pub cycle_budget: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            forwarding: defaults::FORWARDING,
            trace: defaults::TRACE,
            cycle_budget: defaults::CYCLE_BUDGET,
        }
    }
}
