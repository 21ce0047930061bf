//! Simulation statistics collection.
//!
//! This module tracks the metrics reported after a run. It provides:
//! 1. **Instruction mix:** Counts by category (arithmetic, logical, memory
//!    access, control flow), incremented once per instruction at Decode.
//! 2. **Modification sets:** Registers committed at Writeback and memory
//!    addresses written at the Memory stage, with set semantics.
//! 3. **Timing:** Cycle and stall counters, plus a data-hazard counter for
//!    derived metrics.

use std::collections::BTreeSet;

use crate::isa::Category;

/// Simulation statistics tracking instruction mix, state modification, and timing.
///
/// All counters are monotonically non-decreasing. A flushed instruction that
/// never reaches Decode contributes nothing.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Total pipeline cycles elapsed.
    pub cycles: u64,
    /// Total cycles spent stalled (one per bubble inserted into Execute).
    pub stalls: u64,
    /// Number of distinct data-hazard events (a run of consecutive stall
    /// cycles charged to one dependent instruction counts once).
    pub data_hazards: u64,

    counts: [u64; Category::ALL.len()],
    registers: BTreeSet<u8>,
    memory_addresses: BTreeSet<u32>,
}

impl SimStats {
    /// Creates an empty statistics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one decoded instruction of the given category.
    pub fn increment_category(&mut self, category: Category) {
        self.counts[category as usize] += 1;
    }

    /// Returns the number of instructions decoded in the given category.
    pub fn category_count(&self, category: Category) -> u64 {
        self.counts[category as usize]
    }

    /// Returns the total number of instructions decoded across all categories.
    pub fn total_instructions(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Records a register as modified at Writeback.
    ///
    /// Register 0 never reaches this point; Writeback skips it entirely.
    pub fn add_register(&mut self, reg: u8) {
        self.registers.insert(reg);
    }

    /// Records a memory address as written at the Memory stage.
    pub fn add_memory_address(&mut self, addr: u32) {
        self.memory_addresses.insert(addr);
    }

    /// Registers observed as modified, in ascending index order.
    pub fn registers(&self) -> &BTreeSet<u8> {
        &self.registers
    }

    /// Memory addresses observed as written, in ascending order.
    pub fn memory_addresses(&self) -> &BTreeSet<u32> {
        &self.memory_addresses
    }

    /// Average stall cycles per data-hazard event; 0 when no hazard occurred.
    pub fn average_stalls_per_hazard(&self) -> f64 {
        if self.data_hazards == 0 {
            return 0.0;
        }
        self.stalls as f64 / self.data_hazards as f64
    }
}
