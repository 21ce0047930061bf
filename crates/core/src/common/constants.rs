//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Memory Constants:** Word size and the fixed 4 KiB memory geometry.
//! 2. **Register Constants:** General-purpose register count.

/// Size of one memory word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Number of addressable words in memory (4 KiB / 4 bytes per word).
pub const MEM_WORDS: usize = 1024;

/// Total addressable memory in bytes; addresses must be below this bound.
pub const MEM_BYTES: u32 = (MEM_WORDS as u32) * WORD_SIZE;

/// Number of pipeline stages.
pub const NUM_STAGES: usize = 5;
