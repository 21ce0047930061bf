//! General-purpose register file.
//!
//! This module implements the 32-entry register file:
//! 1. **Storage:** 32 unsigned 32-bit words, all zero at construction.
//! 2. **Invariant Enforcement:** Register `r0` is hardwired to zero; reads
//!    yield 0 and writes are discarded.

use crate::common::constants::NUM_REGISTERS;

/// General-purpose register file.
///
/// Register `r0` is hardwired to zero and cannot be modified. Callers
/// guarantee indices are in `[0, 31]`; the 5-bit register fields of the
/// instruction encodings make anything else unrepresentable.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value. Register `r0` always returns 0.
    pub fn read(&self, idx: u8) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx as usize]
        }
    }

    /// Writes a register value. Writes to `r0` are discarded.
    pub fn write(&mut self, idx: u8, val: u32) {
        if idx != 0 {
            self.regs[idx as usize] = val;
        }
    }

    /// Dumps all registers to stderr in pairs, for tracing.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            eprintln!(
                "r{:<2} = {:#010x}    r{:<2} = {:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
