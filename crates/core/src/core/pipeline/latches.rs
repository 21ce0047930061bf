//! Pipeline stage slots.
//!
//! This module defines the record carried through the five stage slots:
//! 1. **Instruction Flow:** One owned record per occupied slot; a bubble is
//!    the empty slot (`None`).
//! 2. **Captured State:** Operand values resolved at Decode, the ALU result
//!    from Execute, and the loaded word from the Memory stage.
//!
//! Advancement moves a record from one slot into the next; slots never
//! share state.

use crate::isa::Instruction;

/// The five ordered pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum Stage {
    Fetch = 0,
    Decode = 1,
    Execute = 2,
    Memory = 3,
    Writeback = 4,
}

impl Stage {
    /// Slot-array index of this stage.
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }
}

/// An in-flight instruction occupying a pipeline slot.
#[derive(Clone, Debug)]
pub struct StageEntry {
    /// The decoded instruction.
    pub inst: Instruction,
    /// Fetch-time program counter of this instruction.
    pub pc: u32,
    /// `rs` value as captured or forwarded at Decode.
    pub rs_val: u32,
    /// `rt` value as captured or forwarded at Decode (0 when `rt` is not a
    /// source).
    pub rt_val: u32,
    /// ALU result, or the effective address for LDW/STW, or the branch
    /// target for a taken branch.
    pub alu: u32,
    /// Word loaded by the Memory stage (LDW only).
    pub load_data: u32,
    /// Destination register to commit at Writeback, populated at Decode.
    pub dest: Option<u8>,
}

impl StageEntry {
    /// Creates a freshly fetched entry; Decode fills the operand fields.
    pub fn fetched(inst: Instruction, pc: u32) -> Self {
        Self {
            inst,
            pc,
            rs_val: 0,
            rt_val: 0,
            alu: 0,
            load_data: 0,
            dest: None,
        }
    }
}
