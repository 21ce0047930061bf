//! Instruction decoder.
//!
//! Pure function from a raw 32-bit word to an immutable decoded record.
//! Decoding never fails: a word whose opcode field is outside the defined
//! set still decodes (with no recognized operation), and the engine raises
//! `InvalidOpcode` only if such a word reaches the Execute stage. This
//! matters because speculatively fetched data words are flushed by taken
//! branches before they would ever execute.

use crate::isa::{Category, InstructionBits, Opcode};

/// Immutable decoded instruction record.
///
/// `rd` is present iff the instruction is R-type; the sign-extended
/// immediate is present iff it is I-type. Undefined opcodes decode with the
/// I-type shape (the immediate field is still extracted for diagnostics).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    raw: u32,
    opcode_bits: u8,
    op: Option<Opcode>,
    rs: u8,
    rt: u8,
    rd: Option<u8>,
    imm: Option<i32>,
}

/// Decodes a raw 32-bit instruction word.
pub fn decode(raw: u32) -> Instruction {
    let opcode_bits = raw.opcode_bits();
    let op = Opcode::from_bits(opcode_bits);
    let r_type = op.is_some_and(Opcode::is_r_type);

    Instruction {
        raw,
        opcode_bits,
        op,
        rs: raw.rs_bits(),
        rt: raw.rt_bits(),
        rd: r_type.then(|| raw.rd_bits()),
        // 16-bit immediate, two's-complement sign-extended to 32 bits.
        imm: (!r_type).then(|| i32::from(raw.imm_bits())),
    }
}

impl Instruction {
    /// The raw 32-bit encoding, kept for diagnostics.
    pub fn raw(&self) -> u32 {
        self.raw
    }

    /// The raw 6-bit opcode field.
    pub fn opcode_bits(&self) -> u8 {
        self.opcode_bits
    }

    /// The recognized opcode, or `None` for an undefined encoding.
    pub fn op(&self) -> Option<Opcode> {
        self.op
    }

    /// Statistics category, or `None` for an undefined encoding.
    pub fn category(&self) -> Option<Category> {
        self.op.map(Opcode::category)
    }

    /// First source register index.
    pub fn rs(&self) -> u8 {
        self.rs
    }

    /// Second register field: source for R-type, BEQ and STW; destination
    /// for the writing I-type opcodes.
    pub fn rt(&self) -> u8 {
        self.rt
    }

    /// Destination register field; present iff R-type.
    pub fn rd(&self) -> Option<u8> {
        self.rd
    }

    /// Sign-extended immediate; present iff I-type.
    pub fn imm(&self) -> Option<i32> {
        self.imm
    }

    /// Whether `rt` is read as a source operand.
    pub fn reads_rt(&self) -> bool {
        self.op.is_some_and(Opcode::reads_rt)
    }

    /// Whether this instruction commits a register at Writeback.
    pub fn writes_register(&self) -> bool {
        self.op.is_some_and(Opcode::writes_register)
    }

    /// The register committed at Writeback: `rd` for R-type, `rt` for the
    /// writing I-type opcodes, `None` otherwise.
    pub fn dest_register(&self) -> Option<u8> {
        if !self.writes_register() {
            return None;
        }
        Some(self.rd.unwrap_or(self.rt))
    }

    /// LDW.
    pub fn is_load(&self) -> bool {
        self.op.is_some_and(Opcode::is_load)
    }

    /// STW.
    pub fn is_store(&self) -> bool {
        self.op.is_some_and(Opcode::is_store)
    }

    /// BZ or BEQ.
    pub fn is_branch(&self) -> bool {
        self.op.is_some_and(Opcode::is_branch)
    }

    /// JR.
    pub fn is_jump(&self) -> bool {
        self.op.is_some_and(Opcode::is_jump)
    }

    /// HALT.
    pub fn is_halt(&self) -> bool {
        self.op.is_some_and(Opcode::is_halt)
    }
}
