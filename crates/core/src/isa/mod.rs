//! MIPS-lite instruction set definitions.
//!
//! This module defines the ISA-level vocabulary of the simulator:
//! 1. **Opcodes:** The 18 defined operations and their classification.
//! 2. **Categories:** The four instruction categories used for statistics.
//! 3. **Field Extraction:** Bit positions and masks for the two encodings.
//!
//! Instruction formats (bit ranges from the MSB):
//! - R-type: opcode \[31:26\], rs \[25:21\], rt \[20:16\], rd \[15:11\],
//!   unused \[10:0\]. Used by ADD, SUB, MUL, OR, AND, XOR.
//! - I-type: opcode \[31:26\], rs \[25:21\], rt \[20:16\], immediate
//!   \[15:0\] (sign-extended). Used by all other opcodes.

pub mod decode;

pub use decode::{decode, Instruction};

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the `rs` field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the `rt` field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 11;
/// Mask for the 6-bit opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Mask for a 5-bit register field after shifting.
pub const REG_MASK: u32 = 0x1F;
/// Mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Trait for extracting MIPS-lite instruction fields from a raw word.
pub trait InstructionBits {
    /// Extracts the 6-bit opcode field (bits 31-26).
    fn opcode_bits(&self) -> u8;
    /// Extracts the 5-bit `rs` field (bits 25-21).
    fn rs_bits(&self) -> u8;
    /// Extracts the 5-bit `rt` field (bits 20-16).
    fn rt_bits(&self) -> u8;
    /// Extracts the 5-bit `rd` field (bits 15-11).
    fn rd_bits(&self) -> u8;
    /// Extracts the 16-bit immediate field (bits 15-0) as a sign-extendable value.
    fn imm_bits(&self) -> i16;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode_bits(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rs_bits(&self) -> u8 {
        ((self >> RS_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rt_bits(&self) -> u8 {
        ((self >> RT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rd_bits(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn imm_bits(&self) -> i16 {
        (self & IMM_MASK) as u16 as i16
    }
}

/// Instruction category used for the per-category statistics counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// ADD, ADDI, SUB, SUBI, MUL, MULI.
    Arithmetic,
    /// OR, ORI, AND, ANDI, XOR, XORI.
    Logical,
    /// LDW, STW.
    MemoryAccess,
    /// BZ, BEQ, JR, HALT.
    ControlFlow,
}

impl Category {
    /// All categories, in reporting order.
    pub const ALL: [Category; 4] = [
        Category::Arithmetic,
        Category::Logical,
        Category::MemoryAccess,
        Category::ControlFlow,
    ];

    /// Lowercase label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Category::Arithmetic => "arithmetic",
            Category::Logical => "logical",
            Category::MemoryAccess => "memory_access",
            Category::ControlFlow => "control_flow",
        }
    }
}

/// The 18 defined MIPS-lite opcodes.
///
/// The discriminant is the 6-bit encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Add = 0,
    Addi = 1,
    Sub = 2,
    Subi = 3,
    Mul = 4,
    Muli = 5,
    Or = 6,
    Ori = 7,
    And = 8,
    Andi = 9,
    Xor = 10,
    Xori = 11,
    Ldw = 12,
    Stw = 13,
    Bz = 14,
    Beq = 15,
    Jr = 16,
    Halt = 17,
}

impl Opcode {
    /// Looks up the opcode for a raw 6-bit field; `None` for undefined codes.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Opcode::Add),
            1 => Some(Opcode::Addi),
            2 => Some(Opcode::Sub),
            3 => Some(Opcode::Subi),
            4 => Some(Opcode::Mul),
            5 => Some(Opcode::Muli),
            6 => Some(Opcode::Or),
            7 => Some(Opcode::Ori),
            8 => Some(Opcode::And),
            9 => Some(Opcode::Andi),
            10 => Some(Opcode::Xor),
            11 => Some(Opcode::Xori),
            12 => Some(Opcode::Ldw),
            13 => Some(Opcode::Stw),
            14 => Some(Opcode::Bz),
            15 => Some(Opcode::Beq),
            16 => Some(Opcode::Jr),
            17 => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Statistics category of this opcode.
    pub fn category(self) -> Category {
        match self {
            Opcode::Add | Opcode::Addi | Opcode::Sub | Opcode::Subi | Opcode::Mul | Opcode::Muli => {
                Category::Arithmetic
            }
            Opcode::Or | Opcode::Ori | Opcode::And | Opcode::Andi | Opcode::Xor | Opcode::Xori => {
                Category::Logical
            }
            Opcode::Ldw | Opcode::Stw => Category::MemoryAccess,
            Opcode::Bz | Opcode::Beq | Opcode::Jr | Opcode::Halt => Category::ControlFlow,
        }
    }

    /// R-type opcodes carry an `rd` field; everything else is I-type.
    pub fn is_r_type(self) -> bool {
        matches!(
            self,
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Or | Opcode::And | Opcode::Xor
        )
    }

    /// Whether this opcode commits a register at Writeback.
    ///
    /// R-type opcodes write `rd`; ADDI, SUBI, MULI, ORI, ANDI, XORI and LDW
    /// write `rt`.
    pub fn writes_register(self) -> bool {
        self.is_r_type()
            || matches!(
                self,
                Opcode::Addi
                    | Opcode::Subi
                    | Opcode::Muli
                    | Opcode::Ori
                    | Opcode::Andi
                    | Opcode::Xori
                    | Opcode::Ldw
            )
    }

    /// Whether `rt` is read as a source operand (R-type plus BEQ and STW).
    pub fn reads_rt(self) -> bool {
        self.is_r_type() || matches!(self, Opcode::Beq | Opcode::Stw)
    }

    /// LDW.
    pub fn is_load(self) -> bool {
        self == Opcode::Ldw
    }

    /// STW.
    pub fn is_store(self) -> bool {
        self == Opcode::Stw
    }

    /// BZ or BEQ (conditional, resolved in Execute).
    pub fn is_branch(self) -> bool {
        matches!(self, Opcode::Bz | Opcode::Beq)
    }

    /// JR (unconditional register jump).
    pub fn is_jump(self) -> bool {
        self == Opcode::Jr
    }

    /// HALT.
    pub fn is_halt(self) -> bool {
        self == Opcode::Halt
    }
}
