//! Instruction word builders for tests.
//!
//! Encodes MIPS-lite words field by field so tests can state programs in
//! something close to assembly. Operand order follows the usual notation:
//! destination first, e.g. `addi(1, 0, 4)` is `ADDI r1, r0, 4`.

use mips_lite_core::isa::{Opcode, OPCODE_SHIFT, RD_SHIFT, RS_SHIFT, RT_SHIFT};

/// Encodes an R-type word: `op rd, rs, rt`.
pub fn rtype(op: Opcode, rd: u8, rs: u8, rt: u8) -> u32 {
    ((op as u32) << OPCODE_SHIFT)
        | ((rs as u32) << RS_SHIFT)
        | ((rt as u32) << RT_SHIFT)
        | ((rd as u32) << RD_SHIFT)
}

/// Encodes an I-type word: `op rt, rs, imm`.
pub fn itype(op: Opcode, rt: u8, rs: u8, imm: i16) -> u32 {
    ((op as u32) << OPCODE_SHIFT)
        | ((rs as u32) << RS_SHIFT)
        | ((rt as u32) << RT_SHIFT)
        | (imm as u16 as u32)
}

pub fn add(rd: u8, rs: u8, rt: u8) -> u32 {
    rtype(Opcode::Add, rd, rs, rt)
}

pub fn sub(rd: u8, rs: u8, rt: u8) -> u32 {
    rtype(Opcode::Sub, rd, rs, rt)
}

pub fn mul(rd: u8, rs: u8, rt: u8) -> u32 {
    rtype(Opcode::Mul, rd, rs, rt)
}

pub fn or(rd: u8, rs: u8, rt: u8) -> u32 {
    rtype(Opcode::Or, rd, rs, rt)
}

pub fn and(rd: u8, rs: u8, rt: u8) -> u32 {
    rtype(Opcode::And, rd, rs, rt)
}

pub fn xor(rd: u8, rs: u8, rt: u8) -> u32 {
    rtype(Opcode::Xor, rd, rs, rt)
}

pub fn addi(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Addi, rt, rs, imm)
}

pub fn subi(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Subi, rt, rs, imm)
}

pub fn muli(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Muli, rt, rs, imm)
}

pub fn ori(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Ori, rt, rs, imm)
}

pub fn andi(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Andi, rt, rs, imm)
}

pub fn xori(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Xori, rt, rs, imm)
}

/// `LDW rt, rs, imm` — load from `rs + imm` into `rt`.
pub fn ldw(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Ldw, rt, rs, imm)
}

/// `STW rt, rs, imm` — store `rt` at `rs + imm`.
pub fn stw(rt: u8, rs: u8, imm: i16) -> u32 {
    itype(Opcode::Stw, rt, rs, imm)
}

/// `BZ rs, offset` — branch by `offset` words when `rs` is zero.
pub fn bz(rs: u8, offset: i16) -> u32 {
    itype(Opcode::Bz, 0, rs, offset)
}

/// `BEQ rs, rt, offset` — branch by `offset` words when `rs == rt`.
pub fn beq(rs: u8, rt: u8, offset: i16) -> u32 {
    itype(Opcode::Beq, rt, rs, offset)
}

/// `JR rs` — jump to the address in `rs`.
pub fn jr(rs: u8) -> u32 {
    itype(Opcode::Jr, 0, rs, 0)
}

pub fn halt() -> u32 {
    itype(Opcode::Halt, 0, 0, 0)
}
