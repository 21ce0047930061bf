//! Execute (EX) stage.
//!
//! This module implements the third stage of the pipeline. It performs:
//! 1. **Arithmetic Execution:** ALU operations with two's-complement
//!    wrapping for the arithmetic opcodes and bitwise operations on the raw
//!    words for the logical opcodes.
//! 2. **Address Generation:** Effective addresses for LDW and STW.
//! 3. **Branch Resolution:** BZ/BEQ comparison and JR redirection; a taken
//!    branch records its target for the engine to apply after this stage.
//! 4. **Halt:** A HALT reaching Execute re-asserts the latched halt flag.

use crate::common::constants::WORD_SIZE;
use crate::common::error::SimError;
use crate::core::pipeline::latches::Stage;
use crate::core::Engine;
use crate::isa::Opcode;

/// Branch target: a word offset relative to the branch's own fetch-time pc.
fn branch_target(pc: u32, imm: i32) -> u32 {
    (pc as i32).wrapping_add(imm.wrapping_mul(WORD_SIZE as i32)) as u32
}

/// Executes the execute stage.
///
/// # Errors
///
/// `InvalidOpcode` if the slot holds a word whose opcode is outside the
/// defined set; this indicates corrupted memory or a program that ran into
/// its own data.
pub fn execute_stage(eng: &mut Engine) -> Result<(), SimError> {
    let Some(entry) = eng.slots[Stage::Execute.idx()].as_mut() else {
        return Ok(());
    };
    let inst = entry.inst;
    let Some(op) = inst.op() else {
        return Err(SimError::InvalidOpcode {
            opcode: inst.opcode_bits(),
            pc: entry.pc,
        });
    };

    let rs = entry.rs_val;
    let rt = entry.rt_val;
    let imm = inst.imm().unwrap_or(0);
    let mut taken: Option<u32> = None;
    let mut halt = false;

    entry.alu = match op {
        Opcode::Add => (rs as i32).wrapping_add(rt as i32) as u32,
        Opcode::Addi => (rs as i32).wrapping_add(imm) as u32,
        Opcode::Sub => (rs as i32).wrapping_sub(rt as i32) as u32,
        Opcode::Subi => (rs as i32).wrapping_sub(imm) as u32,
        Opcode::Mul => (rs as i32).wrapping_mul(rt as i32) as u32,
        Opcode::Muli => (rs as i32).wrapping_mul(imm) as u32,
        Opcode::Or => rs | rt,
        Opcode::Ori => rs | imm as u32,
        Opcode::And => rs & rt,
        Opcode::Andi => rs & imm as u32,
        Opcode::Xor => rs ^ rt,
        Opcode::Xori => rs ^ imm as u32,
        Opcode::Ldw | Opcode::Stw => (rs as i32).wrapping_add(imm) as u32,
        Opcode::Bz => {
            if rs == 0 {
                let target = branch_target(entry.pc, imm);
                taken = Some(target);
                target
            } else {
                0
            }
        }
        Opcode::Beq => {
            if rs == rt {
                let target = branch_target(entry.pc, imm);
                taken = Some(target);
                target
            } else {
                0
            }
        }
        Opcode::Jr => {
            taken = Some(rs);
            rs
        }
        Opcode::Halt => {
            halt = true;
            0
        }
    };
    let pc = entry.pc;

    if let Some(target) = taken {
        eng.branch_taken = true;
        eng.branch_target = target;
    }
    if halt {
        eng.halt_latched = true;
    }
    if eng.trace {
        eprintln!("EX  pc={:#010x} taken={}", pc, taken.is_some());
    }
    Ok(())
}
