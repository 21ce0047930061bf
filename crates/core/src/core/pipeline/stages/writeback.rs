//! Writeback (WB) stage.
//!
//! Commits the instruction's result to its destination register: the loaded
//! word for LDW, otherwise the ALU result. Register 0 is skipped entirely
//! since it never actually mutates state, and only genuine commits are
//! recorded in the modified-register set.

use crate::core::pipeline::latches::Stage;
use crate::core::Engine;

/// Executes the writeback stage.
pub fn writeback_stage(eng: &mut Engine) {
    let Some(entry) = eng.slots[Stage::Writeback.idx()].as_ref() else {
        return;
    };
    let Some(dest) = entry.dest else {
        return;
    };
    if dest == 0 {
        return;
    }

    let value = if entry.inst.is_load() {
        entry.load_data
    } else {
        entry.alu
    };
    eng.regs.write(dest, value);
    eng.stats.add_register(dest);

    if eng.trace {
        eprintln!("WB  pc={:#010x} r{} <- {}", entry.pc, dest, value);
    }
}
