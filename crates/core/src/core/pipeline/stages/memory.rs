//! Memory (MEM) stage.
//!
//! LDW reads the word at the effective address into the slot's load field;
//! STW writes the captured `rt` value and records the address as modified.
//! Every other instruction passes through untouched.

use crate::common::error::SimError;
use crate::core::pipeline::latches::Stage;
use crate::core::Engine;

/// Executes the memory access stage.
pub fn memory_stage(eng: &mut Engine) -> Result<(), SimError> {
    let Some(entry) = eng.slots[Stage::Memory.idx()].as_mut() else {
        return Ok(());
    };

    if entry.inst.is_load() {
        entry.load_data = eng.mem.read_data(entry.alu)?;
        if eng.trace {
            eprintln!(
                "MEM pc={:#010x} load [{}] -> {}",
                entry.pc, entry.alu, entry.load_data
            );
        }
    } else if entry.inst.is_store() {
        eng.mem.write_data(entry.alu, entry.rt_val)?;
        eng.stats.add_memory_address(entry.alu);
        if eng.trace {
            eprintln!(
                "MEM pc={:#010x} store [{}] <- {}",
                entry.pc, entry.alu, entry.rt_val
            );
        }
    }
    Ok(())
}
