//! Decode (ID) stage.
//!
//! Records the instruction's category, resolves the source operand values
//! (directly from the register file or forwarded from Execute/Memory), and
//! populates the destination register per the register-write rule. The
//! engine only invokes this stage on non-stalled cycles; a call while
//! stalled is an internal invariant violation.

use crate::common::error::SimError;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::Stage;
use crate::core::Engine;

/// Executes the instruction decode stage.
///
/// # Errors
///
/// `UnexpectedStallRead` if invoked while the engine is stalled; register
/// reads on a stalled cycle would observe values the hazard unit has
/// declared stale.
pub fn decode_stage(eng: &mut Engine) -> Result<(), SimError> {
    if eng.stall {
        return Err(SimError::UnexpectedStallRead);
    }
    let Some(entry) = eng.slots[Stage::Decode.idx()].as_ref() else {
        return Ok(());
    };
    let inst = entry.inst;
    let pc = entry.pc;

    if let Some(category) = inst.category() {
        eng.stats.increment_category(category);
    }

    let execute = eng.slots[Stage::Execute.idx()].as_ref();
    let memory = eng.slots[Stage::Memory.idx()].as_ref();
    let rs_val = hazards::resolve_source(inst.rs(), execute, memory, &eng.regs, eng.forwarding);
    let rt_val = if inst.reads_rt() {
        hazards::resolve_source(inst.rt(), execute, memory, &eng.regs, eng.forwarding)
    } else {
        0
    };

    if let Some(entry) = eng.slots[Stage::Decode.idx()].as_mut() {
        entry.rs_val = rs_val;
        entry.rt_val = rt_val;
        entry.dest = inst.dest_register();
    }

    if eng.trace {
        eprintln!("ID  pc={:#010x} rs={} rt={}", pc, rs_val, rt_val);
    }
    Ok(())
}
