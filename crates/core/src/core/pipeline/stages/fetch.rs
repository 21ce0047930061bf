//! Fetch (IF) stage.
//!
//! Reads the instruction word at the program counter, decodes it, and
//! places it into the Fetch slot. Fetching a HALT latches the halt flag and
//! leaves the program counter at the HALT address so that termination
//! reports the HALT's own location; already-fetched instructions still
//! drain through the later stages.

use crate::common::constants::WORD_SIZE;
use crate::common::error::SimError;
use crate::core::pipeline::latches::{Stage, StageEntry};
use crate::core::Engine;
use crate::isa::decode;

/// Executes the instruction fetch stage.
///
/// Does nothing when the Fetch slot is still occupied (the engine is
/// stalled) or when halt has been latched.
pub fn fetch_stage(eng: &mut Engine) -> Result<(), SimError> {
    if eng.slots[Stage::Fetch.idx()].is_some() || eng.halt_latched {
        return Ok(());
    }

    let raw = eng.mem.read_instruction(eng.pc)?;
    let inst = decode(raw);
    let entry = StageEntry::fetched(inst, eng.pc);

    if inst.is_halt() {
        eng.halt_latched = true;
    } else {
        eng.pc = eng.pc.wrapping_add(WORD_SIZE);
    }

    if eng.trace {
        eprintln!("IF  pc={:#010x} inst={:#010x}", entry.pc, raw);
    }
    eng.slots[Stage::Fetch.idx()] = Some(entry);
    Ok(())
}
