//! Data hazard detection and operand forwarding.
//!
//! This module implements the logic for keeping dependent instructions
//! consistent. It provides:
//! 1. **Hazard Detection:** A pure predicate deciding whether the Decode
//!    stage must stall this cycle.
//! 2. **Operand Forwarding:** Resolution of source values from the Execute
//!    and Memory slots ahead of the register file.
//!
//! Both functions are pure over (decode sources, execute slot, memory slot,
//! forwarding flag) to allow table-driven testing.
//!
//! Stall policy:
//!
//! | Condition                         | no forwarding | forwarding |
//! |-----------------------------------|---------------|------------|
//! | hazard vs Execute, non-load       | stall         | no stall   |
//! | hazard vs Execute, LDW (load-use) | stall         | stall      |
//! | hazard vs Memory, any writer      | stall         | no stall   |

use crate::core::gpr::RegisterFile;
use crate::core::pipeline::latches::StageEntry;
use crate::isa::Instruction;

/// Whether a source register `src` conflicts with the destination of an
/// occupied later-stage slot. Register 0 never hazards.
fn conflicts(src: u8, slot: Option<&StageEntry>) -> bool {
    src != 0 && slot.is_some_and(|entry| entry.dest == Some(src))
}

/// Decides whether the instruction in Decode must stall this cycle.
///
/// Evaluated against the post-execute view of the pipeline: `execute` and
/// `memory` are the slots as they stand after the Execute and Memory stages
/// have run, before advancement.
///
/// # Arguments
///
/// * `decode` - The instruction sitting in the Decode slot.
/// * `execute` - Occupant of the Execute slot, if any.
/// * `memory` - Occupant of the Memory slot, if any.
/// * `forwarding` - Whether operand forwarding is enabled.
pub fn stall_required(
    decode: &Instruction,
    execute: Option<&StageEntry>,
    memory: Option<&StageEntry>,
    forwarding: bool,
) -> bool {
    let sources = [Some(decode.rs()), decode.reads_rt().then(|| decode.rt())];

    for src in sources.into_iter().flatten() {
        if conflicts(src, execute) {
            // Load results only materialize in the Memory stage, so a
            // load-use hazard costs one stall even with forwarding.
            let producer_is_load = execute.is_some_and(|e| e.inst.is_load());
            if !forwarding || producer_is_load {
                return true;
            }
        }
        if !forwarding && conflicts(src, memory) {
            return true;
        }
    }
    false
}

/// Resolves the value of a source register for the Decode stage.
///
/// With forwarding enabled the priority is: Execute's ALU result (when the
/// producer is not a load), then Memory's result (load data for LDW,
/// otherwise the ALU result), then the register file. With forwarding
/// disabled the hazard unit has already stalled in every case that would
/// require forwarding, so the register file is authoritative.
pub fn resolve_source(
    src: u8,
    execute: Option<&StageEntry>,
    memory: Option<&StageEntry>,
    regs: &RegisterFile,
    forwarding: bool,
) -> u32 {
    if forwarding && src != 0 {
        if let Some(ex) = execute {
            if ex.dest == Some(src) && !ex.inst.is_load() {
                return ex.alu;
            }
        }
        if let Some(mem) = memory {
            if mem.dest == Some(src) {
                return if mem.inst.is_load() {
                    mem.load_data
                } else {
                    mem.alu
                };
            }
        }
    }
    regs.read(src)
}
