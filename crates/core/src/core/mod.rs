//! Pipeline engine.
//!
//! This module implements the per-cycle state machine driving the five
//! stage slots. It performs:
//! 1. **Stage Sequencing:** Writeback, memory, execute, branch redirection,
//!    hazard evaluation, decode, and fetch, strictly in that order.
//! 2. **Hazard Handling:** Stall insertion (a bubble into Execute while
//!    Fetch and Decode hold position) and operand forwarding.
//! 3. **Control Flow:** Taken branches resolved at Execute override the
//!    program counter and squash the two younger stages.
//! 4. **Termination:** A fetched HALT latches the halt flag; the run is
//!    finished once the pipeline has drained.

pub mod gpr;
pub mod pipeline;

use crate::common::constants::NUM_STAGES;
use crate::common::error::SimError;
use crate::core::gpr::RegisterFile;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{Stage, StageEntry};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage,
};
use crate::mem::Memory;
use crate::stats::SimStats;

/// Five-stage in-order pipeline engine.
///
/// Owns its collaborators (register file, memory, statistics) for the whole
/// run; embedders inspect them through the public fields after completion.
pub struct Engine {
    /// General-purpose registers, mutated only by Writeback.
    pub regs: RegisterFile,
    /// Unified instruction/data memory.
    pub mem: Memory,
    /// Run statistics.
    pub stats: SimStats,
    /// Print per-cycle pipeline state to stderr.
    pub trace: bool,

    pub(crate) slots: [Option<StageEntry>; NUM_STAGES],
    pub(crate) pc: u32,
    pub(crate) forwarding: bool,
    pub(crate) stall: bool,
    pub(crate) branch_taken: bool,
    pub(crate) branch_target: u32,
    pub(crate) halt_latched: bool,
    pub(crate) program_finished: bool,
    in_hazard: bool,
}

impl Engine {
    /// Creates an engine over the given collaborators.
    ///
    /// The program counter starts at 0 with all slots empty and the halt
    /// and finished flags clear.
    pub fn new(regs: RegisterFile, mem: Memory, stats: SimStats, forwarding: bool) -> Self {
        Self {
            regs,
            mem,
            stats,
            trace: false,
            slots: [None, None, None, None, None],
            pc: 0,
            forwarding,
            stall: false,
            branch_taken: false,
            branch_target: 0,
            halt_latched: false,
            program_finished: false,
            in_hazard: false,
        }
    }

    /// Advances the machine by exactly one pipeline tick.
    ///
    /// A no-op once the program has finished, so extra calls leave all
    /// observable state unchanged.
    pub fn cycle(&mut self) -> Result<(), SimError> {
        if self.program_finished {
            return Ok(());
        }
        self.stats.cycles += 1;
        if self.trace {
            self.print_pipeline_diagram();
        }

        writeback_stage(self);
        memory_stage(self)?;
        execute_stage(self)?;

        if self.branch_taken {
            // Redirect: squash the speculatively fetched path before the
            // next fetch. A latched HALT can only be sitting on that path,
            // because fetch stops once halt latches and the resolving
            // branch is therefore older than anything in Fetch or Decode.
            self.pc = self.branch_target;
            self.slots[Stage::Fetch.idx()] = None;
            self.slots[Stage::Decode.idx()] = None;
            self.stall = false;
            self.in_hazard = false;
            self.branch_taken = false;
            self.halt_latched = false;
            self.advance();
            self.check_finished();
            return Ok(());
        }

        self.stall = match self.slots[Stage::Decode.idx()].as_ref() {
            Some(entry) => hazards::stall_required(
                &entry.inst,
                self.slots[Stage::Execute.idx()].as_ref(),
                self.slots[Stage::Memory.idx()].as_ref(),
                self.forwarding,
            ),
            None => false,
        };

        if self.stall {
            if !self.in_hazard {
                self.stats.data_hazards += 1;
            }
            self.in_hazard = true;
        } else {
            self.in_hazard = false;
            decode_stage(self)?;
        }
        fetch_stage(self)?;

        self.advance();
        self.check_finished();
        Ok(())
    }

    /// Moves each occupied slot one stage forward.
    ///
    /// Later stages always advance; on a stalled cycle a bubble enters
    /// Execute and the Fetch/Decode occupants hold position.
    fn advance(&mut self) {
        self.slots[Stage::Writeback.idx()] = self.slots[Stage::Memory.idx()].take();
        self.slots[Stage::Memory.idx()] = self.slots[Stage::Execute.idx()].take();
        if self.stall {
            self.slots[Stage::Execute.idx()] = None;
            self.stats.stalls += 1;
        } else {
            self.slots[Stage::Execute.idx()] = self.slots[Stage::Decode.idx()].take();
            self.slots[Stage::Decode.idx()] = self.slots[Stage::Fetch.idx()].take();
        }
    }

    fn check_finished(&mut self) {
        if self.halt_latched && self.slots.iter().all(Option::is_none) {
            self.program_finished = true;
        }
    }

    /// Current program counter: the address of the next fetch, or of the
    /// HALT instruction once halt has latched.
    pub fn program_counter(&self) -> u32 {
        self.pc
    }

    /// Whether operand forwarding is enabled.
    pub fn forwarding_enabled(&self) -> bool {
        self.forwarding
    }

    /// Whether the current cycle's hazard evaluation demanded a stall.
    pub fn is_stalled(&self) -> bool {
        self.stall
    }

    /// Whether a HALT has been observed at Fetch or Execute.
    pub fn halt_latched(&self) -> bool {
        self.halt_latched
    }

    /// Whether HALT has been observed and the pipeline has drained.
    pub fn is_program_finished(&self) -> bool {
        self.program_finished
    }

    /// The occupant of a pipeline stage, or `None` for a bubble.
    pub fn stage(&self, stage: Stage) -> Option<&StageEntry> {
        self.slots[stage.idx()].as_ref()
    }

    /// Prints the five slots to stderr, oldest stage last.
    pub fn print_pipeline_diagram(&self) {
        let fmt_stage = |slot: &Option<StageEntry>| match slot {
            Some(entry) => format!("[{:08x}]", entry.pc),
            None => format!("[{:^8}]", "-"),
        };
        eprintln!(
            "{} -> {} -> {} -> {} -> {}",
            fmt_stage(&self.slots[Stage::Fetch.idx()]),
            fmt_stage(&self.slots[Stage::Decode.idx()]),
            fmt_stage(&self.slots[Stage::Execute.idx()]),
            fmt_stage(&self.slots[Stage::Memory.idx()]),
            fmt_stage(&self.slots[Stage::Writeback.idx()]),
        );
    }
}
