use mips_lite_core::stats::SimStats;
use mips_lite_core::{Engine, RunOutcome, SimConfig, Simulator};

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Builds a simulator over `program`, loaded at address 0, with all
    /// registers zeroed and the default cycle budget.
    pub fn load_program(program: &[u32], forwarding: bool) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = SimConfig {
            forwarding,
            ..SimConfig::default()
        };
        let sim = Simulator::from_image(program.to_vec(), &config)
            .expect("test programs fit in memory");
        Self { sim }
    }

    /// Seeds a data word before the run starts.
    pub fn with_data(mut self, addr: u32, value: u32) -> Self {
        self.sim
            .engine
            .mem
            .write_data(addr, value)
            .expect("test data addresses are aligned and in bounds");
        self
    }

    /// Runs to completion, asserting the program halts within budget.
    pub fn run_to_completion(&mut self) {
        let outcome = self.sim.run().expect("program runs without fault");
        assert_eq!(outcome, RunOutcome::Completed, "program failed to halt");
    }

    /// Convenience accessor for the engine.
    pub fn engine(&self) -> &Engine {
        &self.sim.engine
    }

    /// Mutable convenience accessor for the engine.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.sim.engine
    }

    /// Read a general-purpose register value.
    pub fn reg(&self, idx: u8) -> u32 {
        self.sim.engine.regs.read(idx)
    }

    /// The run statistics.
    pub fn stats(&self) -> &SimStats {
        &self.sim.engine.stats
    }
}
