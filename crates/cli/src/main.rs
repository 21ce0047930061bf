//! MIPS-lite pipeline simulator CLI.
//!
//! This binary is the single entry point for running a program image. It
//! performs:
//! 1. **Setup:** Argument parsing, image loading, engine construction.
//! 2. **Execution:** A cycle-budgeted run of the five-stage pipeline.
//! 3. **Reporting:** Instruction mix, final program counter, modified
//!    registers and memory words, and (with `-t`) timing totals.
//! 4. **Trace Output:** The final memory image written back in the input
//!    format when requested and at least one store committed.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use mips_lite_core::config::defaults;
use mips_lite_core::isa::Category;
use mips_lite_core::sim::loader;
use mips_lite_core::{RunOutcome, SimConfig, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mips-lite-sim",
    author,
    version,
    about = "MIPS-lite five-stage pipeline simulator",
    long_about = "Run a MIPS-lite program image (hexadecimal text, one word per line) \
on a five-stage in-order pipeline, with stall-only or forwarding hazard policies.\n\n\
Examples:\n  mips-lite-sim -i traces/program.txt -t\n  mips-lite-sim -i traces/program.txt -f -o traces/out.txt"
)]
struct Cli {
    /// Input program image (hex text, one word per line).
    #[arg(short = 'i', long = "input", default_value = "traces/program.txt")]
    input: PathBuf,

    /// Write the final memory image to this path when memory was modified.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print the loaded memory image to stdout before running.
    #[arg(short = 'm', long = "print-memory")]
    print_memory: bool,

    /// Print timing information (cycle and stall counts).
    #[arg(short = 't', long = "timing")]
    timing: bool,

    /// Enable operand forwarding (otherwise stall-only).
    #[arg(short = 'f', long = "forwarding")]
    forwarding: bool,

    /// Trace pipeline state to stderr each cycle.
    #[arg(long)]
    trace: bool,

    /// Maximum number of cycles before the run is abandoned.
    #[arg(long, default_value_t = defaults::CYCLE_BUDGET)]
    budget: u64,
}

fn main() {
    let cli = Cli::parse();

    let config = SimConfig {
        forwarding: cli.forwarding,
        trace: cli.trace,
        cycle_budget: cli.budget,
    };

    println!("Settings:");
    println!("  input       {}", cli.input.display());
    println!(
        "  timing      {}",
        if cli.timing { "enabled" } else { "disabled" }
    );
    println!(
        "  forwarding  {}",
        if cli.forwarding { "enabled" } else { "disabled" }
    );
    println!();

    let image = loader::load_image(&cli.input).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not load '{}': {}", cli.input.display(), e);
        process::exit(1);
    });

    let mut sim = Simulator::from_image(image, &config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });

    if cli.print_memory {
        let image_len = sim.engine.mem.image_len();
        for word in &sim.engine.mem.words()[..image_len] {
            println!("{:08X}", word);
        }
        println!();
    }

    match sim.run() {
        Ok(RunOutcome::Completed) => {}
        Ok(RunOutcome::BudgetExhausted) => {
            eprintln!(
                "[!] cycle budget of {} exhausted before HALT; program did not terminate",
                cli.budget
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("[!] FATAL: {}", e);
            sim.engine.regs.dump();
            process::exit(1);
        }
    }

    print_report(&sim, cli.timing);

    if let Some(path) = cli.output {
        if !sim.engine.stats.memory_addresses().is_empty() {
            if let Err(e) = loader::write_image(&path, &sim.engine.mem) {
                eprintln!("[!] FATAL: could not write '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }
}

/// Prints the completion report: instruction mix, final program counter,
/// modified registers, then modified memory words, with timing totals
/// interleaved when requested. All values are decimal.
fn print_report(sim: &Simulator, timing: bool) {
    let stats = &sim.engine.stats;

    println!("Instruction counts:");
    for category in Category::ALL {
        println!(
            "  {:<14} {}",
            category.label(),
            stats.category_count(category)
        );
    }
    println!("  {:<14} {}", "total", stats.total_instructions());

    println!("Final program counter: {}", sim.engine.program_counter());

    println!("Registers modified:");
    for &reg in stats.registers() {
        println!("  r{:<13} {}", reg, sim.engine.regs.read(reg));
    }

    if timing {
        println!("Total stalls: {}", stats.stalls);
    }

    println!("Memory modified:");
    for &addr in stats.memory_addresses() {
        // Committed stores are aligned and in bounds by construction.
        let value = sim.engine.mem.read_data(addr).unwrap_or(0);
        println!("  [{:<12}] {}", addr, value);
    }

    if timing {
        println!("Total cycles: {}", stats.cycles);
    }
}
