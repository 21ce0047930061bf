//! Simulator error definitions.
//!
//! This module defines the fatal error conditions surfaced by the engine and
//! its collaborators. It provides:
//! 1. **Memory Faults:** Alignment and bounds violations.
//! 2. **Image Faults:** Malformed or oversized program images.
//! 3. **Engine Faults:** Invalid opcodes and internal invariant violations.
//!
//! Every error propagates to the embedder; nothing is recovered internally.

use thiserror::Error;

/// Fatal error raised by the engine, memory, or image loader.
#[derive(Debug, Error)]
pub enum SimError {
    /// Memory access at an address that is not a multiple of 4.
    #[error("unaligned memory access at address {0}")]
    Unaligned(u32),

    /// Memory access or instruction fetch at an address beyond 4 KiB.
    #[error("memory address out of bounds: {0}")]
    OutOfBounds(u32),

    /// A non-blank program image line is not a valid hexadecimal word.
    #[error("malformed program image at line {line}: {text:?}")]
    MalformedImage {
        /// 1-based line number in the image file.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The program image holds more words than memory can.
    #[error("program image exceeds 1024 words ({0} lines)")]
    ImageTooLarge(usize),

    /// An opcode outside the defined set reached the Execute stage.
    #[error("invalid opcode {opcode:#04x} reached execute at pc {pc}")]
    InvalidOpcode {
        /// The raw 6-bit opcode field.
        opcode: u8,
        /// Fetch-time program counter of the offending word.
        pc: u32,
    },

    /// Decode attempted a register read while the pipeline was stalled.
    #[error("register read attempted while the pipeline was stalled")]
    UnexpectedStallRead,

    /// Image file could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
