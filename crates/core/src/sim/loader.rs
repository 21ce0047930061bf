//! Program image loader and writer.
//!
//! This module handles the textual memory-image format:
//! 1. **Parsing:** One case-insensitive hexadecimal 32-bit word per line
//!    (up to 8 digits, leading zeros optional); surrounding whitespace is
//!    stripped and blank lines are skipped. The i-th non-blank line is the
//!    word at address 4·i.
//! 2. **Writing:** The final memory image as 1,024 uppercase zero-padded
//!    lines, reflecting all committed stores.

use std::fs;
use std::path::Path;

use crate::common::constants::MEM_WORDS;
use crate::common::error::SimError;
use crate::mem::Memory;

/// Parses program-image text into words.
///
/// # Errors
///
/// * `MalformedImage` when a non-blank line is not a hexadecimal integer
///   that fits in 32 bits (the reported line number is 1-based and counts
///   every line, blank or not).
/// * `ImageTooLarge` when the image holds more than 1,024 words.
pub fn parse_image(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let word = u32::from_str_radix(line, 16).map_err(|_| SimError::MalformedImage {
            line: idx + 1,
            text: line.to_string(),
        })?;
        words.push(word);
    }
    if words.len() > MEM_WORDS {
        return Err(SimError::ImageTooLarge(words.len()));
    }
    Ok(words)
}

/// Loads a program image from disk.
pub fn load_image(path: &Path) -> Result<Vec<u32>, SimError> {
    let text = fs::read_to_string(path)?;
    parse_image(&text)
}

/// Writes the full memory contents to disk in the image format.
pub fn write_image(path: &Path, mem: &Memory) -> Result<(), SimError> {
    let mut out = String::with_capacity(MEM_WORDS * 9);
    for word in mem.words() {
        out.push_str(&format!("{:08X}\n", word));
    }
    fs::write(path, out)?;
    Ok(())
}
