//! Word-addressable memory.
//!
//! This module implements the simulator's unified 4 KiB address space:
//! 1. **Image Backing:** The program image occupies a contiguous prefix at
//!    address 0 and is conceptually zero-extended to the full 1,024 words.
//! 2. **Access Contract:** All addresses must be word-aligned and below
//!    4 KiB; violations surface `Unaligned` and `OutOfBounds`.
//! 3. **Unified Space:** Instruction fetch and data access share one space,
//!    so programs may load from the region they were loaded into.

use crate::common::constants::{MEM_BYTES, MEM_WORDS, WORD_SIZE};
use crate::common::error::SimError;

/// Word-addressable memory backed by the program image.
#[derive(Clone, Debug)]
pub struct Memory {
    words: Vec<u32>,
    image_len: usize,
}

impl Memory {
    /// Creates an empty memory (all words zero).
    pub fn new() -> Self {
        Self {
            words: vec![0; MEM_WORDS],
            image_len: 0,
        }
    }

    /// Creates a memory initialized from a program image.
    ///
    /// The image occupies addresses `0..4 * image.len()`; the remainder of
    /// the 4 KiB space reads as zero until written.
    ///
    /// # Errors
    ///
    /// `ImageTooLarge` if the image holds more than 1,024 words.
    pub fn from_image(image: Vec<u32>) -> Result<Self, SimError> {
        if image.len() > MEM_WORDS {
            return Err(SimError::ImageTooLarge(image.len()));
        }
        let image_len = image.len();
        let mut words = image;
        words.resize(MEM_WORDS, 0);
        Ok(Self { words, image_len })
    }

    fn index(addr: u32) -> Result<usize, SimError> {
        if addr % WORD_SIZE != 0 {
            return Err(SimError::Unaligned(addr));
        }
        if addr >= MEM_BYTES {
            return Err(SimError::OutOfBounds(addr));
        }
        Ok((addr / WORD_SIZE) as usize)
    }

    /// Fetches the instruction word at `addr`.
    pub fn read_instruction(&self, addr: u32) -> Result<u32, SimError> {
        Ok(self.words[Self::index(addr)?])
    }

    /// Reads the data word at `addr`.
    pub fn read_data(&self, addr: u32) -> Result<u32, SimError> {
        Ok(self.words[Self::index(addr)?])
    }

    /// Writes a data word to `addr`.
    pub fn write_data(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        let idx = Self::index(addr)?;
        self.words[idx] = value;
        Ok(())
    }

    /// The full 1,024-word contents, for image dumps.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of words the original program image occupied.
    pub fn image_len(&self) -> usize {
        self.image_len
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
