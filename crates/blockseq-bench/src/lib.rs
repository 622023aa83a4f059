//! Benchmark profiles for the blockseq block sequence.
//!
//! - [`filled_sequence`]: a sequence of `n` distinct back-to-back blocks
//! - [`fragmented_sequence`]: the same after every other block is removed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blockseq_core::{BlockRecord, SeqError};
use blockseq_list::BlockSequence;

/// Length of every block in the benchmark profiles.
pub const BLOCK_LEN: u64 = 64;

/// The `i`-th block of a profile.
pub fn nth_block(i: usize) -> Result<BlockRecord, SeqError> {
    BlockRecord::new(i as u64 * BLOCK_LEN, BLOCK_LEN)
}

/// A sequence holding `n` distinct blocks in offset order.
pub fn filled_sequence(n: usize) -> Result<BlockSequence, SeqError> {
    (0..n).map(nth_block).collect()
}

/// A sequence of `n` blocks with every odd position removed again.
///
/// Leaves half the arena's slots on the free list, so later inserts
/// exercise slot reuse instead of growth.
pub fn fragmented_sequence(n: usize) -> Result<BlockSequence, SeqError> {
    let mut seq = filled_sequence(n)?;
    let mut index = 1;
    while index < seq.len() {
        seq.remove_at(index)?;
        index += 1;
    }
    Ok(seq)
}
