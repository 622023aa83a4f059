//! Test utilities and reference models for blockseq development.
//!
//! Provides block builders, a [`ReferenceModel`] that mirrors the block
//! sequence contract on top of a `Vec`, and proptest strategies for
//! random operation scripts. See [`fixtures`] for named scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use blockseq_core::{BlockRecord, SeqError};
use proptest::prelude::*;

/// Build a block, panicking on invalid input. Test code only.
pub fn block(offset: u64, len: u64) -> BlockRecord {
    BlockRecord::new(offset, len).expect("test block must have non-zero length")
}

/// `count` distinct, back-to-back blocks of `len` units starting at 0.
pub fn contiguous_blocks(count: usize, len: u64) -> Vec<BlockRecord> {
    (0..count as u64).map(|i| block(i * len, len)).collect()
}

/// `Vec`-backed model of the block sequence contract.
///
/// Every method returns what a correct sequence returns for the same call,
/// including the error variant, so property tests can compare results
/// one-for-one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceModel {
    blocks: Vec<BlockRecord>,
}

impl ReferenceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[BlockRecord] {
        &self.blocks
    }

    pub fn first(&self) -> Option<BlockRecord> {
        self.blocks.first().copied()
    }

    pub fn last(&self) -> Option<BlockRecord> {
        self.blocks.last().copied()
    }

    pub fn insert_at(&mut self, index: usize, block: BlockRecord) -> Result<(), SeqError> {
        if index > self.blocks.len() {
            return Err(self.invalid(index));
        }
        self.blocks.insert(index, block);
        Ok(())
    }

    pub fn block_at(&self, index: usize) -> Result<BlockRecord, SeqError> {
        self.blocks
            .get(index)
            .copied()
            .ok_or_else(|| self.invalid(index))
    }

    pub fn index_of(&self, block: BlockRecord) -> Option<usize> {
        self.blocks.iter().position(|&b| b == block)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<BlockRecord, SeqError> {
        if index >= self.blocks.len() {
            return Err(self.invalid(index));
        }
        Ok(self.blocks.remove(index))
    }

    pub fn remove_value(&mut self, block: BlockRecord) -> Result<usize, SeqError> {
        let pos = self
            .index_of(block)
            .ok_or_else(|| self.invalid(self.blocks.len()))?;
        self.blocks.remove(pos);
        Ok(pos)
    }

    fn invalid(&self, index: usize) -> SeqError {
        SeqError::InvalidIndex {
            index,
            len: self.blocks.len(),
        }
    }
}

/// One step of a random operation script.
///
/// Indices and offsets are drawn from small ranges so scripts hit the
/// boundaries, duplicates, and out-of-range cases often.
#[derive(Clone, Debug)]
pub enum SeqOp {
    Insert { index: usize, block: BlockRecord },
    PushBack(BlockRecord),
    PushFront(BlockRecord),
    RemoveAt(usize),
    RemoveValue(BlockRecord),
    RemoveNodeAt(usize),
}

/// Blocks drawn from a pool of eight 16-unit slots, so equal values recur.
pub fn small_block() -> impl Strategy<Value = BlockRecord> {
    (0u64..8).prop_map(|slot| block(slot * 16, 16))
}

/// A single random [`SeqOp`].
pub fn seq_op() -> impl Strategy<Value = SeqOp> {
    prop_oneof![
        3 => (0usize..10, small_block()).prop_map(|(index, block)| SeqOp::Insert { index, block }),
        2 => small_block().prop_map(SeqOp::PushBack),
        2 => small_block().prop_map(SeqOp::PushFront),
        2 => (0usize..10).prop_map(SeqOp::RemoveAt),
        2 => small_block().prop_map(SeqOp::RemoveValue),
        1 => (0usize..10).prop_map(SeqOp::RemoveNodeAt),
    ]
}

/// A script of `1..max_len` random operations.
pub fn seq_ops(max_len: usize) -> impl Strategy<Value = Vec<SeqOp>> {
    proptest::collection::vec(seq_op(), 1..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_blocks_touch() {
        let blocks = contiguous_blocks(3, 8);
        assert_eq!(blocks[0].end(), blocks[1].offset());
        assert_eq!(blocks[1].end(), blocks[2].offset());
    }

    #[test]
    fn model_rejects_len_for_removal_but_not_insert() {
        let mut model = ReferenceModel::new();
        assert!(model.insert_at(0, block(0, 1)).is_ok());
        assert_eq!(
            model.remove_at(1),
            Err(SeqError::InvalidIndex { index: 1, len: 1 })
        );
        assert_eq!(model.block_at(0), Ok(block(0, 1)));
    }
}
