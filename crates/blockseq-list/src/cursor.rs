//! Forward cursor over a block sequence.

use std::iter::FusedIterator;

use blockseq_core::{BlockRecord, SeqError};

use crate::node::NodeArena;

/// A forward-only, non-restartable walk over a sequence's blocks.
///
/// The cursor starts before the head and follows successor links. It
/// borrows the sequence, so the sequence cannot be mutated while a cursor
/// over it is alive.
#[derive(Clone)]
pub struct Cursor<'a> {
    nodes: &'a NodeArena,
    current: Option<usize>,
    remaining: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(nodes: &'a NodeArena, head: Option<usize>, len: usize) -> Self {
        Self {
            nodes,
            current: head,
            remaining: len,
        }
    }

    /// Whether another block is available.
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Return the current block and advance to its successor.
    ///
    /// Returns `Err(SeqError::NoSuchElement)` once the tail has been passed.
    pub fn next_block(&mut self) -> Result<BlockRecord, SeqError> {
        let idx = self.current.ok_or(SeqError::NoSuchElement)?;
        let slot = self.nodes.slot(idx);
        self.current = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        Ok(slot.block)
    }
}

impl Iterator for Cursor<'_> {
    type Item = BlockRecord;

    fn next(&mut self) -> Option<BlockRecord> {
        self.next_block().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl FusedIterator for Cursor<'_> {}
