//! Detached node handles.
//!
//! A [`NodeHandle`] names a node without borrowing the sequence, so it can
//! be held across mutations and passed back into
//! [`BlockSequence::remove_node`](crate::BlockSequence::remove_node). The
//! `generation` field lets [`BlockSequence::get`](crate::BlockSequence::get)
//! detect in O(1) that the slot has since been vacated or recycled.

use std::fmt;

use blockseq_core::BlockRecord;

/// A copyable token for a node that was live when the handle was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct NodeHandle {
    /// Slot index in the node arena.
    pub(crate) slot: usize,
    /// Slot generation when the handle was taken.
    pub(crate) generation: u32,
    /// The block the node held.
    pub(crate) block: BlockRecord,
}

impl NodeHandle {
    pub(crate) fn new(slot: usize, generation: u32, block: BlockRecord) -> Self {
        Self {
            slot,
            generation,
            block,
        }
    }

    /// The block the node held when the handle was taken.
    pub fn block(&self) -> BlockRecord {
        self.block
    }

    /// The slot generation this handle belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NodeHandle(slot={}, gen={}, block={})",
            self.slot, self.generation, self.block
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_exposes_block_and_generation() {
        let block = BlockRecord::new(64, 32).unwrap();
        let h = NodeHandle::new(2, 5, block);
        assert_eq!(h.block(), block);
        assert_eq!(h.generation(), 5);
        assert_eq!(h.to_string(), "NodeHandle(slot=2, gen=5, block=(64 , 32))");
    }
}
