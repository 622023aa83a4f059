//! Node storage and borrowed node views.
//!
//! Nodes live in a [`NodeArena`]: a `Vec` of slots plus a free list of
//! vacated slot indices. A slot owns exactly one block and the index of
//! its successor. Successor links are plain indices, so the sequence is
//! the only owner of every node and removal simply vacates a slot.

use tracing::debug;

use blockseq_core::BlockRecord;

use crate::config::SequenceConfig;
use crate::handle::NodeHandle;

/// A single node slot.
#[derive(Clone, Debug)]
pub(crate) struct Slot {
    pub(crate) block: BlockRecord,
    pub(crate) next: Option<usize>,
    /// Bumped every time the slot is vacated.
    pub(crate) generation: u32,
    pub(crate) live: bool,
}

/// Slab of node slots with free-list reuse.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
    reuse_slots: bool,
}

impl NodeArena {
    pub(crate) fn new(config: &SequenceConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free_list: Vec::new(),
            reuse_slots: config.reuse_slots,
        }
    }

    /// Store `block` in a fresh or recycled slot and return its index.
    ///
    /// The new slot has no successor; linking is the caller's job.
    pub(crate) fn alloc(&mut self, block: BlockRecord) -> usize {
        if self.reuse_slots {
            if let Some(idx) = self.free_list.pop() {
                let slot = &mut self.slots[idx];
                slot.block = block;
                slot.next = None;
                slot.live = true;
                return idx;
            }
        }
        if self.slots.len() == self.slots.capacity() {
            debug!(
                slots = self.slots.len(),
                "node arena full, growing backing storage"
            );
        }
        self.slots.push(Slot {
            block,
            next: None,
            generation: 0,
            live: true,
        });
        self.slots.len() - 1
    }

    /// Vacate a slot and return the block it held.
    ///
    /// The slot's generation is bumped so outstanding handles go stale.
    pub(crate) fn release(&mut self, idx: usize) -> BlockRecord {
        let slot = &mut self.slots[idx];
        slot.live = false;
        slot.next = None;
        slot.generation = slot.generation.wrapping_add(1);
        if self.reuse_slots {
            self.free_list.push(idx);
        }
        slot.block
    }

    pub(crate) fn slot(&self, idx: usize) -> &Slot {
        &self.slots[idx]
    }

    pub(crate) fn slot_mut(&mut self, idx: usize) -> &mut Slot {
        &mut self.slots[idx]
    }

    /// Look up a slot without panicking on an out-of-range index.
    pub(crate) fn try_slot(&self, idx: usize) -> Option<&Slot> {
        self.slots.get(idx)
    }

    /// Total slots, live and vacated.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.live).count()
    }

    pub(crate) fn free_slots(&self) -> &[usize] {
        &self.free_list
    }
}

/// A borrowed view of a live node in a sequence.
///
/// Holding a `NodeRef` borrows the sequence, so the node cannot be removed
/// while the view exists. Use [`NodeRef::handle`] to get a token that
/// outlives the borrow.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    nodes: &'a NodeArena,
    idx: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(nodes: &'a NodeArena, idx: usize) -> Self {
        Self { nodes, idx }
    }

    /// The block stored in this node.
    pub fn block(&self) -> BlockRecord {
        self.nodes.slot(self.idx).block
    }

    /// The successor node, or `None` if this is the tail.
    pub fn next(&self) -> Option<NodeRef<'a>> {
        self.nodes
            .slot(self.idx)
            .next
            .map(|idx| NodeRef::new(self.nodes, idx))
    }

    /// Whether this node is the tail.
    pub fn is_last(&self) -> bool {
        self.nodes.slot(self.idx).next.is_none()
    }

    /// A detached handle for this node.
    pub fn handle(&self) -> NodeHandle {
        let slot = self.nodes.slot(self.idx);
        NodeHandle::new(self.idx, slot.generation, slot.block)
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("slot", &self.idx)
            .field("block", &self.block())
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    /// Two views are equal when they name the same slot of the same arena.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.nodes, other.nodes) && self.idx == other.idx
    }
}

impl Eq for NodeRef<'_> {}
