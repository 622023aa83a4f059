//! The [`BlockSequence`] container.
//!
//! A singly-linked, insertion-ordered list of [`BlockRecord`]s with cached
//! head and tail. Positional operations walk from the head; inserting at
//! either boundary is O(1). Value lookups compare records by value, so
//! when several nodes hold equal blocks the one nearest the head wins.

use std::fmt;

use tracing::{debug, trace};

use blockseq_core::{BlockRecord, SeqError};

use crate::config::SequenceConfig;
use crate::cursor::Cursor;
use crate::handle::NodeHandle;
use crate::node::{NodeArena, NodeRef};

/// Ordered sequence of block records for allocator free/allocated lists.
///
/// Invariants, checked by [`check_invariants`](Self::check_invariants):
///
/// - `len == 0` exactly when `head` and `tail` are both `None`.
/// - Walking successor links from `head` visits `len` distinct live
///   nodes and stops at `tail`, whose successor is `None`.
/// - Every live slot in the arena is on that walk.
#[derive(Clone)]
pub struct BlockSequence {
    nodes: NodeArena,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl BlockSequence {
    /// Create an empty sequence with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SequenceConfig::default())
    }

    /// Create an empty sequence with an explicit configuration.
    pub fn with_config(config: SequenceConfig) -> Self {
        Self {
            nodes: NodeArena::new(&config),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of blocks held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The head node, or `None` when empty.
    pub fn first(&self) -> Option<NodeRef<'_>> {
        self.head.map(|idx| NodeRef::new(&self.nodes, idx))
    }

    /// The tail node, or `None` when empty.
    pub fn last(&self) -> Option<NodeRef<'_>> {
        self.tail.map(|idx| NodeRef::new(&self.nodes, idx))
    }

    /// The node at `index`.
    ///
    /// Valid range is `0..len`; anything else, including `index == len`,
    /// returns `Err(SeqError::InvalidIndex)`.
    pub fn node_at(&self, index: usize) -> Result<NodeRef<'_>, SeqError> {
        self.check_element_index(index)?;
        let idx = self.slot_at(index)?;
        Ok(NodeRef::new(&self.nodes, idx))
    }

    /// The block at `index`. Same range rules as [`node_at`](Self::node_at).
    pub fn block_at(&self, index: usize) -> Result<BlockRecord, SeqError> {
        self.node_at(index).map(|node| node.block())
    }

    /// Resolve a handle to its node, if the node is still in the sequence.
    ///
    /// Returns `None` once the node has been removed, even if its slot has
    /// since been reused for another block.
    pub fn get(&self, handle: NodeHandle) -> Option<NodeRef<'_>> {
        let slot = self.nodes.try_slot(handle.slot)?;
        (slot.live && slot.generation == handle.generation)
            .then(|| NodeRef::new(&self.nodes, handle.slot))
    }

    /// Insert `block` so that it ends up at position `index`.
    ///
    /// Valid range is `0..=len`. `0` prepends and `len` appends, both in
    /// O(1); interior positions walk from the head.
    pub fn insert_at(&mut self, index: usize, block: BlockRecord) -> Result<(), SeqError> {
        if index > self.len {
            return Err(SeqError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        // Resolve the predecessor before allocating so a failed walk leaves
        // the arena untouched.
        let prev = if index == 0 || index == self.len {
            None
        } else {
            Some(self.slot_at(index - 1)?)
        };

        let new = self.nodes.alloc(block);
        match (self.head, self.tail, prev) {
            (None, _, _) | (_, None, _) => {
                self.head = Some(new);
                self.tail = Some(new);
            }
            (Some(head), _, _) if index == 0 => {
                self.nodes.slot_mut(new).next = Some(head);
                self.head = Some(new);
            }
            (_, Some(tail), None) => {
                self.nodes.slot_mut(tail).next = Some(new);
                self.tail = Some(new);
            }
            (_, _, Some(prev)) => {
                let after = self.nodes.slot(prev).next;
                self.nodes.slot_mut(new).next = after;
                self.nodes.slot_mut(prev).next = Some(new);
            }
        }
        self.len += 1;
        trace!(index, len = self.len, %block, "inserted block");
        Ok(())
    }

    /// Append `block` after the tail.
    pub fn push_back(&mut self, block: BlockRecord) {
        self.link_back(block);
    }

    /// Prepend `block` before the head.
    pub fn push_front(&mut self, block: BlockRecord) {
        let new = self.nodes.alloc(block);
        self.nodes.slot_mut(new).next = self.head;
        self.head = Some(new);
        if self.tail.is_none() {
            self.tail = Some(new);
        }
        self.len += 1;
        trace!(index = 0, len = self.len, %block, "inserted block");
    }

    /// Position of the first block equal to `block`, scanning from the head.
    pub fn index_of(&self, block: BlockRecord) -> Option<usize> {
        self.find(block).map(|(pos, _, _)| pos)
    }

    /// Whether any node holds a block equal to `block`.
    pub fn contains(&self, block: BlockRecord) -> bool {
        self.find(block).is_some()
    }

    /// Remove the node matching `node`'s block.
    ///
    /// The node is located by value: the first node whose block equals the
    /// handle's block is removed, which need not be the node the handle was
    /// taken from when equal blocks are present. Returns `Ok(false)` and
    /// leaves the sequence untouched when no node matches, and
    /// `Err(SeqError::NullReference)` when `node` is `None`.
    pub fn remove_node(&mut self, node: Option<NodeHandle>) -> Result<bool, SeqError> {
        let handle = node.ok_or(SeqError::NullReference)?;
        match self.find(handle.block()) {
            Some((pos, prev, idx)) => {
                self.unlink(prev, idx);
                trace!(index = pos, len = self.len, block = %handle.block(), "removed node");
                Ok(true)
            }
            None => {
                debug!(block = %handle.block(), "remove_node found no matching block");
                Ok(false)
            }
        }
    }

    /// Remove and return the block at `index`.
    ///
    /// Valid range is `0..len`.
    pub fn remove_at(&mut self, index: usize) -> Result<BlockRecord, SeqError> {
        self.check_element_index(index)?;
        let prev = match index {
            0 => None,
            _ => Some(self.slot_at(index - 1)?),
        };
        let idx = match prev {
            None => self.head,
            Some(p) => self.nodes.slot(p).next,
        }
        .ok_or_else(|| corrupted(format!("no node at index {index}")))?;
        let block = self.unlink(prev, idx);
        trace!(index, len = self.len, %block, "removed block");
        Ok(block)
    }

    /// Remove the first node holding a block equal to `block` and return
    /// its former position.
    ///
    /// Returns `Err(SeqError::InvalidIndex)` when no node matches.
    pub fn remove_value(&mut self, block: BlockRecord) -> Result<usize, SeqError> {
        let (pos, prev, idx) = self.find(block).ok_or(SeqError::InvalidIndex {
            index: self.len,
            len: self.len,
        })?;
        self.unlink(prev, idx);
        trace!(index = pos, len = self.len, %block, "removed block");
        Ok(pos)
    }

    /// Remove every block. Outstanding handles go stale.
    pub fn clear(&mut self) {
        let mut current = self.head;
        while let Some(idx) = current {
            current = self.nodes.slot(idx).next;
            self.nodes.release(idx);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// A cursor positioned before the head.
    pub fn iter(&self) -> Cursor<'_> {
        Cursor::new(&self.nodes, self.head, self.len)
    }

    /// Sum of the lengths of every held block.
    pub fn total_len(&self) -> u64 {
        self.iter().map(|b| b.len()).sum()
    }

    /// Space-separated listing of the blocks, head first.
    ///
    /// Diagnostic output only; the format is not meant to be parsed.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Verify the link structure against the sequence's invariants.
    ///
    /// Returns `Err(SeqError::Corrupted)` naming the first violation found.
    pub fn check_invariants(&self) -> Result<(), SeqError> {
        match (self.len, self.head, self.tail) {
            (0, None, None) => {}
            (0, _, _) => return Err(corrupted("empty sequence has a head or tail")),
            (_, None, _) | (_, _, None) => {
                return Err(corrupted(format!(
                    "sequence of length {} is missing a head or tail",
                    self.len
                )))
            }
            _ => {}
        }

        let mut seen = vec![false; self.nodes.slot_count()];
        let mut visited = 0usize;
        let mut last = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let slot = self
                .nodes
                .try_slot(idx)
                .ok_or_else(|| corrupted(format!("link to missing slot {idx}")))?;
            if !slot.live {
                return Err(corrupted(format!("link to vacated slot {idx}")));
            }
            if seen[idx] {
                return Err(corrupted(format!("slot {idx} reached twice")));
            }
            seen[idx] = true;
            visited += 1;
            if visited > self.len {
                return Err(corrupted(format!(
                    "walk exceeds recorded length {}",
                    self.len
                )));
            }
            last = Some(idx);
            current = slot.next;
        }

        if visited != self.len {
            return Err(corrupted(format!(
                "walk visited {visited} nodes, recorded length is {}",
                self.len
            )));
        }
        if last != self.tail {
            return Err(corrupted("walk does not end at the tail"));
        }
        if self.nodes.live_count() != self.len {
            return Err(corrupted(format!(
                "{} live slots but {} reachable",
                self.nodes.live_count(),
                self.len
            )));
        }
        if let Some(&idx) = self.nodes.free_slots().iter().find(|&&i| seen[i]) {
            return Err(corrupted(format!("free slot {idx} is still linked")));
        }
        Ok(())
    }

    fn check_element_index(&self, index: usize) -> Result<(), SeqError> {
        if index >= self.len {
            return Err(SeqError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Slot index of the node at `index`, walking from the head.
    fn slot_at(&self, index: usize) -> Result<usize, SeqError> {
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|idx| self.nodes.slot(idx).next);
        }
        current.ok_or_else(|| corrupted(format!("no node at index {index}")))
    }

    /// First node equal to `block`: `(position, predecessor slot, slot)`.
    fn find(&self, block: BlockRecord) -> Option<(usize, Option<usize>, usize)> {
        let mut prev = None;
        let mut current = self.head;
        let mut pos = 0;
        while let Some(idx) = current {
            let slot = self.nodes.slot(idx);
            if slot.block == block {
                return Some((pos, prev, idx));
            }
            prev = Some(idx);
            current = slot.next;
            pos += 1;
        }
        None
    }

    fn link_back(&mut self, block: BlockRecord) {
        let new = self.nodes.alloc(block);
        match self.tail {
            Some(tail) => self.nodes.slot_mut(tail).next = Some(new),
            None => self.head = Some(new),
        }
        self.tail = Some(new);
        self.len += 1;
        trace!(index = self.len - 1, len = self.len, %block, "inserted block");
    }

    /// Detach `idx` (whose predecessor is `prev`) and vacate its slot.
    fn unlink(&mut self, prev: Option<usize>, idx: usize) -> BlockRecord {
        let next = self.nodes.slot(idx).next;
        match prev {
            Some(p) => self.nodes.slot_mut(p).next = next,
            None => self.head = next,
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }
        self.len -= 1;
        self.nodes.release(idx)
    }
}

fn corrupted(reason: impl Into<String>) -> SeqError {
    SeqError::Corrupted {
        reason: reason.into(),
    }
}

impl Default for BlockSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BlockSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for BlockSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl PartialEq for BlockSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for BlockSequence {}

impl<'a> IntoIterator for &'a BlockSequence {
    type Item = BlockRecord;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Cursor<'a> {
        self.iter()
    }
}

impl Extend<BlockRecord> for BlockSequence {
    fn extend<I: IntoIterator<Item = BlockRecord>>(&mut self, iter: I) {
        for block in iter {
            self.link_back(block);
        }
    }
}

impl FromIterator<BlockRecord> for BlockSequence {
    fn from_iter<I: IntoIterator<Item = BlockRecord>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}
