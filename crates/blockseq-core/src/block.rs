//! The [`BlockRecord`] value type.
//!
//! A block record names a region of simulated memory by its start offset
//! and length. Records are immutable `Copy` values: two records with the
//! same offset and length are interchangeable, which is what lets a
//! sequence locate a node by value.

use std::fmt;

use crate::error::SeqError;

/// An immutable `(offset, length)` pair describing a memory region.
///
/// Equality, hashing and ordering are all by value. Ordering sorts by
/// offset first, then by length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockRecord {
    offset: u64,
    len: u64,
}

impl BlockRecord {
    /// Create a record for the region `offset..offset + len`.
    ///
    /// Returns `Err(SeqError::ZeroLength)` if `len` is zero and
    /// `Err(SeqError::OffsetOverflow)` if the region's end does not fit
    /// in a `u64`.
    pub fn new(offset: u64, len: u64) -> Result<Self, SeqError> {
        if len == 0 {
            return Err(SeqError::ZeroLength { offset });
        }
        if offset.checked_add(len).is_none() {
            return Err(SeqError::OffsetOverflow { offset, len });
        }
        Ok(Self { offset, len })
    }

    /// Start offset of the region.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Length of the region. Always non-zero.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always `false`: zero-length records cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// One past the last offset covered by the region.
    pub fn end(&self) -> u64 {
        // Checked at construction.
        self.offset + self.len
    }

    /// Whether `addr` falls inside the region.
    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.offset && addr < self.end()
    }
}

impl fmt::Display for BlockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.offset, self.len)
    }
}
