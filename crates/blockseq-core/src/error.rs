//! Error types for block records, sequences, and cursors.

use std::error::Error;
use std::fmt;

/// Errors that can occur during block sequence operations.
///
/// Every failing operation returns before touching the sequence, so a
/// caller that receives one of these still holds a valid sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// An index fell outside the valid range for the operation.
    ///
    /// Ranges differ per operation: insertion accepts `0..=len`, while
    /// lookup and removal accept `0..len`.
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Number of elements held when the index was rejected.
        len: usize,
    },
    /// An operation that needs a concrete node reference received none.
    NullReference,
    /// A cursor was advanced past its last element.
    NoSuchElement,
    /// A block record with zero length was requested.
    ZeroLength {
        /// Start offset of the rejected block.
        offset: u64,
    },
    /// `offset + len` does not fit in the address space.
    OffsetOverflow {
        /// Start offset of the rejected block.
        offset: u64,
        /// Length of the rejected block.
        len: u64,
    },
    /// The sequence's link structure violates one of its invariants.
    ///
    /// Only produced by the invariant checker; the public mutation API
    /// never leaves a sequence in this state.
    Corrupted {
        /// Which invariant failed.
        reason: String,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => {
                write!(f, "invalid index {index} for sequence of length {len}")
            }
            Self::NullReference => write!(f, "node reference is absent"),
            Self::NoSuchElement => write!(f, "cursor has no more elements"),
            Self::ZeroLength { offset } => {
                write!(f, "block at offset {offset} has zero length")
            }
            Self::OffsetOverflow { offset, len } => {
                write!(f, "block at offset {offset} with length {len} overflows")
            }
            Self::Corrupted { reason } => write!(f, "sequence corrupted: {reason}"),
        }
    }
}

impl Error for SeqError {}
