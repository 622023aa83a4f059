//! blockseq: ordered block-record sequences for allocator bookkeeping.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the blockseq sub-crates. Adding `blockseq` as a single dependency is
//! enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use blockseq::prelude::*;
//!
//! // A free list with two holes.
//! let mut free = BlockSequence::new();
//! free.push_back(BlockRecord::new(0, 64)?);
//! free.push_back(BlockRecord::new(128, 32)?);
//!
//! // The allocator picks the second hole and takes it off the list.
//! let hole = free.block_at(1)?;
//! free.remove_value(hole)?;
//! assert_eq!(free.describe(), "(0 , 64)");
//!
//! // Returning a block to the front of the list.
//! free.insert_at(0, BlockRecord::new(256, 16)?)?;
//! assert_eq!(free.iter().map(|b| b.offset()).collect::<Vec<_>>(), vec![256, 0]);
//! # Ok::<(), SeqError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blockseq-core` | `BlockRecord`, `SeqError` |
//! | [`list`] | `blockseq-list` | `BlockSequence`, node views and handles, `Cursor`, `SequenceConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Block records and errors (`blockseq-core`).
pub use blockseq_core as types;

/// The sequence container and its cursor (`blockseq-list`).
///
/// Most users only need [`list::BlockSequence`], which is also in the
/// [`prelude`].
pub use blockseq_list as list;

/// Common imports for typical blockseq usage.
///
/// ```rust
/// use blockseq::prelude::*;
/// ```
pub mod prelude {
    pub use blockseq_core::{BlockRecord, SeqError};
    pub use blockseq_list::{BlockSequence, Cursor, NodeHandle, NodeRef, SequenceConfig};
}
