//! Arena-backed singly-linked sequence of memory block records.
//!
//! [`BlockSequence`] is the bookkeeping list an allocator simulator keeps
//! for its free list or allocated list. It preserves insertion order,
//! caches the head and tail for O(1) boundary operations, and locates
//! nodes either by position or by block value.
//!
//! # Architecture
//!
//! ```text
//! BlockSequence
//! ├── head / tail: Option<slot index>
//! ├── len
//! └── NodeArena
//!     ├── Slot[] (block, next, generation, live)
//!     └── free list (vacated slot indices, reused on insert)
//! ```
//!
//! Nodes never hold references to each other: successor links are slot
//! indices into the arena, so removing a node can never leave a dangling
//! link behind. Callers see nodes through borrowed [`NodeRef`] views or
//! detached [`NodeHandle`] tokens.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod handle;
pub mod node;
pub mod sequence;

pub use config::SequenceConfig;
pub use cursor::Cursor;
pub use handle::NodeHandle;
pub use node::NodeRef;
pub use sequence::BlockSequence;
