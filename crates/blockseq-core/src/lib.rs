//! Core types for the blockseq workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`BlockRecord`] value that allocators hand to a block sequence, and the
//! [`SeqError`] taxonomy shared by every sequence and cursor operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod error;

pub use block::BlockRecord;
pub use error::SeqError;
