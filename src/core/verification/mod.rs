//! Post-relocation verification
//!
//! Compares a digest of the produced tree, taken before the move, with the
//! tree found at the destination afterwards.

pub mod digest;

pub use digest::{tree_digest, verify_tree};
