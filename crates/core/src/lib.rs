//! itemstore_core - pure types and the storage contract for itemstore.
//!
//! Nothing in this crate performs I/O. Backends live in the `itemstore` crate.

pub mod item;
pub mod storage;
