//! Durable key-value persistence for site data and credentials.
//!
//! This module provides:
//! - `KeyValueStore`: the string-keyed persistence trait everything else
//!   is written against
//! - `FileStore`: one file per key under a data directory, durable
//!   across restarts
//! - `MemoryStore`: in-memory test double
//!
//! Values are plain strings; callers decide what (if anything) to encode
//! as JSON. Writes are last-write-wins.

pub mod file;
pub mod kv;
pub mod memory;

pub use file::FileStore;
pub use kv::{KeyValueStore, StorageError};
pub use memory::MemoryStore;
