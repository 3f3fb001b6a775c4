//! Preference Store — durable key/value persistence of arbitrary JSON.
//!
//! The decision engines never touch the store directly; thin caller glue
//! (e.g. [`crate::nudge::store`]) reads a value, computes, and writes back.
//! Writes are atomic per call and last-writer-wins.

mod memory;
mod sqlite;

pub use memory::MemoryPreferenceStore;
pub use sqlite::SqlitePreferenceStore;

use crate::error::Result;
use serde_json::Value;

/// Keyed JSON persistence.
///
/// A missing key is `Ok(None)`, never an error.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> Result<()>;
}
