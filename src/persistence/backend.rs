//! # Key-Value Store Trait

use super::errors::PersistenceResult;

/// Synchronous local key-value store holding string records.
///
/// `set` replaces the whole value for a key; readers never observe a
/// partially written value.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> PersistenceResult<()>;

    /// Remove `key`; absent keys are not an error
    fn remove(&self, key: &str) -> PersistenceResult<()>;
}
