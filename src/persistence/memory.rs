//! # In-Memory Store
//!
//! Mirrors browser local storage: a shared map with an optional total quota.

use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::KeyValueStore;
use super::errors::{PersistenceError, PersistenceResult};

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<u64>,
}

impl MemoryStore {
    /// Create an unlimited store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses writes once keys plus values exceed `quota` bytes
    pub fn with_quota(quota: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PersistenceError::Internal("Lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PersistenceError::Internal("Lock poisoned".into()))?;

        if let Some(limit) = self.quota {
            let others: u64 = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| (k.len() + v.len()) as u64)
                .sum();
            let size = others + (key.len() + value.len()) as u64;
            if size > limit {
                return Err(PersistenceError::QuotaExceeded { size, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PersistenceError::Internal("Lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_replaces() {
        let store = MemoryStore::new();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_quota_rejects_and_keeps_old_value() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "small").unwrap();

        let result = store.set("k", "much too large");
        assert_eq!(
            result,
            Err(PersistenceError::QuotaExceeded { size: 15, limit: 10 })
        );
        assert_eq!(store.get("k").unwrap(), Some("small".to_string()));
    }

    #[test]
    fn test_quota_ignores_replaced_value() {
        let store = MemoryStore::with_quota(7);
        store.set("k", "first").unwrap();
        assert!(store.set("k", "second").is_ok());
    }

    #[test]
    fn test_quota_counts_other_keys() {
        let store = MemoryStore::with_quota(12);
        store.set("a", "12345").unwrap();
        assert!(store.set("b", "12345").is_ok());
        assert!(store.set("c", "1").is_err());
    }
}
