//! # Persistence Adapter
//!
//! Reads and writes the single document record.
//!
//! - `load` never fails: absent, unparseable, or non-object data all mean
//!   "no prior state".
//! - `save` never fails either: a rejected write is handed to the caller's
//!   callback and reported as `false`.

use serde_json::Value;

use super::backend::KeyValueStore;
use super::errors::PersistenceError;
use crate::document::{Document, STORAGE_KEY};
use crate::observability::{log_event_with_fields, Event};

/// Document record codec over a key-value store
#[derive(Debug)]
pub struct PersistenceAdapter<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Persist under the default key
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Persist under a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted document, or `None` when there is nothing usable
    pub fn load(&self) -> Option<Document> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                self.corrupt(&e.to_string());
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                self.corrupt(&format!("unparseable record: {}", e));
                return None;
            }
        };

        if !value.is_object() {
            self.corrupt("record is not an object");
            return None;
        }

        let mut document: Document = match serde_json::from_value(value) {
            Ok(document) => document,
            Err(e) => {
                self.corrupt(&format!("malformed record: {}", e));
                return None;
            }
        };

        let dropped = document.enforce_cap();
        if !dropped.is_empty() {
            log_event_with_fields(
                Event::StateTruncated,
                &[("dropped", &dropped.len().to_string()), ("key", &self.key)],
            );
        }

        Some(document)
    }

    /// Write `document`, calling `on_error` if the store rejects it
    pub fn save<F>(&self, document: &Document, on_error: F) -> bool
    where
        F: FnOnce(&PersistenceError),
    {
        let result = serde_json::to_string(document)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))
            .and_then(|raw| self.store.set(&self.key, &raw));

        match result {
            Ok(()) => {
                log_event_with_fields(Event::PersistComplete, &[("key", &self.key)]);
                true
            }
            Err(e) => {
                log_event_with_fields(
                    Event::PersistFailed,
                    &[("code", e.code()), ("detail", &e.to_string()), ("key", &self.key)],
                );
                on_error(&e);
                false
            }
        }
    }

    fn corrupt(&self, reason: &str) {
        log_event_with_fields(Event::StateCorrupt, &[("key", &self.key), ("reason", reason)]);
    }
}
