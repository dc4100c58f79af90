//! Session bootstrap
//!
//! Phase one of the session lifecycle: produce the starting document from
//! storage, or a fresh one. Nothing is written here.

use crate::document::{now, Document};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::persistence::{KeyValueStore, PersistenceAdapter};

/// Where the starting document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the store
    Loaded,
    /// Nothing usable was stored
    Fresh,
}

/// Load the persisted document or create an empty one
pub fn initialize<S: KeyValueStore>(adapter: &PersistenceAdapter<S>) -> (Document, Origin) {
    log_event_with_fields(Event::SessionStart, &[("key", adapter.key())]);

    match adapter.load() {
        Some(document) => {
            log_event_with_fields(
                Event::StateLoaded,
                &[("versions", &document.versions().len().to_string())],
            );
            (document, Origin::Loaded)
        }
        None => {
            log_event(Event::StateDefaulted);
            (Document::new(now()), Origin::Fresh)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DOC_ID, STORAGE_KEY};
    use crate::persistence::MemoryStore;

    #[test]
    fn test_fresh_when_empty() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        let (document, origin) = initialize(&adapter);

        assert_eq!(origin, Origin::Fresh);
        assert_eq!(document.id(), DOC_ID);
        assert_eq!(document.content(), "");
        assert!(document.versions().is_empty());
    }

    #[test]
    fn test_fresh_when_corrupt() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();
        let adapter = PersistenceAdapter::new(store);

        let (_, origin) = initialize(&adapter);
        assert_eq!(origin, Origin::Fresh);
    }

    #[test]
    fn test_loaded_when_stored() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        let stored = Document::new(now());
        adapter.save(&stored, |_| {});

        let (document, origin) = initialize(&adapter);
        assert_eq!(origin, Origin::Loaded);
        assert_eq!(document, stored);
    }

    #[test]
    fn test_initialize_does_not_write() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        initialize(&adapter);

        assert_eq!(adapter.store().get(STORAGE_KEY).unwrap(), None);
    }
}
