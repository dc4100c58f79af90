//! Editing session
//!
//! Phase two of the session lifecycle. Every mutation that reaches the
//! document is followed by exactly one write of the whole document. A failed
//! write never rolls back the in-memory state; it raises the error banner
//! and notifies the optional listener instead.

use uuid::Uuid;

use super::bootstrap::{initialize, Origin};
use crate::document::{Document, Version};
use crate::observability::{log_event_with_fields, Event};
use crate::persistence::{KeyValueStore, PersistenceAdapter, PersistenceError};
use crate::state::{DocumentStore, RenameResult};

/// Banner text shown when a write is rejected
pub const STORAGE_FAILED_MESSAGE: &str = "Storage failed (likely quota). Your latest changes may not persist. Consider copying your text out, clearing some space, or reducing version count.";

type PersistListener = Box<dyn FnMut(&PersistenceError) + Send>;

/// A running editor session over one persisted document
pub struct Session<S: KeyValueStore> {
    adapter: PersistenceAdapter<S>,
    state: DocumentStore,
    origin: Origin,
    error: Option<String>,
    unsaved_changes: bool,
    listener: Option<PersistListener>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load or create the document. Writes nothing.
    pub fn initialize(adapter: PersistenceAdapter<S>) -> Self {
        let (document, origin) = initialize(&adapter);
        log_event_with_fields(
            Event::SessionReady,
            &[(
                "origin",
                match origin {
                    Origin::Loaded => "loaded",
                    Origin::Fresh => "fresh",
                },
            )],
        );

        Self {
            adapter,
            state: DocumentStore::new(document),
            origin,
            error: None,
            unsaved_changes: false,
            listener: None,
        }
    }

    /// Also report persistence failures to `listener`
    pub fn on_persist_error<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&PersistenceError) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn document(&self) -> &Document {
        self.state.document()
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.state.selected_id()
    }

    pub fn selected_version(&self) -> Option<&Version> {
        self.state.selected_version()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn adapter(&self) -> &PersistenceAdapter<S> {
        &self.adapter
    }

    /// Message for the user, if something went wrong
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Content changed since the last snapshot
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn edit_content(&mut self, text: impl Into<String>) {
        self.state.edit_content(text);
        self.unsaved_changes = true;
        self.persist();
    }

    pub fn save_version(&mut self) -> Uuid {
        let id = self.state.save_version();
        self.unsaved_changes = false;
        self.persist();
        id
    }

    /// Selection is not part of the document and is never persisted
    pub fn select_version(&mut self, id: Option<Uuid>) -> Option<&Version> {
        self.state.select_version(id)
    }

    pub fn restore_selected(&mut self) -> bool {
        if !self.state.restore_selected() {
            return false;
        }
        self.unsaved_changes = true;
        self.persist();
        true
    }

    /// Rename a version. A refusal is also shown in the error banner.
    pub fn rename_version(&mut self, id: Uuid, name: &str) -> RenameResult<()> {
        match self.state.rename_version(id, name) {
            Ok(()) => {
                self.persist();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn delete_version(&mut self, id: Uuid) -> bool {
        let removed = self.state.delete_version(id);
        self.persist();
        removed
    }

    /// Write the current document. Returns whether the store accepted it.
    fn persist(&mut self) -> bool {
        let error = &mut self.error;
        let listener = &mut self.listener;

        self.adapter.save(self.state.document(), |e| {
            *error = Some(STORAGE_FAILED_MESSAGE.to_string());
            if let Some(listener) = listener.as_mut() {
                listener(e);
            }
        })
    }
}

impl<S: KeyValueStore> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("adapter", &self.adapter)
            .field("state", &self.state)
            .field("origin", &self.origin)
            .field("error", &self.error)
            .field("unsaved_changes", &self.unsaved_changes)
            .finish_non_exhaustive()
    }
}
