//! # Document State Store
//!
//! Sole owner of the in-memory [`Document`] and the transient selection.
//! Every operation runs to completion before returning; callers only ever
//! see the document through shared references between operations.
//!
//! Persistence is not triggered here. The session layer persists after each
//! mutation this store reports.

use uuid::Uuid;

use super::errors::{RenameError, RenameResult};
use crate::document::{now, Document, Version};
use crate::naming::validate_name;
use crate::observability::{log_event_with_fields, Event};

/// Document plus selection
#[derive(Debug, Clone)]
pub struct DocumentStore {
    document: Document,
    selected: Option<Uuid>,
}

impl DocumentStore {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selected: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    /// The selected version, if any
    pub fn selected_version(&self) -> Option<&Version> {
        self.selected.and_then(|id| self.document.version(id))
    }

    /// Replace the content. Always succeeds.
    pub fn edit_content(&mut self, text: impl Into<String>) {
        let text = text.into();
        let length = text.chars().count().to_string();
        self.document.set_content(text, now());
        log_event_with_fields(Event::ContentEdited, &[("length", &length)]);
    }

    /// Snapshot the current content as the newest version.
    ///
    /// Evicts the oldest versions beyond the cap. Returns the new version id.
    pub fn save_version(&mut self) -> Uuid {
        let at = now();
        let version = Version::new(self.document.content(), self.document.next_created_at(at));
        let id = version.id();

        let evicted = self.document.push_version(version, at);
        for old in &evicted {
            if self.selected == Some(old.id()) {
                self.selected = None;
            }
            log_event_with_fields(Event::VersionEvicted, &[("version_id", &old.id().to_string())]);
        }

        log_event_with_fields(
            Event::VersionSaved,
            &[
                ("count", &self.document.versions().len().to_string()),
                ("version_id", &id.to_string()),
            ],
        );
        id
    }

    /// Point the selection at `id`; unknown ids and `None` clear it
    pub fn select_version(&mut self, id: Option<Uuid>) -> Option<&Version> {
        self.selected = id.filter(|id| self.document.version(*id).is_some());
        self.selected_version()
    }

    /// Copy the selected version's content into the document.
    ///
    /// Returns `false` (and changes nothing) when nothing is selected.
    pub fn restore_selected(&mut self) -> bool {
        let Some(version) = self.selected_version() else {
            return false;
        };
        let id = version.id().to_string();
        let content = version.content().to_string();

        self.document.set_content(content, now());
        log_event_with_fields(Event::VersionRestored, &[("version_id", &id)]);
        true
    }

    /// Set the name of version `id` after validating `proposed`.
    ///
    /// On failure nothing changes.
    pub fn rename_version(&mut self, id: Uuid, proposed: &str) -> RenameResult<()> {
        let result = self.apply_rename(id, proposed);
        if let Err(e) = &result {
            log_event_with_fields(
                Event::RenameRejected,
                &[("code", e.code()), ("version_id", &id.to_string())],
            );
        }
        result
    }

    fn apply_rename(&mut self, id: Uuid, proposed: &str) -> RenameResult<()> {
        if self.document.version(id).is_none() {
            return Err(RenameError::NotFound(id));
        }

        let name = validate_name(proposed, Some(id), self.document.versions())?;

        let at = now();
        if let Some(version) = self.document.version_mut(id) {
            version.set_name(name);
        }
        self.document.touch(at);

        log_event_with_fields(Event::VersionRenamed, &[("version_id", &id.to_string())]);
        Ok(())
    }

    /// Remove version `id`. Unknown ids are a no-op on the list.
    ///
    /// Clears the selection when it pointed at the removed version. Returns
    /// whether a version was removed.
    pub fn delete_version(&mut self, id: Uuid) -> bool {
        let removed = self.document.remove_version(id, now()).is_some();
        if self.selected == Some(id) {
            self.selected = None;
        }
        if removed {
            log_event_with_fields(Event::VersionDeleted, &[("version_id", &id.to_string())]);
        }
        removed
    }
}
