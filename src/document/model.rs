//! Document and Version records
//!
//! The serialized shape is the persisted record:
//!
//! ```text
//! { id, content, versions: [ { id, createdAt, name?, content, summary } ], updatedAt }
//! ```
//!
//! Fields are private. Outside the crate a Document is read-only; inside,
//! only the state store mutates it, and a Version's `name` is the single
//! field that ever changes after creation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::summary::summarize;

/// Identifier of the single managed document
pub const DOC_ID: &str = "default";

/// Maximum number of versions kept per document
pub const VERSION_CAP: usize = 20;

/// An immutable snapshot of the document content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    id: Uuid,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    content: String,
    summary: String,
}

impl Version {
    /// Snapshot `content` at `created_at` with a fresh id
    pub fn new(content: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            name: None,
            content: content.to_string(),
            summary: summarize(content),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Display label, `None` when unset or empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }
}

/// The managed text buffer plus its version history, newest version first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    id: String,
    content: String,
    versions: Vec<Version>,
    updated_at: DateTime<Utc>,
}

impl Document {
    /// A fresh empty document
    pub fn new(updated_at: DateTime<Utc>) -> Self {
        Self {
            id: DOC_ID.to_string(),
            content: String::new(),
            versions: Vec::new(),
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Versions, newest first
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Look up a version by id
    pub fn version(&self, id: Uuid) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// Creation time for the next version.
    ///
    /// Never earlier than, nor equal to, the newest existing version.
    pub(crate) fn next_created_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.versions.first() {
            Some(newest) if now <= newest.created_at => {
                newest.created_at + Duration::microseconds(1)
            }
            _ => now,
        }
    }

    pub(crate) fn set_content(&mut self, content: String, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }

    /// Prepend `version` and drop the oldest entries beyond the cap.
    ///
    /// Returns the evicted versions, oldest last.
    pub(crate) fn push_version(&mut self, version: Version, now: DateTime<Utc>) -> Vec<Version> {
        self.versions.insert(0, version);
        self.updated_at = now;
        self.enforce_cap()
    }

    pub(crate) fn version_mut(&mut self, id: Uuid) -> Option<&mut Version> {
        self.versions.iter_mut().find(|v| v.id == id)
    }

    /// Remove the version with `id`; `updated_at` moves either way
    pub(crate) fn remove_version(&mut self, id: Uuid, now: DateTime<Utc>) -> Option<Version> {
        self.updated_at = now;
        let index = self.versions.iter().position(|v| v.id == id)?;
        Some(self.versions.remove(index))
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Truncate the tail so at most [`VERSION_CAP`] versions remain
    pub(crate) fn enforce_cap(&mut self) -> Vec<Version> {
        if self.versions.len() <= VERSION_CAP {
            return Vec::new();
        }
        self.versions.split_off(VERSION_CAP)
    }
}
