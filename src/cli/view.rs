//! Output views of the document for the CLI

use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::document::{format_datetime, format_timestamp, Document, Version, VERSION_CAP};

/// One line of the version list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRow {
    pub id: Uuid,
    /// Name, or `(unnamed)`
    pub label: String,
    /// Summary, or `(empty)`
    pub summary: String,
    pub created_at: String,
    /// Human-readable creation time
    pub created: String,
    pub selected: bool,
}

impl VersionRow {
    pub fn new(version: &Version, selected: Option<Uuid>) -> Self {
        let summary = match version.summary() {
            "" => "(empty)".to_string(),
            s => s.to_string(),
        };

        let created_at = version.created_at().to_rfc3339();

        Self {
            id: version.id(),
            label: version.name().unwrap_or("(unnamed)").to_string(),
            summary,
            created: format_timestamp(&created_at),
            created_at,
            selected: selected == Some(version.id()),
        }
    }
}

/// `n/20` occupancy counter
pub fn occupancy(document: &Document) -> String {
    format!("{}/{}", document.versions().len(), VERSION_CAP)
}

/// Version list, newest first
pub fn versions_view(document: &Document, selected: Option<Uuid>) -> Value {
    let rows: Vec<VersionRow> = document
        .versions()
        .iter()
        .map(|v| VersionRow::new(v, selected))
        .collect();

    json!({
        "count": occupancy(document),
        "versions": rows,
    })
}

/// Full document plus session indicators
pub fn document_view(document: &Document, selected: Option<Uuid>, unsaved_changes: bool) -> Value {
    json!({
        "document": document,
        "updated": format_datetime(&document.updated_at()),
        "count": occupancy(document),
        "selected": selected,
        "unsavedChanges": unsaved_changes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::now;

    #[test]
    fn test_row_placeholders() {
        let version = Version::new("   ", now());
        let row = VersionRow::new(&version, None);

        assert_eq!(row.label, "(unnamed)");
        assert_eq!(row.summary, "(empty)");
        assert!(!row.selected);
    }

    #[test]
    fn test_row_selected() {
        let version = Version::new("text", now());
        let row = VersionRow::new(&version, Some(version.id()));

        assert!(row.selected);
        assert_eq!(row.summary, "text");
    }

    #[test]
    fn test_row_created_is_human_readable() {
        let at = chrono::DateTime::parse_from_rfc3339("2025-08-25T14:30:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let row = VersionRow::new(&Version::new("text", at), None);

        assert_eq!(row.created, "Aug 25, 2025, 2:30 PM");
        assert_eq!(row.created_at, "2025-08-25T14:30:00+00:00");
    }

    #[test]
    fn test_empty_document_view() {
        let document = Document::new(now());
        let view = document_view(&document, None, false);

        assert_eq!(view["count"], "0/20");
        assert_eq!(view["document"]["id"], "default");
        assert!(view["selected"].is_null());
        assert_eq!(view["unsavedChanges"], false);
    }

    #[test]
    fn test_versions_view_serializes_camel_case() {
        let document = Document::new(now());
        let view = versions_view(&document, None);
        assert_eq!(view["versions"], json!([]));

        let version = Version::new("x", now());
        let row = serde_json::to_value(VersionRow::new(&version, None)).unwrap();
        assert!(row.get("createdAt").is_some());
    }
}
