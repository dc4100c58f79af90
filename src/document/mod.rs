//! Document data model
//!
//! A single document: the current text buffer plus an ordered, capped list of
//! named snapshots.

mod model;
mod summary;
mod text;
mod time;

pub use model::{Document, Version, DOC_ID, VERSION_CAP};
pub use summary::{summarize, truncate, SUMMARY_LEN};
pub use text::{collapse_space, is_space, trim_space};
pub use time::{format_datetime, format_timestamp, now};

/// Key under which the document record is persisted
pub const STORAGE_KEY: &str = "prompt-editor:document-state:v1";
