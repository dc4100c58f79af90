//! # Document State
//!
//! The version-history state machine: edit, snapshot, select, restore,
//! rename and delete over a single document.

pub mod errors;
pub mod store;

pub use errors::{RenameError, RenameResult};
pub use store::DocumentStore;
