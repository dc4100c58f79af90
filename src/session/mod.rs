//! # Session
//!
//! Two-phase lifecycle around the document state:
//!
//! 1. [`initialize`] loads the stored document or creates an empty one,
//!    without writing anything back.
//! 2. [`Session`] applies mutations and persists after each one.

mod bootstrap;
mod controller;

pub use bootstrap::{initialize, Origin};
pub use controller::{Session, STORAGE_FAILED_MESSAGE};
