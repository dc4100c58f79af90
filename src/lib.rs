//! draftline - a single-document editor core with a bounded version history
//!
//! The document is a text buffer plus up to twenty snapshots, newest first,
//! persisted as one JSON record in a local key-value store.
//!
//! # Layers
//!
//! - [`document`]: Document and Version records, summaries, timestamps
//! - [`naming`]: version name validation
//! - [`persistence`]: key-value stores and the record adapter
//! - [`state`]: the version-history state machine
//! - [`session`]: load-or-create bootstrap and persist-after-mutation
//! - [`observability`]: structured JSON logging
//! - [`cli`]: command-line trigger layer

pub mod cli;
pub mod document;
pub mod naming;
pub mod observability;
pub mod persistence;
pub mod session;
pub mod state;
