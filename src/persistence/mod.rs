//! # Persistence
//!
//! The document record lives in a synchronous key-value store behind the
//! [`KeyValueStore`] capability, so the core runs against the in-memory
//! store in tests and the file store in the CLI.

pub mod adapter;
pub mod backend;
pub mod errors;
pub mod file;
pub mod memory;

pub use adapter::PersistenceAdapter;
pub use backend::KeyValueStore;
pub use errors::{PersistenceError, PersistenceResult};
pub use file::FileStore;
pub use memory::MemoryStore;
