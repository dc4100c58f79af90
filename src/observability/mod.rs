//! Observability subsystem
//!
//! Structured JSON logging of lifecycle, mutation and persistence events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on editor state
//! 3. No async or background threads
//!
//! # Usage
//!
//! ```ignore
//! use draftline::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::VersionSaved, &[("version_id", "...")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
