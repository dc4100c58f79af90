//! Observable events
//!
//! Every state transition and persistence outcome the editor core can
//! report. Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in the editor core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Session bootstrap begins
    SessionStart,
    /// Session bootstrap complete, ready for mutations
    SessionReady,
    /// Configuration loaded
    ConfigLoaded,
    /// A CLI command ended in an error, process exits
    CommandFailed,

    // Loading
    /// Persisted document found and accepted
    StateLoaded,
    /// No persisted document, fresh one created
    StateDefaulted,
    /// Persisted document unreadable, treated as absent
    StateCorrupt,
    /// Loaded version list exceeded the cap and was truncated
    StateTruncated,

    // Mutations
    /// Content replaced
    ContentEdited,
    /// Snapshot created
    VersionSaved,
    /// Oldest snapshot dropped to honor the cap
    VersionEvicted,
    /// Snapshot renamed
    VersionRenamed,
    /// Rename refused
    RenameRejected,
    /// Snapshot removed
    VersionDeleted,
    /// Selected snapshot copied back into the content
    VersionRestored,

    // Persistence
    /// Document written to the store
    PersistComplete,
    /// Store rejected the write
    PersistFailed,
}

impl Event {
    /// Returns the event name as it appears in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionReady => "SESSION_READY",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CommandFailed => "COMMAND_FAILED",
            Event::StateLoaded => "STATE_LOADED",
            Event::StateDefaulted => "STATE_DEFAULTED",
            Event::StateCorrupt => "STATE_CORRUPT",
            Event::StateTruncated => "STATE_TRUNCATED",
            Event::ContentEdited => "CONTENT_EDITED",
            Event::VersionSaved => "VERSION_SAVED",
            Event::VersionEvicted => "VERSION_EVICTED",
            Event::VersionRenamed => "VERSION_RENAMED",
            Event::RenameRejected => "RENAME_REJECTED",
            Event::VersionDeleted => "VERSION_DELETED",
            Event::VersionRestored => "VERSION_RESTORED",
            Event::PersistComplete => "PERSIST_COMPLETE",
            Event::PersistFailed => "PERSIST_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ContentEdited | Event::PersistComplete => Severity::Trace,
            Event::StateCorrupt | Event::StateTruncated | Event::RenameRejected => Severity::Warn,
            Event::PersistFailed => Severity::Error,
            Event::CommandFailed => Severity::Fatal,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
