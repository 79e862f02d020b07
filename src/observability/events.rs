//! Observable events of the catalog service
//!
//! Events are explicit and typed; each one has a fixed log name and severity.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup failed before serving
    BootFailed,
    /// Configuration resolved
    ConfigLoaded,
    /// Data file decoded into the store
    CatalogLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Server loop exited
    ShutdownComplete,

    // Mutations
    /// Record created and persisted
    RecordCreated,
    /// Record updated and persisted
    RecordUpdated,
    /// Record deleted and persisted
    RecordDeleted,
    /// Data file rewrite failed
    PersistFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "POKEDEX_STARTUP_BEGIN",
            Event::BootFailed => "POKEDEX_STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::Serving => "POKEDEX_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::PersistFailed => "CATALOG_PERSIST_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Fatal,
            Event::PersistFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
