//! Unified error types for `MedBay`.
//!
//! Every fallible operation in the crate returns [`Result`]. Persistence and
//! document errors are fatal when a store is opened; lookup errors on
//! mutations are recoverable and leave the store untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The storage location could not be read or written.
    #[error("Storage at {location} is unavailable: {source}")]
    PersistenceUnavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The persisted document does not have the expected shape.
    #[error("Malformed medicine document: {message}")]
    MalformedDocument { message: String },

    /// A mutation referenced a medicine name that is not in the store.
    #[error("Unknown medicine: {name}")]
    UnknownMedicine { name: String },

    /// The medicine exists but has no entry on today's checklist.
    #[error("Medicine '{name}' is not scheduled today")]
    NotScheduledToday { name: String },

    #[error("Invalid weekly schedule: {message}")]
    InvalidSchedule { message: String },

    /// Day indexes run from 0 (Sunday) to 6 (Saturday).
    #[error("Invalid day index: {day}")]
    InvalidDay { day: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
