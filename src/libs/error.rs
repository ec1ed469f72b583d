//! Error kinds raised at the boundaries of the timer core.
//!
//! The timer itself never fails on normal ticks. Everything that can go wrong
//! happens where the core meets the settings provider, the record store or the
//! task list, and each of those failures has its own variant so callers can
//! tell a bad input from a broken database from a harmless retry collision.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PomodoroError {
    /// A value was outside its accepted range, or an operation was not
    /// allowed in the current timer state.
    #[error("{0}")]
    Validation(String),

    /// The SQLite backend rejected a read or a write.
    #[error("storage operation failed: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// A stored value could not be decoded back into its domain type.
    #[error("stored data is malformed: {0}")]
    Corrupted(String),

    /// A session record with this id has already been appended.
    #[error("session record {0} already exists")]
    DuplicateId(String),

    /// The referenced task does not exist.
    #[error("task {0} not found")]
    LookupMiss(String),
}

impl PomodoroError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PomodoroError::Validation(msg.into())
    }

    /// Only backend failures may succeed when retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PomodoroError::Persistence(_))
    }
}

pub type PomodoroResult<T> = std::result::Result<T, PomodoroError>;
