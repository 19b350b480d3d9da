//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum KvError {
    /// Failed to open the backing store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to read a key.
    #[error("Read failed for {key}: {reason}")]
    Read { key: String, reason: String },

    /// Failed to write a key.
    #[error("Write failed for {key}: {reason}")]
    Write { key: String, reason: String },
}
