//! Error types for DNS record management
//!
//! Every provider reports failures through [`Error`]. Batch operations
//! (append/set/delete) wrap per-record failures in
//! [`Error::PartialFailure`], which carries the records that were already
//! applied so callers never lose the partial result set.

use crate::record::Record;
use std::fmt;
use thiserror::Error;

/// Result type alias for record management operations
pub type Result<T> = std::result::Result<T, Error>;

/// The batch operation a [`Error::PartialFailure`] happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `append_records`
    Append,
    /// `set_records`
    Set,
    /// `delete_records`
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Append => "append",
            Operation::Set => "set",
            Operation::Delete => "delete",
        })
    }
}

/// Core error type for record management
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration (credentials, provider type)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request construction, network, TLS, timeout or decode failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The caller cancelled the operation or its deadline passed
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    /// Non-2xx response from the provider API
    ///
    /// `body` is the raw response text, not parsed.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The zone is not present in the provider account
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    /// One record of a batch failed after the preceding ones were applied
    #[error("failed to {operation} record {record}: {source}")]
    PartialFailure {
        /// Batch operation that failed
        operation: Operation,
        /// Name of the record that failed
        record: String,
        /// Records applied before the failure, in input order
        completed: Vec<Record>,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a cancellation error
    pub fn cancelled(msg: impl Into<String>) -> Self {
        Self::Cancelled(msg.into())
    }

    /// Create an API error from a status code and raw body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a "zone not found" error
    pub fn zone_not_found(zone: impl Into<String>) -> Self {
        Self::ZoneNotFound(zone.into())
    }

    /// Wrap a per-record failure together with the records applied so far
    pub fn partial(
        operation: Operation,
        record: impl Into<String>,
        completed: Vec<Record>,
        source: Error,
    ) -> Self {
        Self::PartialFailure {
            operation,
            record: record.into(),
            completed,
            source: Box::new(source),
        }
    }

    /// Records that were applied before a batch failed
    ///
    /// Empty for every error other than [`Error::PartialFailure`].
    pub fn completed(&self) -> &[Record] {
        match self {
            Self::PartialFailure { completed, .. } => completed,
            _ => &[],
        }
    }

    /// Whether retrying the same request may succeed
    ///
    /// Transport failures and 5xx/429 responses are transient; configuration
    /// problems, missing zones and other 4xx responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::PartialFailure { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}
