//! Unified error types for the LogiTrack workspace.
//!
//! The derived-state engine itself is total and never returns these; they
//! surface at the boundaries where catalogs, configuration, and user input
//! enter the system.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LogitrackError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// The catalog violates an ingestion invariant.
    #[error("invalid catalog: {message}")]
    Catalog {
        /// Description of the violated invariant.
        message: String,
    },

    /// A planning slot is malformed.
    #[error("invalid slot: {message}")]
    InvalidSlot {
        /// Description of the problem.
        message: String,
    },

    /// A status name is not part of the known enumeration.
    #[error("unknown status: \"{value}\"")]
    UnknownStatus {
        /// The rejected input.
        value: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LogitrackError>;
