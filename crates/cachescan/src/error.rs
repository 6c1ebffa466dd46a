//! Error types for cache scanning.
//!
//! Only `InvalidMode` and explicit cancellation abort a whole report;
//! everything else degrades to "this kind/item has no data" so one bad
//! cache never prevents reporting on the others.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving modes or scanning caches.
#[derive(Debug, Error)]
pub enum Error {
    /// An unrecognized mode token. Fatal; reported before any scanning begins.
    #[error("provided value for 'mode' ({token}) not one of [{expected}]")]
    InvalidMode {
        /// The offending token
        token: String,
        /// The valid vocabulary, pipe-separated
        expected: String,
    },

    /// A single ABI file failed to parse. Caught per item; the rest of the
    /// kind's scan continues.
    #[error("malformed ABI file {path}: {message}")]
    MalformedAbi {
        /// Path of the file that failed to parse
        path: PathBuf,
        /// Description of the parse failure
        message: String,
    },

    /// The scan was cancelled via its [`CancelToken`](crate::CancelToken).
    /// Partially built summaries are discarded, never returned.
    #[error("scan cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache scanning operations.
pub type Result<T> = std::result::Result<T, Error>;
