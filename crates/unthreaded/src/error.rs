//! Error types for the unthreaded executor.

use thiserror::Error;

/// Boxed failure produced by a unit of work.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the executor.
///
/// Every failure reaches the caller synchronously, from the same call that
/// submitted the work. Nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation only has meaning for a truly asynchronous executor.
    #[error("{operation} is not supported by an unthreaded executor")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// The executor has been shut down and refuses the request.
    #[error("submission rejected: executor has been shut down")]
    Rejected,

    /// A batch request was malformed (e.g. empty).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A batch contained an absent task.
    #[error("task at position {index} is absent")]
    NullTask {
        /// Position of the absent entry in the batch.
        index: usize,
    },

    /// A unit of work failed and the failure was re-raised to the submitter.
    #[error("task failed: {0}")]
    Task(#[source] BoxError),

    /// Every task of an `invoke_any` batch failed.
    #[error("all {attempts} tasks failed, last error: {cause}")]
    Execution {
        /// Number of tasks that were attempted.
        attempts: usize,
        /// The most recent failure observed.
        #[source]
        cause: BoxError,
    },
}

impl Error {
    /// Create an unsupported-operation error.
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Whether this error signals an intentionally unsupported operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Whether the request was rejected because the executor is shut down.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}
