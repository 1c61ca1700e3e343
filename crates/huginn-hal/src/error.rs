//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Backend is not available.
    #[error("backend not available: {0}")]
    BackendUnavailable(String),

    /// Job submission failed.
    #[error("job submission failed: {0}")]
    SubmissionFailed(String),

    /// Job execution failed.
    #[error("job failed: {0}")]
    JobFailed(String),

    /// Job was cancelled.
    #[error("job cancelled")]
    JobCancelled,

    /// Job not found.
    #[error("job not found: {0}")]
    JobNotFound(String),

    /// Invalid circuit.
    #[error("invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Circuit exceeds backend capabilities.
    #[error("circuit exceeds backend capabilities: {0}")]
    CircuitTooLarge(String),

    /// Gate not supported by the backend.
    #[error("gate '{0}' not supported by backend")]
    UnsupportedGate(String),

    /// Invalid number of shots.
    #[error("invalid shots: {0}")]
    InvalidShots(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Timeout waiting for job.
    #[error("timeout waiting for job {0}")]
    Timeout(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
