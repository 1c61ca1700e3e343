//! Error types for algorithm construction and analysis.

use thiserror::Error;

/// Errors from truth tables, oracle synthesis, and histogram analysis.
#[derive(Debug, Error)]
pub enum AlgoError {
    /// Truth table requested with an unsupported number of inputs.
    #[error("truth tables support 1 to 3 inputs, got {inputs}")]
    InvalidInputCount {
        /// Requested number of inputs.
        inputs: u8,
    },

    /// Input index out of range for a truth table.
    #[error("input index {index} out of range for {inputs} inputs")]
    InputOutOfRange {
        /// Requested input index.
        index: u8,
        /// Number of inputs in the table.
        inputs: u8,
    },

    /// Secret string failed to parse.
    #[error("invalid secret '{0}': expected 1 to 3 characters of '0'/'1'")]
    InvalidSecret(String),

    /// The ancilla bit oracle only handles ANF terms up to degree 2.
    #[error("bit oracle supports ANF terms up to degree 2, function has degree {degree}")]
    OracleDegreeTooHigh {
        /// ANF degree of the offending function.
        degree: u8,
    },

    /// No oracle catalog exists for the requested size.
    #[error("no oracle catalog for {work_bits} work qubits (supported: 2, 3)")]
    UnsupportedSize {
        /// Requested number of work qubits.
        work_bits: u8,
    },

    /// Histogram analysis was handed an empty histogram.
    #[error("cannot analyze an empty measurement histogram")]
    EmptyCounts,

    /// Circuit construction failed.
    #[error("circuit construction error: {0}")]
    Ir(#[from] huginn_ir::IrError),
}

/// Result type for algorithm operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
