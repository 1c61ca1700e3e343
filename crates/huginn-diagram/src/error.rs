//! Error types for diagram generation.

use thiserror::Error;

/// Errors from layout and rendering.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// The circuit has no qubits, nothing to draw.
    #[error("cannot render a circuit with no qubits")]
    EmptyCircuit,

    /// Writing the output file failed.
    #[error("failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for diagram operations.
pub type DiagramResult<T> = Result<T, DiagramError>;
