//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("qubit {qubit} out of range for gate '{gate_name}'")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Gate (or operation) name for context.
        gate_name: String,
    },

    /// Classical bit not found in circuit.
    #[error("classical bit {clbit} out of range")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
    },

    /// Gate requires a different number of qubits.
    #[error("gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in a multi-qubit operation.
    #[error("duplicate qubit {qubit} in gate '{gate_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Gate name for context.
        gate_name: String,
    },

    /// Measurement operand lists do not line up.
    #[error("measure: qubit count ({qubits}) does not match clbit count ({clbits})")]
    MeasureMismatch {
        /// Number of qubits supplied.
        qubits: usize,
        /// Number of classical bits supplied.
        clbits: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
