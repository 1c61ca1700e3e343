//! Quantum gate types.
//!
//! The gate set is deliberately fixed: the query algorithms in this suite
//! only ever use Clifford-style gates with no free parameters, so
//! [`StandardGate`] is a plain `Copy` enum and the IR carries no symbolic
//! parameter machinery.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard gates with known semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Toffoli gate (CCX).
    CCX,
}

impl StandardGate {
    /// Get the lowercase name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
        }
    }

    /// Number of qubits this gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg => 1,
            StandardGate::CX | StandardGate::CY | StandardGate::CZ | StandardGate::Swap => 2,
            StandardGate::CCX => 3,
        }
    }

    /// Number of leading operands that act as controls.
    ///
    /// CZ is symmetric but drawn control-first by convention, matching the
    /// operand order the [`crate::Circuit`] builder methods take.
    #[inline]
    pub fn num_controls(&self) -> u32 {
        match self {
            StandardGate::CX | StandardGate::CY | StandardGate::CZ => 1,
            StandardGate::CCX => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::CZ.name(), "cz");
        assert_eq!(StandardGate::CCX.name(), "ccx");
    }

    #[test]
    fn test_gate_arity() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::Swap.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);
    }

    #[test]
    fn test_gate_controls() {
        assert_eq!(StandardGate::Z.num_controls(), 0);
        assert_eq!(StandardGate::CZ.num_controls(), 1);
        assert_eq!(StandardGate::CCX.num_controls(), 2);
        assert_eq!(StandardGate::Swap.num_controls(), 0);
    }
}
