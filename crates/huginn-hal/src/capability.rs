//! Backend capability descriptions.

use serde::{Deserialize, Serialize};

use huginn_ir::StandardGate;

/// The set of gates a backend can execute natively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSet(Vec<StandardGate>);

impl GateSet {
    /// Create a gate set from an explicit list.
    pub fn new(gates: impl IntoIterator<Item = StandardGate>) -> Self {
        Self(gates.into_iter().collect())
    }

    /// The full [`StandardGate`] set.
    pub fn all() -> Self {
        Self::new([
            StandardGate::I,
            StandardGate::X,
            StandardGate::Y,
            StandardGate::Z,
            StandardGate::H,
            StandardGate::S,
            StandardGate::Sdg,
            StandardGate::T,
            StandardGate::Tdg,
            StandardGate::CX,
            StandardGate::CY,
            StandardGate::CZ,
            StandardGate::Swap,
            StandardGate::CCX,
        ])
    }

    /// Check whether a gate is in the set.
    pub fn contains(&self, gate: StandardGate) -> bool {
        self.0.contains(&gate)
    }

    /// Iterate over the gates in the set.
    pub fn iter(&self) -> impl Iterator<Item = StandardGate> + '_ {
        self.0.iter().copied()
    }
}

/// Capabilities of a quantum backend.
///
/// Cached at backend construction; [`crate::Backend::capabilities`] returns
/// a reference without performing I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Maximum number of qubits.
    pub num_qubits: u32,
    /// Gates the backend executes natively.
    pub gate_set: GateSet,
    /// Whether this backend is a simulator.
    pub is_simulator: bool,
    /// Maximum number of shots per job.
    pub max_shots: u32,
}

impl Capabilities {
    /// Capabilities for a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gate_set: GateSet::all(),
            is_simulator: true,
            max_shots: 1_000_000,
        }
    }
}
