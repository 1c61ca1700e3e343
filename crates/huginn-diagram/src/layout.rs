//! Column layout for circuit schematics.
//!
//! Instructions are packed left to right: each one lands in the earliest
//! column where every wire it spans is free. A multi-qubit gate reserves
//! the whole vertical span between its outermost qubits so its connector
//! line never crosses another element; barriers reserve a full column.

use huginn_ir::{Circuit, InstructionKind, QubitId, StandardGate};

use crate::error::{DiagramError, DiagramResult};

/// What a layout element draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// A gate, with its operand qubits in gate order.
    Gate(StandardGate),
    /// A measurement meter.
    Measure,
    /// A dashed stage separator with an optional label.
    Barrier(Option<String>),
}

/// One placed element of the schematic.
#[derive(Debug, Clone)]
pub struct Element {
    /// Column index, 0 at the left edge.
    pub column: usize,
    /// Operand qubits (gate order: controls before targets).
    pub qubits: Vec<QubitId>,
    /// What to draw.
    pub kind: ElementKind,
}

impl Element {
    /// Lowest wire row this element touches.
    pub fn top_row(&self) -> usize {
        self.qubits.iter().map(|q| q.0 as usize).min().unwrap_or(0)
    }

    /// Highest wire row this element touches.
    pub fn bottom_row(&self) -> usize {
        self.qubits.iter().map(|q| q.0 as usize).max().unwrap_or(0)
    }
}

/// A packed schematic layout.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Number of wires.
    pub num_qubits: usize,
    /// Number of occupied columns.
    pub num_columns: usize,
    /// Placed elements.
    pub elements: Vec<Element>,
    /// Per-wire labels, top to bottom.
    pub wire_labels: Vec<String>,
}

impl Layout {
    /// Pack a circuit into columns.
    pub fn from_circuit(circuit: &Circuit) -> DiagramResult<Self> {
        let num_qubits = circuit.num_qubits();
        if num_qubits == 0 {
            return Err(DiagramError::EmptyCircuit);
        }

        let wire_labels = circuit.qubits().iter().map(|q| q.wire_label()).collect();

        // Next free column per wire.
        let mut frontier = vec![0usize; num_qubits];
        let mut elements = vec![];

        for inst in circuit.instructions() {
            let (kind, span) = match &inst.kind {
                InstructionKind::Gate(g) => {
                    let rows: Vec<_> = inst.qubits.iter().map(|q| q.0 as usize).collect();
                    let lo = *rows.iter().min().unwrap_or(&0);
                    let hi = *rows.iter().max().unwrap_or(&0);
                    (ElementKind::Gate(*g), lo..=hi)
                }
                InstructionKind::Measure => {
                    let row = inst.qubits[0].0 as usize;
                    (ElementKind::Measure, row..=row)
                }
                InstructionKind::Barrier { label } => {
                    (ElementKind::Barrier(label.clone()), 0..=num_qubits - 1)
                }
            };

            let column = span
                .clone()
                .map(|row| frontier[row])
                .max()
                .unwrap_or(0);
            for row in span {
                frontier[row] = column + 1;
            }

            elements.push(Element {
                column,
                qubits: inst.qubits.clone(),
                kind,
            });
        }

        Ok(Self {
            num_qubits,
            num_columns: frontier.into_iter().max().unwrap_or(0),
            elements,
            wire_labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huginn_ir::QubitId;

    #[test]
    fn test_parallel_gates_share_column() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.h(QubitId(1)).unwrap();

        let layout = Layout::from_circuit(&circuit).unwrap();
        assert_eq!(layout.num_columns, 1);
        assert_eq!(layout.elements[0].column, 0);
        assert_eq!(layout.elements[1].column, 0);
    }

    #[test]
    fn test_gate_span_blocks_middle_wire() {
        // CX(0, 2) spans wire 1, so a later H(1) cannot share its column.
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.cx(QubitId(0), QubitId(2)).unwrap();
        circuit.h(QubitId(1)).unwrap();

        let layout = Layout::from_circuit(&circuit).unwrap();
        assert_eq!(layout.elements[0].column, 0);
        assert_eq!(layout.elements[1].column, 1);
    }

    #[test]
    fn test_barrier_takes_full_column() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.barrier_all("oracle").unwrap();
        circuit.h(QubitId(1)).unwrap();

        let layout = Layout::from_circuit(&circuit).unwrap();
        assert_eq!(layout.elements[1].column, 1);
        assert_eq!(layout.elements[2].column, 2);
        assert_eq!(layout.num_columns, 3);
    }

    #[test]
    fn test_empty_circuit_rejected() {
        let circuit = Circuit::new("empty");
        assert!(matches!(
            Layout::from_circuit(&circuit),
            Err(DiagramError::EmptyCircuit)
        ));
    }

    #[test]
    fn test_wire_labels() {
        let mut circuit = Circuit::new("labels");
        circuit.add_qreg("q", 2);
        circuit.add_named_qubit("aux");

        let layout = Layout::from_circuit(&circuit).unwrap();
        assert_eq!(layout.wire_labels, vec!["q0", "q1", "aux"]);
    }
}
