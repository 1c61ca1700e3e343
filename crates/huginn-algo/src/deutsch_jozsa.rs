//! Deutsch-Jozsa circuit construction.
//!
//! One oracle query decides whether a promised function is constant or
//! balanced. In the phase variant the oracle acts directly on the work
//! qubits as Z-type gates; in the ancilla variant an extra qubit prepared
//! in |−⟩ absorbs the oracle output via X-type gates (phase kickback), and
//! only the work qubits are measured.
//!
//! Both builders emit labeled barriers between the three stages so diagram
//! output can annotate them.

use huginn_ir::Circuit;

use crate::error::AlgoResult;
use crate::oracle::{apply_bit_oracle, apply_phase_oracle};
use crate::truth_table::TruthTable;

/// Build the phase-oracle Deutsch-Jozsa circuit for `table`.
///
/// H on every work qubit, the phase oracle, H again, measure everything.
/// All-zeros output means constant.
pub fn deutsch_jozsa(table: &TruthTable) -> AlgoResult<Circuit> {
    let n = table.inputs() as u32;
    let mut circuit = Circuit::new(format!("deutsch_jozsa_{n}q"));
    let q = circuit.add_qreg("q", n);
    let c = circuit.add_creg("c", n);

    for &qb in &q {
        circuit.h(qb)?;
    }
    circuit.barrier_all("superposition")?;

    apply_phase_oracle(&mut circuit, &q, table)?;
    circuit.barrier_all("oracle")?;

    for &qb in &q {
        circuit.h(qb)?;
    }
    circuit.barrier_all("interference")?;

    for (&qb, &cb) in q.iter().zip(&c) {
        circuit.measure(qb, cb)?;
    }
    Ok(circuit)
}

/// Build the ancilla-variant Deutsch-Jozsa circuit for `table`.
///
/// The ancilla is prepared in |−⟩ (X then H), the oracle writes f into it
/// as bit flips, and only the work qubits are measured.
pub fn deutsch_jozsa_with_ancilla(table: &TruthTable) -> AlgoResult<Circuit> {
    let n = table.inputs() as u32;
    let mut circuit = Circuit::new(format!("deutsch_jozsa_{n}q_aux"));
    let q = circuit.add_qreg("q", n);
    let aux = circuit.add_named_qubit("aux");
    let c = circuit.add_creg("c", n);

    circuit.x(aux)?;
    circuit.h(aux)?;
    for &qb in &q {
        circuit.h(qb)?;
    }
    circuit.barrier_all("superposition")?;

    apply_bit_oracle(&mut circuit, &q, aux, table)?;
    circuit.barrier_all("oracle")?;

    for &qb in &q {
        circuit.h(qb)?;
    }
    circuit.barrier_all("interference")?;

    for (&qb, &cb) in q.iter().zip(&c) {
        circuit.measure(qb, cb)?;
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_circuit_shape() {
        let tt = TruthTable::parity(2, 0b11).unwrap();
        let circuit = deutsch_jozsa(&tt).unwrap();

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.measurement_map().len(), 2);

        let counts = circuit.gate_counts();
        assert_eq!(counts.get("h"), Some(&4));
        assert_eq!(counts.get("cz"), Some(&1));
    }

    #[test]
    fn test_ancilla_circuit_measures_work_only() {
        let tt = TruthTable::constant(3, true).unwrap();
        let circuit = deutsch_jozsa_with_ancilla(&tt).unwrap();

        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.num_clbits(), 3);

        // The ancilla (qubit 3) must not appear in the measurement map.
        let map = circuit.measurement_map();
        assert_eq!(map.len(), 3);
        assert!(map.iter().all(|(q, _)| q.0 < 3));
    }

    #[test]
    fn test_ancilla_constant_one_flips_ancilla() {
        let tt = TruthTable::constant(2, true).unwrap();
        let circuit = deutsch_jozsa_with_ancilla(&tt).unwrap();

        // X for the |−⟩ prep plus X for the ANF constant term.
        assert_eq!(circuit.gate_counts().get("x"), Some(&2));
    }

    #[test]
    fn test_stage_barriers() {
        let tt = TruthTable::variable(2, 0).unwrap();
        let circuit = deutsch_jozsa(&tt).unwrap();

        let labels: Vec<_> = circuit
            .instructions()
            .filter_map(|i| i.barrier_label())
            .collect();
        assert_eq!(labels, vec!["superposition", "oracle", "interference"]);
    }
}
