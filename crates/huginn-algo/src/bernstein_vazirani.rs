//! Bernstein-Vazirani circuit construction.
//!
//! The hidden function is f(x) = s · x, whose ANF is purely linear: the
//! phase oracle is one Z per set secret bit and the ancilla oracle one CX
//! per set bit. A single query puts the register in |s⟩ exactly, so the
//! most frequent measured bitstring *is* the secret.

use huginn_ir::Circuit;

use crate::error::AlgoResult;
use crate::oracle::{apply_bit_oracle, apply_phase_oracle};
use crate::secret::Secret;
use crate::truth_table::TruthTable;

/// Build the phase-oracle Bernstein-Vazirani circuit for `secret`.
pub fn bernstein_vazirani(secret: &Secret) -> AlgoResult<Circuit> {
    let table = TruthTable::inner_product(secret);
    let n = secret.len() as u32;
    let mut circuit = Circuit::new(format!("bernstein_vazirani_{secret}"));
    let q = circuit.add_qreg("q", n);
    let c = circuit.add_creg("c", n);

    for &qb in &q {
        circuit.h(qb)?;
    }
    circuit.barrier_all("superposition")?;

    apply_phase_oracle(&mut circuit, &q, &table)?;
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

/// Build the ancilla-variant Bernstein-Vazirani circuit for `secret`.
///
/// Same interferometer as the phase variant; the oracle is CX from each
/// set secret bit into the |−⟩ ancilla, and only work qubits are measured.
pub fn bernstein_vazirani_with_ancilla(secret: &Secret) -> AlgoResult<Circuit> {
    let table = TruthTable::inner_product(secret);
    let n = secret.len() as u32;
    let mut circuit = Circuit::new(format!("bernstein_vazirani_{secret}_aux"));
    let q = circuit.add_qreg("q", n);
    let aux = circuit.add_named_qubit("aux");
    let c = circuit.add_creg("c", n);

    circuit.x(aux)?;
    circuit.h(aux)?;
    for &qb in &q {
        circuit.h(qb)?;
    }
    circuit.barrier_all("superposition")?;

    apply_bit_oracle(&mut circuit, &q, aux, &table)?;
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
    fn test_phase_oracle_is_z_per_set_bit() {
        let secret: Secret = "101".parse().unwrap();
        let circuit = bernstein_vazirani(&secret).unwrap();

        let counts = circuit.gate_counts();
        assert_eq!(counts.get("z"), Some(&2));
        assert_eq!(counts.get("h"), Some(&6));
        assert_eq!(counts.get("cz"), None);
    }

    #[test]
    fn test_zero_secret_has_empty_oracle() {
        let secret: Secret = "00".parse().unwrap();
        let circuit = bernstein_vazirani(&secret).unwrap();
        assert_eq!(circuit.gate_counts().get("z"), None);
    }

    #[test]
    fn test_ancilla_oracle_is_cx_per_set_bit() {
        let secret: Secret = "11".parse().unwrap();
        let circuit = bernstein_vazirani_with_ancilla(&secret).unwrap();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.gate_counts().get("cx"), Some(&2));
        assert_eq!(circuit.measurement_map().len(), 2);
    }

    #[test]
    fn test_circuit_names_carry_secret() {
        let secret: Secret = "011".parse().unwrap();
        assert_eq!(
            bernstein_vazirani(&secret).unwrap().name(),
            "bernstein_vazirani_011"
        );
        assert_eq!(
            bernstein_vazirani_with_ancilla(&secret).unwrap().name(),
            "bernstein_vazirani_011_aux"
        );
    }
}
