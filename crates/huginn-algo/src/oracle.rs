//! Oracle synthesis from truth tables.
//!
//! Both oracle variants are generated from the function's algebraic normal
//! form rather than hand-picked gate sequences. The ANF of f over GF(2) is
//!
//! ```text
//! f(x) = c ⊕ (⊕_i a_i x_i) ⊕ (⊕_{i<j} a_ij x_i x_j) ⊕ a_012 x_0 x_1 x_2
//! ```
//!
//! and each monomial maps to one gate:
//!
//! | term          | phase oracle        | bit oracle (ancilla)  |
//! |---------------|---------------------|-----------------------|
//! | constant 1    | global phase (none) | X on ancilla          |
//! | x_i           | Z(i)                | CX(i, anc)            |
//! | x_i x_j       | CZ(i, j)            | CCX(i, j, anc)        |
//! | x_0 x_1 x_2   | CCZ via H·CCX·H     | rejected              |
//!
//! Synthesizing from the ANF keeps the oracle honest: the circuit phase is
//! exactly (-1)^f(x), so a constant function really contributes only a
//! global phase and classification cannot be fooled by a miscoded oracle.

use tracing::debug;

use huginn_ir::{Circuit, QubitId};

use crate::error::{AlgoError, AlgoResult};
use crate::truth_table::TruthTable;

/// Algebraic normal form of a Boolean function.
///
/// Bit `m` of `coeffs` is the coefficient of the monomial whose variable
/// set is `m` (bit `m = 0` is the constant term).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anf {
    inputs: u8,
    coeffs: u8,
}

impl Anf {
    /// Compute the ANF of a truth table via the Möbius transform.
    pub fn of(table: &TruthTable) -> Self {
        let n = table.inputs();
        let size = 1usize << n;

        let mut coeffs = [false; 8];
        for (x, c) in coeffs.iter_mut().enumerate().take(size) {
            *c = table.table_bits() >> x & 1 == 1;
        }

        // In-place butterfly: after pass i, entry m holds the XOR of f over
        // all subsets of m in variable i.
        for i in 0..n {
            let bit = 1usize << i;
            for m in 0..size {
                if m & bit != 0 {
                    coeffs[m] ^= coeffs[m ^ bit];
                }
            }
        }

        let mut packed = 0u8;
        for (m, &c) in coeffs.iter().enumerate().take(size) {
            if c {
                packed |= 1 << m;
            }
        }
        Self { inputs: n, coeffs: packed }
    }

    /// The constant term of the ANF.
    pub fn constant_term(&self) -> bool {
        self.coeffs & 1 == 1
    }

    /// Non-constant monomials, as variable bitmasks in ascending order.
    pub fn terms(&self) -> impl Iterator<Item = u8> + '_ {
        (1..(1u8 << self.inputs)).filter(move |m| self.coeffs >> m & 1 == 1)
    }

    /// Degree of the function: largest monomial size, 0 for constants.
    pub fn degree(&self) -> u8 {
        self.terms()
            .map(|m| m.count_ones() as u8)
            .max()
            .unwrap_or(0)
    }
}

fn term_qubits(mask: u8, qubits: &[QubitId]) -> Vec<QubitId> {
    qubits
        .iter()
        .enumerate()
        .filter(|(i, _)| mask >> i & 1 == 1)
        .map(|(_, &q)| q)
        .collect()
}

/// Append the phase oracle for `table` to `circuit`.
///
/// Applies phase (-1)^f(x) to the work qubits; the ANF constant term is a
/// global phase and emits nothing.
pub fn apply_phase_oracle(
    circuit: &mut Circuit,
    qubits: &[QubitId],
    table: &TruthTable,
) -> AlgoResult<()> {
    let anf = Anf::of(table);
    debug!(inputs = table.inputs(), degree = anf.degree(), "phase oracle");

    for mask in anf.terms() {
        let q = term_qubits(mask, qubits);
        match q.len() {
            1 => {
                circuit.z(q[0])?;
            }
            2 => {
                circuit.cz(q[0], q[1])?;
            }
            _ => {
                // CCZ: conjugate CCX by Hadamards on the target.
                circuit.h(q[2])?;
                circuit.ccx(q[0], q[1], q[2])?;
                circuit.h(q[2])?;
            }
        }
    }
    Ok(())
}

/// Append the bit oracle for `table` to `circuit`, flipping `ancilla`
/// when f(x) = 1.
///
/// Handles ANF degree up to 2 (the full oracle catalog); a cubic term
/// would need a triply-controlled X, which the gate set does not carry.
pub fn apply_bit_oracle(
    circuit: &mut Circuit,
    qubits: &[QubitId],
    ancilla: QubitId,
    table: &TruthTable,
) -> AlgoResult<()> {
    let anf = Anf::of(table);
    let degree = anf.degree();
    if degree > 2 {
        return Err(AlgoError::OracleDegreeTooHigh { degree });
    }
    debug!(inputs = table.inputs(), degree, "bit oracle");

    if anf.constant_term() {
        circuit.x(ancilla)?;
    }
    for mask in anf.terms() {
        let q = term_qubits(mask, qubits);
        match q.len() {
            1 => {
                circuit.cx(q[0], ancilla)?;
            }
            _ => {
                circuit.ccx(q[0], q[1], ancilla)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::Secret;
    use crate::truth_table::TruthTable;

    fn anf_eval(anf: &Anf, x: u8) -> bool {
        let mut v = anf.constant_term();
        for m in anf.terms() {
            v ^= m & x == m;
        }
        v
    }

    #[test]
    fn test_anf_constant() {
        let anf = Anf::of(&TruthTable::constant(2, true).unwrap());
        assert!(anf.constant_term());
        assert_eq!(anf.terms().count(), 0);
        assert_eq!(anf.degree(), 0);
    }

    #[test]
    fn test_anf_parity_is_linear() {
        let anf = Anf::of(&TruthTable::parity(3, 0b101).unwrap());
        assert!(!anf.constant_term());
        assert_eq!(anf.terms().collect::<Vec<_>>(), vec![0b001, 0b100]);
        assert_eq!(anf.degree(), 1);
    }

    #[test]
    fn test_anf_majority_is_quadratic() {
        let anf = Anf::of(&TruthTable::majority());
        assert_eq!(anf.degree(), 2);
        assert_eq!(anf.terms().collect::<Vec<_>>(), vec![0b011, 0b101, 0b110]);
    }

    #[test]
    fn test_anf_reconstructs_table() {
        // ANF evaluation must agree with the table on every input, for a
        // spread of functions including a cubic one (AND of three inputs).
        let tables = [
            TruthTable::constant(3, false).unwrap(),
            TruthTable::variable(3, 1).unwrap(),
            TruthTable::parity(2, 0b11).unwrap().complement(),
            TruthTable::majority(),
            TruthTable::from_fn(3, |x| x == 0b111).unwrap(),
        ];
        for tt in tables {
            let anf = Anf::of(&tt);
            for x in 0..tt.size() {
                assert_eq!(anf_eval(&anf, x), tt.eval(x), "x={x}");
            }
        }
    }

    #[test]
    fn test_and3_is_cubic() {
        let anf = Anf::of(&TruthTable::from_fn(3, |x| x == 0b111).unwrap());
        assert_eq!(anf.degree(), 3);
    }

    #[test]
    fn test_phase_oracle_gate_choice() {
        let mut circuit = Circuit::with_size("oracle", 3, 0);
        let q: Vec<_> = (0..3).map(QubitId).collect();
        apply_phase_oracle(&mut circuit, &q, &TruthTable::majority()).unwrap();

        let counts = circuit.gate_counts();
        assert_eq!(counts.get("cz"), Some(&3));
        assert_eq!(counts.get("z"), None);
    }

    #[test]
    fn test_phase_oracle_constant_is_empty() {
        let mut circuit = Circuit::with_size("oracle", 2, 0);
        let q: Vec<_> = (0..2).map(QubitId).collect();
        apply_phase_oracle(&mut circuit, &q, &TruthTable::constant(2, true).unwrap()).unwrap();
        assert_eq!(circuit.size(), 0);
    }

    #[test]
    fn test_bit_oracle_linear() {
        let secret: Secret = "101".parse().unwrap();
        let tt = TruthTable::inner_product(&secret);

        let mut circuit = Circuit::with_size("oracle", 4, 0);
        let q: Vec<_> = (0..3).map(QubitId).collect();
        apply_bit_oracle(&mut circuit, &q, QubitId(3), &tt).unwrap();

        let counts = circuit.gate_counts();
        assert_eq!(counts.get("cx"), Some(&2));
    }

    #[test]
    fn test_bit_oracle_rejects_cubic() {
        let tt = TruthTable::from_fn(3, |x| x == 0b111).unwrap();
        let mut circuit = Circuit::with_size("oracle", 4, 0);
        let q: Vec<_> = (0..3).map(QubitId).collect();

        let err = apply_bit_oracle(&mut circuit, &q, QubitId(3), &tt).unwrap_err();
        assert!(matches!(err, AlgoError::OracleDegreeTooHigh { degree: 3 }));
    }
}
