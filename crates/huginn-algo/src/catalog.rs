//! Named oracle cases for the demo suite, and the query-cost model.
//!
//! The Deutsch-Jozsa cases cover every promise shape expressible at each
//! size: both constants, every single-variable projection, parity, and at
//! three qubits the majority function (balanced, purely quadratic ANF).

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, AlgoResult};
use crate::secret::Secret;
use crate::truth_table::{FunctionClass, TruthTable};

/// A named Deutsch-Jozsa oracle case.
#[derive(Debug, Clone)]
pub struct OracleCase {
    /// Short identifier, usable as a file stem.
    pub name: &'static str,
    /// Human-readable formula.
    pub formula: &'static str,
    /// The function itself.
    pub truth_table: TruthTable,
    /// Its true class (what a correct run must report).
    pub class: FunctionClass,
}

/// The Deutsch-Jozsa oracle catalog for 2 or 3 work qubits.
pub fn deutsch_jozsa_cases(work_bits: u8) -> AlgoResult<Vec<OracleCase>> {
    let case = |name, formula, truth_table: TruthTable| OracleCase {
        name,
        formula,
        class: truth_table.classify(),
        truth_table,
    };

    match work_bits {
        2 => Ok(vec![
            case("constant_0", "f(x) = 0", TruthTable::constant(2, false)?),
            case("constant_1", "f(x) = 1", TruthTable::constant(2, true)?),
            case("x0", "f(x) = x0", TruthTable::variable(2, 0)?),
            case("x1", "f(x) = x1", TruthTable::variable(2, 1)?),
            case("xor", "f(x) = x0 ⊕ x1", TruthTable::parity(2, 0b11)?),
            case(
                "xnor",
                "f(x) = ¬(x0 ⊕ x1)",
                TruthTable::parity(2, 0b11)?.complement(),
            ),
        ]),
        3 => Ok(vec![
            case("constant_0", "f(x) = 0", TruthTable::constant(3, false)?),
            case("constant_1", "f(x) = 1", TruthTable::constant(3, true)?),
            case("x0", "f(x) = x0", TruthTable::variable(3, 0)?),
            case("x1", "f(x) = x1", TruthTable::variable(3, 1)?),
            case("x2", "f(x) = x2", TruthTable::variable(3, 2)?),
            case("xor_01", "f(x) = x0 ⊕ x1", TruthTable::parity(3, 0b011)?),
            case(
                "majority",
                "f(x) = maj(x0, x1, x2)",
                TruthTable::majority(),
            ),
        ]),
        _ => Err(AlgoError::UnsupportedSize { work_bits }),
    }
}

/// Every secret of the given length, in ascending mask order.
pub fn bernstein_vazirani_secrets(work_bits: u8) -> AlgoResult<Vec<Secret>> {
    if !(2..=3).contains(&work_bits) {
        return Err(AlgoError::UnsupportedSize { work_bits });
    }
    (0..(1u8 << work_bits))
        .map(|mask| Secret::new((0..work_bits).map(|i| mask >> i & 1 == 1).collect()))
        .collect()
}

/// Oracle-query counts for the classical-vs-quantum comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCost {
    /// Worst-case deterministic classical queries.
    pub classical: u32,
    /// Quantum queries (always one for these algorithms).
    pub quantum: u32,
}

/// Deutsch-Jozsa query cost: classically 2^(n-1) + 1 evaluations in the
/// worst case, quantumly one.
pub fn deutsch_jozsa_queries(work_bits: u8) -> QueryCost {
    QueryCost {
        classical: (1 << (work_bits.saturating_sub(1))) + 1,
        quantum: 1,
    }
}

/// Bernstein-Vazirani query cost: classically n queries (one per bit),
/// quantumly one.
pub fn bernstein_vazirani_queries(work_bits: u8) -> QueryCost {
    QueryCost {
        classical: work_bits as u32,
        quantum: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_qubit_catalog() {
        let cases = deutsch_jozsa_cases(2).unwrap();
        assert_eq!(cases.len(), 6);

        let constants = cases
            .iter()
            .filter(|c| c.class == FunctionClass::Constant)
            .count();
        assert_eq!(constants, 2);
        assert!(cases.iter().all(|c| c.class != FunctionClass::Neither));
    }

    #[test]
    fn test_three_qubit_catalog() {
        let cases = deutsch_jozsa_cases(3).unwrap();
        assert_eq!(cases.len(), 7);

        let majority = cases.iter().find(|c| c.name == "majority").unwrap();
        assert_eq!(majority.class, FunctionClass::Balanced);
    }

    #[test]
    fn test_catalog_unsupported_size() {
        assert!(matches!(
            deutsch_jozsa_cases(1),
            Err(AlgoError::UnsupportedSize { work_bits: 1 })
        ));
    }

    #[test]
    fn test_all_secrets_enumerated() {
        let secrets = bernstein_vazirani_secrets(3).unwrap();
        assert_eq!(secrets.len(), 8);
        assert_eq!(secrets[0].to_string(), "000");
        assert_eq!(secrets[5].to_string(), "101");
        assert_eq!(secrets[7].to_string(), "111");
    }

    #[test]
    fn test_query_costs() {
        assert_eq!(
            deutsch_jozsa_queries(2),
            QueryCost {
                classical: 3,
                quantum: 1
            }
        );
        assert_eq!(deutsch_jozsa_queries(3).classical, 5);
        assert_eq!(bernstein_vazirani_queries(3).classical, 3);
    }
}
