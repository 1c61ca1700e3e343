//! Boolean functions over up to three input bits.
//!
//! The query algorithms in this crate treat the oracle as a black box, but
//! the code that *builds* the oracle needs the function written down
//! somewhere. A [`TruthTable`] is that: up to 2^3 output bits packed in a
//! `u8`, with bit `x` holding f(x). Oracles are synthesized from the
//! table's algebraic normal form (see [`crate::oracle`]), so any table
//! constructed here yields a correct circuit.

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, AlgoResult};
use crate::secret::Secret;

/// Classification of a Boolean function for the Deutsch-Jozsa promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionClass {
    /// Same output on every input.
    Constant,
    /// Outputs 1 on exactly half of the inputs.
    Balanced,
    /// Violates the Deutsch-Jozsa promise.
    Neither,
}

impl std::fmt::Display for FunctionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionClass::Constant => write!(f, "CONSTANT"),
            FunctionClass::Balanced => write!(f, "BALANCED"),
            FunctionClass::Neither => write!(f, "NEITHER"),
        }
    }
}

/// A Boolean function f: {0,1}^n -> {0,1} for n in 1..=3.
///
/// Bit `x` of `table` is f(x), where bit `i` of the index `x` is input
/// `x_i` (input i rides on qubit i throughout the workspace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    inputs: u8,
    table: u8,
}

impl TruthTable {
    /// Maximum number of inputs a table can hold.
    pub const MAX_INPUTS: u8 = 3;

    fn check_inputs(inputs: u8) -> AlgoResult<()> {
        if inputs == 0 || inputs > Self::MAX_INPUTS {
            return Err(AlgoError::InvalidInputCount { inputs });
        }
        Ok(())
    }

    /// Build a table from an arbitrary function over the input index.
    pub fn from_fn(inputs: u8, f: impl Fn(u8) -> bool) -> AlgoResult<Self> {
        Self::check_inputs(inputs)?;
        let mut table = 0u8;
        for x in 0..(1u8 << inputs) {
            if f(x) {
                table |= 1 << x;
            }
        }
        Ok(Self { inputs, table })
    }

    /// The constant function f(x) = bit.
    pub fn constant(inputs: u8, bit: bool) -> AlgoResult<Self> {
        Self::from_fn(inputs, |_| bit)
    }

    /// The projection f(x) = x_index.
    pub fn variable(inputs: u8, index: u8) -> AlgoResult<Self> {
        Self::check_inputs(inputs)?;
        if index >= inputs {
            return Err(AlgoError::InputOutOfRange { index, inputs });
        }
        Self::from_fn(inputs, |x| (x >> index) & 1 == 1)
    }

    /// XOR of the inputs selected by `mask`: f(x) = ⊕_{i in mask} x_i.
    pub fn parity(inputs: u8, mask: u8) -> AlgoResult<Self> {
        Self::check_inputs(inputs)?;
        if mask >= (1 << inputs) {
            return Err(AlgoError::InputOutOfRange {
                index: mask,
                inputs,
            });
        }
        Self::from_fn(inputs, |x| (x & mask).count_ones() % 2 == 1)
    }

    /// The Bernstein-Vazirani function f(x) = s · x (mod 2).
    pub fn inner_product(secret: &Secret) -> Self {
        let mask = secret.mask();
        let inputs = secret.len();
        let mut table = 0u8;
        for x in 0..(1u8 << inputs) {
            if (x & mask).count_ones() % 2 == 1 {
                table |= 1 << x;
            }
        }
        Self { inputs, table }
    }

    /// Majority of three inputs: 1 when at least two inputs are 1.
    ///
    /// Balanced (4 of 8 inputs), with ANF x0x1 ⊕ x0x2 ⊕ x1x2.
    pub fn majority() -> Self {
        Self {
            inputs: 3,
            table: {
                let mut t = 0u8;
                for x in 0..8u8 {
                    if x.count_ones() >= 2 {
                        t |= 1 << x;
                    }
                }
                t
            },
        }
    }

    /// The pointwise complement, f(x) = NOT self(x).
    pub fn complement(&self) -> Self {
        let mask = (1u16 << self.size()) - 1;
        Self {
            inputs: self.inputs,
            table: !self.table & mask as u8,
        }
    }

    /// Number of inputs.
    pub fn inputs(&self) -> u8 {
        self.inputs
    }

    /// Number of entries, 2^inputs.
    pub fn size(&self) -> u8 {
        1 << self.inputs
    }

    /// Evaluate the function on an input index.
    pub fn eval(&self, x: u8) -> bool {
        (self.table >> (x & (self.size() - 1))) & 1 == 1
    }

    /// Number of inputs mapped to 1.
    pub fn ones(&self) -> u8 {
        self.table.count_ones() as u8
    }

    /// True if every output is the same.
    pub fn is_constant(&self) -> bool {
        self.ones() == 0 || self.ones() == self.size()
    }

    /// True if exactly half the outputs are 1.
    pub fn is_balanced(&self) -> bool {
        self.ones() * 2 == self.size()
    }

    /// Classify against the Deutsch-Jozsa promise.
    pub fn classify(&self) -> FunctionClass {
        if self.is_constant() {
            FunctionClass::Constant
        } else if self.is_balanced() {
            FunctionClass::Balanced
        } else {
            FunctionClass::Neither
        }
    }

    pub(crate) fn table_bits(&self) -> u8 {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let zero = TruthTable::constant(2, false).unwrap();
        let one = TruthTable::constant(2, true).unwrap();

        assert!(zero.is_constant());
        assert!(one.is_constant());
        assert_eq!(zero.ones(), 0);
        assert_eq!(one.ones(), 4);
        assert_eq!(one.classify(), FunctionClass::Constant);
    }

    #[test]
    fn test_variable_is_balanced() {
        for i in 0..3 {
            let tt = TruthTable::variable(3, i).unwrap();
            assert!(tt.is_balanced());
            assert!(tt.eval(1 << i));
            assert!(!tt.eval(0));
        }
    }

    #[test]
    fn test_variable_out_of_range() {
        let err = TruthTable::variable(2, 2).unwrap_err();
        assert!(matches!(err, AlgoError::InputOutOfRange { .. }));
    }

    #[test]
    fn test_parity() {
        let tt = TruthTable::parity(2, 0b11).unwrap();
        assert!(tt.is_balanced());
        assert!(!tt.eval(0b00));
        assert!(tt.eval(0b01));
        assert!(tt.eval(0b10));
        assert!(!tt.eval(0b11));
    }

    #[test]
    fn test_xnor_via_complement() {
        let xnor = TruthTable::parity(2, 0b11).unwrap().complement();
        assert!(xnor.is_balanced());
        assert!(xnor.eval(0b00));
        assert!(!xnor.eval(0b01));
        assert!(xnor.eval(0b11));
    }

    #[test]
    fn test_majority_is_balanced() {
        let maj = TruthTable::majority();
        assert_eq!(maj.ones(), 4);
        assert_eq!(maj.classify(), FunctionClass::Balanced);
        assert!(!maj.eval(0b001));
        assert!(maj.eval(0b011));
        assert!(maj.eval(0b111));
    }

    #[test]
    fn test_neither() {
        // AND of two inputs: a single 1 output.
        let and = TruthTable::from_fn(2, |x| x == 0b11).unwrap();
        assert_eq!(and.classify(), FunctionClass::Neither);
    }

    #[test]
    fn test_inner_product_matches_parity() {
        let s = "110".parse::<Secret>().unwrap();
        let tt = TruthTable::inner_product(&s);
        for x in 0..8u8 {
            assert_eq!(tt.eval(x), (x & 0b011).count_ones() % 2 == 1);
        }
    }

    #[test]
    fn test_invalid_input_count() {
        assert!(matches!(
            TruthTable::constant(0, false),
            Err(AlgoError::InvalidInputCount { inputs: 0 })
        ));
        assert!(matches!(
            TruthTable::constant(4, false),
            Err(AlgoError::InvalidInputCount { inputs: 4 })
        ));
    }
}
