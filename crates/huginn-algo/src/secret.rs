//! The hidden bitstring of the Bernstein-Vazirani problem.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, AlgoResult};

/// A hidden bitstring s of 1 to 3 bits.
///
/// Bit `i` rides on qubit `i` and lands in character `i` of measured
/// bitstrings, so the algorithm's output compares to `to_string()`
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Secret {
    bits: Vec<bool>,
}

impl Secret {
    /// Create a secret from its bits (bit `i` first).
    pub fn new(bits: Vec<bool>) -> AlgoResult<Self> {
        if bits.is_empty() || bits.len() > 3 {
            return Err(AlgoError::InvalidSecret(
                bits.iter().map(|&b| if b { '1' } else { '0' }).collect(),
            ));
        }
        Ok(Self { bits })
    }

    /// Number of bits.
    pub fn len(&self) -> u8 {
        self.bits.len() as u8
    }

    /// True if the secret is the all-zeros string.
    ///
    /// The algorithm still recovers it; f is then constant 0.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| !b)
    }

    /// Bit `i` of the secret.
    pub fn bit(&self, i: u8) -> bool {
        self.bits.get(i as usize).copied().unwrap_or(false)
    }

    /// The bits in order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// The secret as a bitmask (bit `i` of the mask is bit `i`).
    pub fn mask(&self) -> u8 {
        self.bits
            .iter()
            .enumerate()
            .fold(0, |m, (i, &b)| if b { m | (1 << i) } else { m })
    }

    /// Inner product s · x (mod 2).
    pub fn dot(&self, x: u8) -> bool {
        (self.mask() & x).count_ones() % 2 == 1
    }
}

impl FromStr for Secret {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 3 {
            return Err(AlgoError::InvalidSecret(s.to_string()));
        }
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(AlgoError::InvalidSecret(s.to_string())),
            })
            .collect::<AlgoResult<Vec<_>>>()?;
        Ok(Self { bits })
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}
