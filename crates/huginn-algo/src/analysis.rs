//! Post-processing of measurement histograms.
//!
//! The algorithms leave their answer in the work-qubit histogram: all
//! zeros means constant for Deutsch-Jozsa, and the dominant bitstring is
//! the secret for Bernstein-Vazirani. Sampling noise on a real backend
//! motivates the probability threshold; on the exact simulator the
//! probabilities are 1 or 0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use huginn_hal::Counts;

use crate::error::{AlgoError, AlgoResult};
use crate::secret::Secret;
use crate::truth_table::FunctionClass;

/// Default probability threshold for calling a function constant.
pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// The Deutsch-Jozsa decision extracted from a histogram.
///
/// `class` is always `Constant` or `Balanced`; a single query cannot
/// detect promise violations, so `Neither` never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeutschJozsaVerdict {
    /// The algorithm's answer.
    pub class: FunctionClass,
    /// Observed probability of the all-zeros work bitstring.
    pub zero_probability: f64,
}

impl DeutschJozsaVerdict {
    /// True if the function was judged constant.
    pub fn is_constant(&self) -> bool {
        self.class == FunctionClass::Constant
    }
}

/// The Bernstein-Vazirani secret recovered from a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretRecovery {
    /// The recovered secret (most frequent work bitstring).
    pub secret: Secret,
    /// Fraction of shots that produced it.
    pub probability: f64,
    /// True if another bitstring was seen equally often.
    pub tied: bool,
}

/// Fold a histogram down to its first `work_bits` characters.
///
/// Used when a result still carries bits beyond the work register; keys
/// that collide after truncation accumulate.
pub fn project_work_bits(counts: &Counts, work_bits: u8) -> Counts {
    let n = work_bits as usize;
    counts
        .iter()
        .map(|(k, v)| (k.chars().take(n).collect::<String>(), v))
        .collect()
}

/// Decide constant vs balanced from a Deutsch-Jozsa histogram.
///
/// The probability of the all-zeros outcome on the first `work_bits`
/// classical bits is compared against `threshold`.
pub fn classify(
    counts: &Counts,
    work_bits: u8,
    threshold: f64,
) -> AlgoResult<DeutschJozsaVerdict> {
    if counts.is_empty() {
        return Err(AlgoError::EmptyCounts);
    }

    let n = work_bits as usize;
    let zeros: u64 = counts
        .iter()
        .filter(|(k, _)| k.chars().take(n).all(|c| c == '0'))
        .map(|(_, v)| v)
        .sum();
    let zero_probability = zeros as f64 / counts.total() as f64;

    let class = if zero_probability > threshold {
        FunctionClass::Constant
    } else {
        FunctionClass::Balanced
    };
    debug!(zero_probability, %class, "deutsch-jozsa verdict");

    Ok(DeutschJozsaVerdict {
        class,
        zero_probability,
    })
}

/// Recover the Bernstein-Vazirani secret from a histogram.
///
/// Majority vote over the first `work_bits` characters; on the exact
/// simulator the winner takes every shot.
pub fn recover_secret(counts: &Counts, work_bits: u8) -> AlgoResult<SecretRecovery> {
    let projected = project_work_bits(counts, work_bits);
    let (winner, votes) = projected.most_frequent().ok_or(AlgoError::EmptyCounts)?;

    let tied = projected
        .iter()
        .any(|(k, v)| v == votes && k != winner);
    let probability = votes as f64 / projected.total() as f64;
    let secret: Secret = winner.parse()?;
    debug!(%secret, probability, tied, "bernstein-vazirani recovery");

    Ok(SecretRecovery {
        secret,
        probability,
        tied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(entries: &[(&str, u64)]) -> Counts {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_classify_constant() {
        let counts = counts_of(&[("00", 1000)]);
        let verdict = classify(&counts, 2, DEFAULT_THRESHOLD).unwrap();
        assert!(verdict.is_constant());
        assert_eq!(verdict.zero_probability, 1.0);
    }

    #[test]
    fn test_classify_balanced() {
        let counts = counts_of(&[("11", 1000)]);
        let verdict = classify(&counts, 2, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(verdict.class, FunctionClass::Balanced);
        assert_eq!(verdict.zero_probability, 0.0);
    }

    #[test]
    fn test_classify_near_threshold() {
        // 89% zeros stays balanced, 91% flips to constant.
        let counts = counts_of(&[("000", 890), ("101", 110)]);
        assert!(!classify(&counts, 3, 0.9).unwrap().is_constant());

        let counts = counts_of(&[("000", 910), ("101", 90)]);
        assert!(classify(&counts, 3, 0.9).unwrap().is_constant());
    }

    #[test]
    fn test_classify_empty() {
        let err = classify(&Counts::new(), 2, DEFAULT_THRESHOLD).unwrap_err();
        assert!(matches!(err, AlgoError::EmptyCounts));
    }

    #[test]
    fn test_recover_secret() {
        let counts = counts_of(&[("101", 990), ("001", 10)]);
        let recovery = recover_secret(&counts, 3).unwrap();
        assert_eq!(recovery.secret.to_string(), "101");
        assert!((recovery.probability - 0.99).abs() < 1e-12);
        assert!(!recovery.tied);
    }

    #[test]
    fn test_recover_secret_tie_flagged() {
        let counts = counts_of(&[("01", 500), ("10", 500)]);
        let recovery = recover_secret(&counts, 2).unwrap();
        assert!(recovery.tied);
        // Deterministic tie-break toward the smaller bitstring.
        assert_eq!(recovery.secret.to_string(), "01");
    }

    #[test]
    fn test_project_work_bits_accumulates() {
        let counts = counts_of(&[("010", 400), ("011", 600)]);
        let projected = project_work_bits(&counts, 2);
        assert_eq!(projected.get("01"), 1000);
    }
}
