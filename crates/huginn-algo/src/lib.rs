//! Quantum query algorithms: Deutsch-Jozsa and Bernstein-Vazirani.
//!
//! This crate turns Boolean functions into oracle circuits and measurement
//! histograms back into answers:
//!
//! - [`TruthTable`] describes a function over 1 to 3 input bits, and
//!   [`oracle`] synthesizes phase or ancilla-variant oracle gates from its
//!   algebraic normal form.
//! - [`deutsch_jozsa`] / [`deutsch_jozsa_with_ancilla`] and
//!   [`bernstein_vazirani`] / [`bernstein_vazirani_with_ancilla`] build the
//!   full circuits.
//! - [`classify`] and [`recover_secret`] read the verdict out of the
//!   sampled [`Counts`](huginn_hal::Counts).
//! - [`catalog`] names the demo oracle cases and the classical-vs-quantum
//!   query costs.
//!
//! # Example
//!
//! ```
//! use huginn_algo::{bernstein_vazirani, Secret};
//!
//! let secret: Secret = "101".parse()?;
//! let circuit = bernstein_vazirani(&secret)?;
//! assert_eq!(circuit.num_qubits(), 3);
//! # Ok::<(), huginn_algo::AlgoError>(())
//! ```

pub mod analysis;
pub mod bernstein_vazirani;
pub mod catalog;
pub mod deutsch_jozsa;
pub mod error;
pub mod oracle;
pub mod secret;
pub mod truth_table;

pub use analysis::{
    classify, project_work_bits, recover_secret, DeutschJozsaVerdict, SecretRecovery,
    DEFAULT_THRESHOLD,
};
pub use bernstein_vazirani::{bernstein_vazirani, bernstein_vazirani_with_ancilla};
pub use catalog::{
    bernstein_vazirani_queries, bernstein_vazirani_secrets, deutsch_jozsa_cases,
    deutsch_jozsa_queries, OracleCase, QueryCost,
};
pub use deutsch_jozsa::{deutsch_jozsa, deutsch_jozsa_with_ancilla};
pub use error::{AlgoError, AlgoResult};
pub use oracle::{apply_bit_oracle, apply_phase_oracle, Anf};
pub use secret::Secret;
pub use truth_table::{FunctionClass, TruthTable};
