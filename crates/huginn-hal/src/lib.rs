//! Huginn Hardware Abstraction Layer
//!
//! This crate provides a unified interface for executing Huginn circuits on
//! quantum backends. The demo suite only ships one backend, the local
//! statevector sampler in `huginn-adapter-sim`, but everything downstream
//! of circuit construction goes through the [`Backend`] trait, so the
//! algorithm and analysis code never knows which backend produced a
//! histogram.
//!
//! # Example: Running a circuit
//!
//! ```ignore
//! use huginn_hal::Backend;
//! use huginn_adapter_sim::SimulatorBackend;
//! use huginn_ir::{Circuit, QubitId};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut circuit = Circuit::with_size("bell", 2, 2);
//!     circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
//!     circuit.measure_all()?;
//!
//!     let backend = SimulatorBackend::new();
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("most frequent: {bitstring} ({count} times)");
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendConfig, ValidationResult};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
