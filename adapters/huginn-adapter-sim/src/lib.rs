//! Local statevector simulator backend for Huginn.
//!
//! This adapter implements the `huginn-hal` [`Backend`](huginn_hal::Backend)
//! trait with an exact statevector simulation. It is the only backend the
//! demo suite ships: every circuit here fits in a handful of qubits, so a
//! dense statevector is both exact and instant.
//!
//! Shots are sampled independently from the final state; the returned
//! histogram keys follow the workspace bitstring convention (clbit 0 is the
//! leftmost character).

pub mod simulator;
pub mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
