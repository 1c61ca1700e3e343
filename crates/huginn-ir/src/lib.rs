//! Huginn Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing the small
//! quantum circuits used throughout the Huginn demo suite.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered, validated list of [`Instruction`]s over a
//! fixed register of qubits and classical bits. The builder API mirrors the
//! usual textbook notation:
//!
//! ```rust
//! use huginn_ir::{Circuit, QubitId};
//!
//! // Deutsch-Jozsa skeleton for f(x) = x0 XOR x1 (phase oracle form)
//! let mut circuit = Circuit::with_size("dj_xor", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.h(QubitId(1)).unwrap();
//! circuit.cz(QubitId(0), QubitId(1)).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.h(QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 4);
//! ```
//!
//! # Core components
//!
//! - [`QubitId`], [`ClbitId`]: register addressing
//! - [`StandardGate`]: the fixed (non-parameterized) gate set
//! - [`Instruction`]: gates, measurements, and labeled barriers
//! - [`Circuit`]: the builder, with depth and gate-count introspection used
//!   by the resource-comparison charts

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
