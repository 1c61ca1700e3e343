//! Huginn Demo Suite
//!
//! Pedagogical demonstrations of two textbook quantum query algorithms at
//! 2 and 3 work qubits, each in a phase-oracle and an ancilla variant:
//!
//! - **Deutsch-Jozsa**: decide constant vs balanced with one oracle query
//! - **Bernstein-Vazirani**: recover a hidden bitstring with one query
//!
//! The binaries build circuits with `huginn-algo`, sample them on the
//! local statevector backend, and print verdicts; `demo-diagrams` writes
//! SVG schematics and resource-comparison charts instead of running
//! anything.

pub mod report;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use huginn_hal::{Backend, ExecutionResult, HalResult};
use huginn_ir::Circuit;

/// Submit a circuit and wait for its histogram.
pub async fn sample(
    backend: &impl Backend,
    circuit: &Circuit,
    shots: u32,
) -> HalResult<ExecutionResult> {
    let job_id = backend.submit(circuit, shots).await?;
    backend.wait(&job_id).await
}

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
