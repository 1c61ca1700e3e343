//! Deutsch-Jozsa Algorithm Demo
//!
//! Runs every oracle in the catalog at the chosen size, samples each
//! circuit on the statevector backend, and reports constant vs balanced.

use anyhow::Result;
use clap::Parser;

use huginn_adapter_sim::SimulatorBackend;
use huginn_algo::{classify, deutsch_jozsa, deutsch_jozsa_cases, deutsch_jozsa_with_ancilla};
use huginn_demos::report;
use huginn_demos::{print_header, print_result, print_section, print_success, sample};

#[derive(Parser, Debug)]
#[command(name = "demo-deutsch-jozsa")]
#[command(about = "Demonstrate the Deutsch-Jozsa algorithm")]
struct Args {
    /// Number of work qubits (2 or 3)
    #[arg(short = 'n', long, default_value = "2")]
    qubits: u8,

    /// Use the ancilla-qubit oracle variant
    #[arg(long)]
    ancilla: bool,

    /// Number of shots per circuit
    #[arg(short, long, default_value = "1000")]
    shots: u32,

    /// Probability threshold for calling a function constant
    #[arg(long, default_value = "0.9")]
    threshold: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let variant = if args.ancilla {
        "with ancilla"
    } else {
        "phase oracle"
    };
    print_header(&format!(
        "Deutsch-Jozsa Demo ({} qubits, {variant})",
        args.qubits
    ));

    let backend = SimulatorBackend::new();

    for case in deutsch_jozsa_cases(args.qubits)? {
        print_section(&format!(
            "{} [{}]",
            case.formula,
            report::class_tag(case.class)
        ));

        let circuit = if args.ancilla {
            deutsch_jozsa_with_ancilla(&case.truth_table)?
        } else {
            deutsch_jozsa(&case.truth_table)?
        };
        print_result("Qubits", circuit.num_qubits());
        print_result("Gates", circuit.size());
        print_result("Depth", circuit.depth());

        let result = sample(&backend, &circuit, args.shots).await?;
        print!("{}", report::counts_table(&result.counts));

        let verdict = classify(&result.counts, args.qubits, args.threshold)?;
        report::print_verdict(&case, &verdict);
    }

    print_section("Query complexity");
    println!(
        "{}",
        report::query_comparison(
            "Deutsch-Jozsa",
            huginn_algo::deutsch_jozsa_queries(args.qubits)
        )
    );

    println!();
    print_success("Deutsch-Jozsa demo complete!");
    Ok(())
}
