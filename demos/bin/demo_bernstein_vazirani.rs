//! Bernstein-Vazirani Algorithm Demo
//!
//! Hides every secret of the chosen length in an inner-product oracle and
//! recovers each one with a single query.

use anyhow::Result;
use clap::Parser;

use huginn_adapter_sim::SimulatorBackend;
use huginn_algo::{
    bernstein_vazirani, bernstein_vazirani_secrets, bernstein_vazirani_with_ancilla,
    recover_secret, TruthTable,
};
use huginn_demos::report;
use huginn_demos::{print_header, print_result, print_section, print_success, sample};

#[derive(Parser, Debug)]
#[command(name = "demo-bernstein-vazirani")]
#[command(about = "Demonstrate the Bernstein-Vazirani algorithm")]
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

    /// Print the oracle truth table for each secret
    #[arg(long)]
    show_tables: bool,

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
        "Bernstein-Vazirani Demo ({} qubits, {variant})",
        args.qubits
    ));

    let backend = SimulatorBackend::new();

    for secret in bernstein_vazirani_secrets(args.qubits)? {
        print_section(&format!("hidden s = {secret}"));

        if args.show_tables {
            print!(
                "{}",
                report::truth_table_text(&TruthTable::inner_product(&secret))
            );
        }

        let circuit = if args.ancilla {
            bernstein_vazirani_with_ancilla(&secret)?
        } else {
            bernstein_vazirani(&secret)?
        };
        print_result("Qubits", circuit.num_qubits());
        print_result("Gates", circuit.size());
        print_result("Depth", circuit.depth());

        let result = sample(&backend, &circuit, args.shots).await?;
        print!("{}", report::counts_table(&result.counts));

        let recovery = recover_secret(&result.counts, args.qubits)?;
        report::print_recovery(&secret, &recovery);
    }

    print_section("Query complexity");
    println!(
        "{}",
        report::query_comparison(
            "Bernstein-Vazirani",
            huginn_algo::bernstein_vazirani_queries(args.qubits)
        )
    );

    println!();
    print_success("Bernstein-Vazirani demo complete!");
    Ok(())
}
