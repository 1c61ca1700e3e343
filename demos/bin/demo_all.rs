//! Full Tour Demo
//!
//! Runs both algorithms at both sizes in both oracle variants and prints a
//! compact pass/fail summary, with a progress bar across the whole sweep.

use anyhow::Result;
use clap::Parser;
use console::style;

use huginn_adapter_sim::SimulatorBackend;
use huginn_algo::{
    bernstein_vazirani, bernstein_vazirani_secrets, bernstein_vazirani_with_ancilla, classify,
    deutsch_jozsa, deutsch_jozsa_cases, deutsch_jozsa_with_ancilla, recover_secret,
    DEFAULT_THRESHOLD,
};
use huginn_demos::{create_progress_bar, print_header, print_section, print_success, sample};

#[derive(Parser, Debug)]
#[command(name = "demo-all")]
#[command(about = "Run the full Deutsch-Jozsa and Bernstein-Vazirani tour")]
struct Args {
    /// Number of shots per circuit
    #[arg(short, long, default_value = "1000")]
    shots: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("Huginn Full Tour");

    let backend = SimulatorBackend::new();
    let mut failures = 0usize;

    for n in [2u8, 3] {
        for ancilla in [false, true] {
            let variant = if ancilla { "ancilla" } else { "phase" };

            print_section(&format!("Deutsch-Jozsa, {n} qubits, {variant} oracle"));
            let cases = deutsch_jozsa_cases(n)?;
            let pb = create_progress_bar(cases.len() as u64, "sampling oracles");
            for case in &cases {
                let circuit = if ancilla {
                    deutsch_jozsa_with_ancilla(&case.truth_table)?
                } else {
                    deutsch_jozsa(&case.truth_table)?
                };
                let result = sample(&backend, &circuit, args.shots).await?;
                let verdict = classify(&result.counts, n, DEFAULT_THRESHOLD)?;
                pb.inc(1);

                let ok = verdict.class == case.class;
                if !ok {
                    failures += 1;
                }
                let mark = if ok {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                pb.println(format!(
                    "  {mark} {:<22} measured {}",
                    case.formula, verdict.class
                ));
            }
            pb.finish_and_clear();

            print_section(&format!("Bernstein-Vazirani, {n} qubits, {variant} oracle"));
            let secrets = bernstein_vazirani_secrets(n)?;
            let pb = create_progress_bar(secrets.len() as u64, "sampling secrets");
            for secret in &secrets {
                let circuit = if ancilla {
                    bernstein_vazirani_with_ancilla(secret)?
                } else {
                    bernstein_vazirani(secret)?
                };
                let result = sample(&backend, &circuit, args.shots).await?;
                let recovery = recover_secret(&result.counts, n)?;
                pb.inc(1);

                let ok = &recovery.secret == secret && !recovery.tied;
                if !ok {
                    failures += 1;
                }
                let mark = if ok {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                pb.println(format!(
                    "  {mark} s = {secret} recovered {} (p = {:.3})",
                    recovery.secret, recovery.probability
                ));
            }
            pb.finish_and_clear();
        }
    }

    println!();
    if failures == 0 {
        print_success("Full tour complete, every case answered correctly!");
    } else {
        println!(
            "{} {failures} case(s) answered incorrectly",
            style("✗").red().bold()
        );
        std::process::exit(1);
    }
    Ok(())
}
