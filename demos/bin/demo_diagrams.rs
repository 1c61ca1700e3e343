//! Diagram Generation Demo
//!
//! Writes static SVG output for both algorithms at both sizes: circuit
//! schematics for the phase and ancilla variants, and grouped bar charts
//! comparing their resource counts.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use huginn_algo::{
    bernstein_vazirani, bernstein_vazirani_with_ancilla, deutsch_jozsa,
    deutsch_jozsa_with_ancilla, Secret, TruthTable,
};
use huginn_diagram::{write_comparison_chart, ChartSpec, SvgRenderer};
use huginn_demos::{print_header, print_result, print_success};

#[derive(Parser, Debug)]
#[command(name = "demo-diagrams")]
#[command(about = "Generate SVG circuit diagrams and comparison charts")]
struct Args {
    /// Output directory for the SVG files
    #[arg(short, long, default_value = "diagrams")]
    out_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("Huginn Diagram Generation");
    std::fs::create_dir_all(&args.out_dir)?;
    let mut written = 0usize;

    for n in [2u8, 3] {
        // Representative oracles: parity for DJ, the all-ones secret for BV.
        let table = TruthTable::parity(n, (1 << n) - 1)?;
        let secret: Secret = "1".repeat(n as usize).parse()?;

        let mut dj_phase = deutsch_jozsa(&table)?;
        dj_phase.set_name(format!("Deutsch-Jozsa {n} qubits (phase oracle)"));
        let mut dj_aux = deutsch_jozsa_with_ancilla(&table)?;
        dj_aux.set_name(format!("Deutsch-Jozsa {n} qubits (with ancilla)"));

        let mut bv_phase = bernstein_vazirani(&secret)?;
        bv_phase.set_name(format!("Bernstein-Vazirani s={secret} (phase oracle)"));
        let mut bv_aux = bernstein_vazirani_with_ancilla(&secret)?;
        bv_aux.set_name(format!("Bernstein-Vazirani s={secret} (with ancilla)"));

        for (stem, circuit) in [
            (format!("dj_{n}q_phase"), &dj_phase),
            (format!("dj_{n}q_ancilla"), &dj_aux),
            (format!("bv_{n}q_phase"), &bv_phase),
            (format!("bv_{n}q_ancilla"), &bv_aux),
        ] {
            let path = args.out_dir.join(format!("{stem}.svg"));
            SvgRenderer::new(circuit)?.write_svg(&path)?;
            print_result("Wrote", path.display());
            written += 1;
        }

        let dj_spec = ChartSpec::compare(
            format!("Deutsch-Jozsa {n} qubits: resource comparison"),
            ("phase oracle", &dj_phase),
            ("with ancilla", &dj_aux),
        );
        let dj_chart = args.out_dir.join(format!("dj_{n}q_comparison.svg"));
        write_comparison_chart(&dj_spec, &dj_chart)?;
        print_result("Wrote", dj_chart.display());

        let bv_spec = ChartSpec::compare(
            format!("Bernstein-Vazirani {n} qubits: resource comparison"),
            ("phase oracle", &bv_phase),
            ("with ancilla", &bv_aux),
        );
        let bv_chart = args.out_dir.join(format!("bv_{n}q_comparison.svg"));
        write_comparison_chart(&bv_spec, &bv_chart)?;
        print_result("Wrote", bv_chart.display());
        written += 2;
    }

    println!();
    print_success(&format!("Generated {written} SVG files"));
    Ok(())
}
