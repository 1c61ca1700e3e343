//! Text rendering of histograms, truth tables, and verdicts.

use std::fmt::Write as _;

use console::style;

use huginn_algo::{
    DeutschJozsaVerdict, FunctionClass, OracleCase, QueryCost, Secret, SecretRecovery, TruthTable,
};
use huginn_hal::Counts;

/// Render a histogram as a sorted table with percentage bars.
pub fn counts_table(counts: &Counts) -> String {
    let total = counts.total().max(1);
    let mut out = String::new();
    for (bitstring, count) in counts.sorted() {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((pct / 2.5).round() as usize);
        let _ = writeln!(out, "  |{bitstring}⟩  {count:>5}  {pct:>5.1}%  {bar}");
    }
    out
}

/// Render the truth table of a function, one row per input.
pub fn truth_table_text(table: &TruthTable) -> String {
    let n = table.inputs();
    let mut out = String::new();
    for x in 0..table.size() {
        let input: String = (0..n).map(|i| if x >> i & 1 == 1 { '1' } else { '0' }).collect();
        let _ = writeln!(out, "  f({input}) = {}", u8::from(table.eval(x)));
    }
    out
}

/// Print a Deutsch-Jozsa verdict against the case's true class.
pub fn print_verdict(case: &OracleCase, verdict: &DeutschJozsaVerdict) {
    let correct = verdict.class == case.class;
    let mark = if correct {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };
    println!(
        "  {mark} measured {} (P(0…0) = {:.3}), function is {}",
        style(verdict.class).bold(),
        verdict.zero_probability,
        case.class,
    );
}

/// Print a Bernstein-Vazirani recovery against the true secret.
pub fn print_recovery(secret: &Secret, recovery: &SecretRecovery) {
    let correct = &recovery.secret == secret && !recovery.tied;
    let mark = if correct {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };
    println!(
        "  {mark} recovered s = {} with probability {:.3} (hidden s = {secret})",
        style(&recovery.secret).bold(),
        recovery.probability,
    );
}

/// Render the classical-vs-quantum query comparison.
pub fn query_comparison(algorithm: &str, cost: QueryCost) -> String {
    format!(
        "  {algorithm}: {} classical queries (worst case) vs {} quantum",
        cost.classical, cost.quantum
    )
}

/// Short class annotation for section titles.
pub fn class_tag(class: FunctionClass) -> &'static str {
    match class {
        FunctionClass::Constant => "constant",
        FunctionClass::Balanced => "balanced",
        FunctionClass::Neither => "neither",
    }
}
