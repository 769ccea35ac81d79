//! Amortize a batch of loans from CSV
//!
//! Input columns: principal,annual_rate_percent,term_years
//! Outputs one summary row per loan.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mortgage_calculator::loan::load_loans;
use mortgage_calculator::report::write_summaries_csv;
use mortgage_calculator::{LoanSummary, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Amortize every loan in a CSV file", long_about = None)]
struct Cli {
    /// Input loans CSV file
    #[arg(default_value = "data/sample_loans.csv")]
    input: PathBuf,

    /// Output summary CSV file
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,

    /// Run on a single thread instead of the rayon pool
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    println!("Loading loans from {}...", cli.input.display());

    let loans = load_loans(&cli.input)
        .with_context(|| format!("failed to load loans from {}", cli.input.display()))?;
    println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    let run_start = Instant::now();
    let results = if cli.sequential {
        ScenarioRunner::run_batch(&loans)
    } else {
        ScenarioRunner::run_batch_parallel(&loans)
    };
    info!("amortized {} loans in {:?}", results.len(), run_start.elapsed());

    let summaries: Vec<LoanSummary> = loans
        .iter()
        .zip(&results)
        .map(|(terms, amortization)| LoanSummary::from_amortization(terms, amortization))
        .collect();

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    write_summaries_csv(file, &summaries)?;
    println!("Output written to {}", cli.output.display());

    let total_principal: f64 = summaries.iter().map(|s| s.principal).sum();
    let total_interest: f64 = summaries.iter().map(|s| s.total_interest).sum();
    let total_monthly: f64 = summaries.iter().map(|s| s.monthly_payment).sum();

    println!("\nBatch Summary:");
    println!("  Loans: {}", summaries.len());
    println!("  Total Principal: ${:.2}", total_principal);
    println!("  Total Interest: ${:.2}", total_interest);
    println!("  Combined Monthly Payment: ${:.2}", total_monthly);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
