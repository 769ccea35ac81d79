//! Mortgage Calculator CLI
//!
//! Command-line interface for computing a fixed-rate amortization schedule

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mortgage_calculator::loan::{
    DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_PRINCIPAL, DEFAULT_TERM_YEARS,
};
use mortgage_calculator::report::write_schedule_csv;
use mortgage_calculator::{LoanReport, LoanRequest, LoanTerms};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Loan amount
    #[arg(long, default_value_t = DEFAULT_PRINCIPAL)]
    principal: f64,

    /// Annual interest rate in percent (6.5 = 6.5%)
    #[arg(long, default_value_t = DEFAULT_ANNUAL_RATE_PERCENT)]
    rate: f64,

    /// Loan term in whole years
    #[arg(long, default_value_t = DEFAULT_TERM_YEARS)]
    years: u32,

    /// JSON loan request file; replaces the three flags above
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the full monthly schedule to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let request = match &cli.input {
        Some(path) => LoanRequest::from_path(path)
            .with_context(|| format!("failed to read loan request {}", path.display()))?,
        None => LoanRequest {
            principal: cli.principal,
            annual_rate_percent: cli.rate,
            term_years: cli.years,
        },
    };

    let terms = LoanTerms::try_from(request).context("invalid loan terms")?;
    info!(
        "computing schedule: principal={} rate={}% term={}y",
        terms.principal, terms.annual_rate_percent, terms.term_years
    );

    let amortization = terms.amortize();
    let report = LoanReport::build(&terms, &amortization, false);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = &cli.schedule {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_schedule_csv(file, &amortization.schedule)
            .with_context(|| format!("failed writing schedule to {}", path.display()))?;
        info!("wrote {} rows to {}", amortization.schedule.len(), path.display());
        if !cli.json {
            println!("\nFull schedule written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_report(report: &LoanReport) {
    let summary = &report.summary;
    let breakdown = &report.breakdown;

    println!("Mortgage Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    println!("Loan:");
    println!("  Principal: ${:.2}", summary.principal);
    println!("  Rate: {}%", summary.annual_rate_percent);
    println!("  Term: {} years ({} payments)", summary.term_years, summary.payment_count);
    println!();

    println!("Summary:");
    println!("  Monthly Payment: ${:.2}", summary.monthly_payment);
    println!("  Total Interest: ${:.2}", summary.total_interest);
    println!("  Total Cost: ${:.2}", summary.total_paid);
    println!(
        "  Breakdown: principal {:.0}% / interest {:.0}%",
        breakdown.principal_share * 100.0,
        breakdown.interest_share * 100.0
    );

    println!("\nYearly Breakdown:");
    println!("{:>5} {:>16} {:>16} {:>18}", "Year", "Principal", "Interest", "Remaining Balance");
    println!("{}", "-".repeat(58));
    for row in &report.yearly {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>18.2}",
            row.year, row.cumulative_principal, row.cumulative_interest, row.remaining_balance
        );
    }
}
