mod dom;
mod error;
mod fetch;
mod pipeline;
mod sink;

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

const DEFAULT_URL: &str = "https://www.ciachef.edu/cia-alumni-bios/";

#[derive(Parser)]
#[command(name = "alumni_scrape", about = "Heuristic alumni-bio page scraper")]
struct Cli {
    /// Page to scrape
    #[arg(default_value = DEFAULT_URL)]
    url: String,

    /// Output file
    #[arg(short, long, default_value = "alumni.csv")]
    output: PathBuf,

    /// Write tab-separated output instead of comma-separated
    #[arg(long)]
    tsv: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    info!("Fetching {}", cli.url);
    let body = fetch::get(&cli.url)?;
    let doc = pipeline::parse(&body)?;
    let origin = fetch::origin(&cli.url);

    let report = pipeline::run(&doc, &origin);
    let diag = &report.diagnostics;

    for hit in &diag.tier_hits {
        info!(tier = hit.tier.label(), found = hit.found, "detection tier");
    }
    for err in &diag.errors {
        warn!("Error processing candidate {}: {}", err.index, err.message);
    }
    info!(
        "{} candidates, {} records, {} dropped, {} errored",
        diag.candidates(),
        report.records.len(),
        diag.dropped,
        diag.errors.len()
    );

    if report.records.is_empty() {
        println!("No alumni profiles found on the page.");
    }

    // Data quality check: columns with missing values
    for (column, missing) in sink::missing_by_column(&report.records) {
        if missing > 0 {
            warn!(
                "Column '{}' has {} missing values ({:.1}%)",
                column,
                missing,
                100.0 * missing as f64 / report.records.len() as f64
            );
        }
    }

    let sep = if cli.tsv { '\t' } else { ',' };
    sink::write_delimited(&cli.output, &report.records, sep)?;
    println!(
        "Scraping complete. Saved {} profiles to {}",
        report.records.len(),
        cli.output.display()
    );

    Ok(())
}
