//! Smoke-test driver: run one aggregation and print the summary.
//!
//! Usage: `jobhive [keyword] [location]`, defaulting to a broad software
//! engineering search. RUST_LOG controls log verbosity (default info).

use anyhow::Result;
use jobhive::JobScraper;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let keyword = args.next().unwrap_or_else(|| "software engineer".to_string());
    let location = args.next().unwrap_or_default();

    let scraper = JobScraper::new()?;
    let outcome = scraper.scrape_all(&keyword, &location).await;

    println!("total postings: {}", outcome.postings.len());
    for (source, count) in &outcome.source_counts {
        println!("- {source}: {count}");
    }

    if let Some(sample) = outcome.postings.first() {
        println!("sample posting:\n{}", serde_json::to_string_pretty(sample)?);
    }

    Ok(())
}
