//! Regenerate expected operation records from the ledger fixtures.
//!
//! Usage: `update_fixtures [case ...]`. With no arguments every case under
//! `tests/fixtures/ledgers` is rewritten.

use anyhow::{Context, Result};
use config::ExportConfig;
use integration_tests::{FixtureLoader, run_export};
use std::env;
use stellar_etl::ledger::Ledger;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let loader = FixtureLoader::from_manifest_dir();
    let requested: Vec<String> = env::args().skip(1).collect();
    let cases = if requested.is_empty() {
        loader.case_names()?
    } else {
        requested
    };

    println!("{}", "=".repeat(60));
    println!("Fixture Updater");
    println!("{}", "=".repeat(60));
    println!();

    // Expected fixtures always cover failed transactions and fail loudly
    let config = ExportConfig {
        strict: true,
        include_failed: true,
    };

    for name in &cases {
        let ledgers: Vec<Ledger> = loader.load(loader.ledgers_path(name))?;
        let run = run_export(&ledgers, &config)
            .with_context(|| format!("Failed to export fixture case {name}"))?;

        let path = loader.expected_path(name);
        let mut json = serde_json::to_string_pretty(&run.as_array())?;
        json.push('\n');
        std::fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;

        println!(
            "✓ {}: {} records ({} ledgers, {} transactions)",
            name,
            run.records.len(),
            run.summary.ledgers,
            run.summary.transactions
        );
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("✓ Fixture update completed");
    println!("{}", "=".repeat(60));

    Ok(())
}
