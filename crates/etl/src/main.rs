// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::Context;
use config::{Args, EtlConfig, load_env_file};
use stellar_etl::export::export_ledgers;
use stellar_etl::ledger::Ledger;
use stellar_etl::logging::{self, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let env_loaded = load_env_file(&args.env_file)?;
    let config = EtlConfig::from_env()?;
    let _guard = logging::init_with_config(LoggingConfig::from(&config.log))?;

    tracing::info!("Log level: {}", config.log.level);
    if env_loaded {
        tracing::info!("Loaded environment from {}", args.env_file);
    }

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let ledgers: Vec<Ledger> = serde_json::from_reader(BufReader::new(input))
        .with_context(|| format!("Failed to parse ledgers from {}", args.input.display()))?;
    tracing::info!("Read {} ledgers from {}", ledgers.len(), args.input.display());

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let summary = export_ledgers(&ledgers, &config.export, BufWriter::new(writer))
        .context("Export failed")?;

    tracing::info!(
        ledgers = summary.ledgers,
        transactions = summary.transactions,
        failed_transactions_skipped = summary.failed_transactions_skipped,
        operations_exported = summary.operations_exported,
        operations_skipped = summary.operations_skipped,
        "Export complete"
    );

    Ok(())
}
