use anyhow::{Context, Result};
use config::ExportConfig;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use stellar_etl::export::{ExportSummary, export_ledgers};
use stellar_etl::ledger::Ledger;

use crate::constants::{EXPECTED_SUBDIR, FIXTURES_DIR, LEDGERS_SUBDIR};

pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

/// One recorded case: the ledgers fed in and the records expected out
#[derive(Debug)]
pub struct FixtureCase {
    pub name: String,
    pub ledgers: Vec<Ledger>,
    pub expected: Value,
}

impl FixtureLoader {
    /// Create a new fixture loader
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    /// Loader rooted at this crate's `tests/fixtures`
    pub fn from_manifest_dir() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURES_DIR))
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        if path.as_ref().is_absolute() {
            path.as_ref().to_path_buf()
        } else {
            self.fixtures_dir.join(path.as_ref())
        }
    }

    /// Load a JSON fixture file
    pub fn load<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let full_path = self.resolve(path);

        let content = std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read fixture file: {:?}", full_path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON fixture: {:?}", full_path))
    }

    /// Check if a fixture file exists
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).exists()
    }

    /// Get the fixtures directory path
    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }

    pub fn ledgers_path(&self, name: &str) -> PathBuf {
        self.fixtures_dir
            .join(LEDGERS_SUBDIR)
            .join(format!("{name}.json"))
    }

    pub fn expected_path(&self, name: &str) -> PathBuf {
        self.fixtures_dir
            .join(EXPECTED_SUBDIR)
            .join(format!("{name}.json"))
    }

    /// Names of every case that has a ledger input, sorted
    pub fn case_names(&self) -> Result<Vec<String>> {
        let dir = self.fixtures_dir.join(LEDGERS_SUBDIR);
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .with_context(|| format!("Failed to list fixture directory: {:?}", dir))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn case(&self, name: &str) -> Result<FixtureCase> {
        Ok(FixtureCase {
            name: name.to_string(),
            ledgers: self.load(self.ledgers_path(name))?,
            expected: self.load(self.expected_path(name))?,
        })
    }
}

/// Exported records of one run, parsed back from the JSON lines
#[derive(Debug)]
pub struct ExportRun {
    pub records: Vec<Value>,
    pub summary: ExportSummary,
}

impl ExportRun {
    /// Records as a single JSON array, the shape expected fixtures are stored in
    pub fn as_array(&self) -> Value {
        Value::Array(self.records.clone())
    }
}

/// Run the exporter over `ledgers` into memory
pub fn run_export(ledgers: &[Ledger], config: &ExportConfig) -> Result<ExportRun> {
    let mut buffer = Vec::new();
    let summary = export_ledgers(ledgers, config, &mut buffer).context("Export failed")?;

    let output = String::from_utf8(buffer).context("Exporter wrote invalid UTF-8")?;
    let records = output
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<Vec<Value>, _>>()
        .context("Exporter wrote a line that is not JSON")?;

    Ok(ExportRun { records, summary })
}
