// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixture-driven checks of the full export path: decoded ledgers in,
//! JSON lines out, compared against recorded expectations.

pub mod fixtures;
pub mod utils;

pub use fixtures::{ExportRun, FixtureCase, FixtureLoader, run_export};
pub use utils::*;

/// Test configuration constants
pub mod constants {
    /// Fixtures directory relative to this crate's manifest
    pub const FIXTURES_DIR: &str = "tests/fixtures";

    /// Ledger inputs, one JSON array of ledgers per case
    pub const LEDGERS_SUBDIR: &str = "ledgers";

    /// Expected operation records, one JSON array per case
    pub const EXPECTED_SUBDIR: &str = "expected";
}
