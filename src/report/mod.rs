// src/report/mod.rs
// =============================================================================
// This module holds the crawl's results and turns them into output.
//
// Submodules:
// - ledger: BrokenReference and the append-only Ledger
// - console: Blocks and summary printed to the terminal
// - file: The CSV/JSON report file written at the end of a run
// =============================================================================

mod console;
mod file;
mod ledger;

pub use console::{announce, print_summary};
pub use file::write_report;
pub use ledger::{BrokenReference, Ledger, ReferenceKind, Referrer};
