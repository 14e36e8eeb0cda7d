// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: give it the root URL of the part of the site you
// want swept, and it crawls every page under that prefix, checks every image
// it finds, and writes the broken ones to a report file.
// =============================================================================

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A desktop Chrome identification string.
/// Some servers reject or vary their responses for unidentified clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Parser, Debug)]
#[command(
    name = "link-sweep",
    version,
    about = "Crawl a site prefix and report broken pages and images",
    long_about = "link-sweep starts at ROOT_URL, follows every link that stays under that URL prefix, \
                  and checks every page and embedded image it finds. Anything answering 404 Not Found \
                  is reported together with the page that referenced it."
)]
pub struct Cli {
    /// Root URL of the crawl (e.g., https://example.com/about/)
    ///
    /// Only links that start with this exact string are followed,
    /// so a trailing slash is recommended.
    pub root_url: String,

    /// Where to write the report of broken references
    #[arg(short, long, value_name = "FILE", default_value = "./all_broken_links.csv")]
    pub output: PathBuf,

    /// Report file format
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Per-request timeout in seconds (applies to every GET and HEAD)
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Maximum number of redirects followed per request
    #[arg(long, default_value_t = 5)]
    pub max_redirects: usize,

    /// Maximum number of image checks in flight for one page
    #[arg(long, default_value_t = 50)]
    pub concurrency: usize,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Exit with code 1 when at least one broken reference was found
    #[arg(long)]
    pub fail_on_broken: bool,

    /// Show debug-level diagnostics (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format of the report file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - The tool does exactly one thing, so a flat struct is enough
//    - #[derive(Parser)] on a plain struct gives positional args + flags
//
// 2. What is ValueEnum?
//    - It lets clap parse "--format json" straight into ReportFormat::Json
//    - Invalid values are rejected with a helpful message listing the choices
//
// 3. Why PathBuf instead of String for the output?
//    - PathBuf is the owned path type; it handles OS-specific path rules
// -----------------------------------------------------------------------------
