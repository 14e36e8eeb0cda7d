// src/config.rs
// =============================================================================
// Turns raw command-line arguments into a validated crawl configuration.
//
// Everything that can be wrong with the user's input is caught here, before
// a single request is made: a bad root URL or an output path that can never
// be written is an unrecoverable startup error (exit code 2).
// =============================================================================

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::cli::{Cli, ReportFormat};

/// Validated settings for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URL and scope prefix.
    pub root_url: Url,
    pub output_path: PathBuf,
    pub format: ReportFormat,
    pub timeout: Duration,
    pub max_redirects: usize,
    pub concurrency: usize,
    pub user_agent: String,
}

impl CrawlConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root_url = parse_root_url(&cli.root_url)?;
        check_output_path(&cli.output)?;

        if cli.timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }

        Ok(Self {
            root_url,
            output_path: cli.output.clone(),
            format: cli.format,
            timeout: Duration::from_secs(cli.timeout),
            max_redirects: cli.max_redirects,
            // buffer_unordered(0) would never make progress
            concurrency: cli.concurrency.max(1),
            user_agent: cli.user_agent.clone(),
        })
    }
}

// The root must be absolute and fetchable, otherwise nothing can be crawled
fn parse_root_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid root URL '{}'", raw))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "Root URL must use http or https, got '{}': {}",
            other,
            raw
        )),
    }
}

// The report is only written at the very end of the crawl, so a path that can
// never be written has to be rejected up front instead of after hours of work.
// The report file itself is not created here: an empty ledger must leave the
// filesystem untouched.
fn check_output_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        bail!("Output path '{}' is a directory", path.display());
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let meta = std::fs::metadata(parent).with_context(|| {
        format!(
            "Output directory '{}' does not exist",
            parent.display()
        )
    })?;

    if !meta.is_dir() {
        bail!("Output directory '{}' is not a directory", parent.display());
    }

    // Permission bits alone don't say whether *we* may write there (owner,
    // ACLs, read-only mounts), so actually create a file. The temp file is
    // removed when it goes out of scope.
    tempfile::NamedTempFile::new_in(parent).with_context(|| {
        format!("Output directory '{}' is not writable", parent.display())
    })?;

    Ok(())
}
