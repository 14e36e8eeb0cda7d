// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and validate them
// 2. Crawl everything under the root URL, reporting 404s as they are found
// 3. Write the report file (only if something is broken) and a summary
// 4. Exit with proper code (0 = success, 1 = broken links with
//    --fail-on-broken, 2 = error)
// =============================================================================

mod checker; // src/checker/ - fetching, parsing and checking single URLs
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated settings
mod crawl; // src/crawl/ - frontier and crawl loop
mod logging; // src/logging.rs - tracing setup
mod report; // src/report/ - ledger, console blocks, report file

use anyhow::Result;
use clap::Parser;

use checker::HttpTransport;
use cli::Cli;
use config::CrawlConfig;
use crawl::Crawler;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = crawl finished
//   Ok(1) = broken references found and --fail-on-broken was given
//   Err   = unrecoverable startup or report-writing error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = CrawlConfig::from_cli(&cli)?;
    let transport = HttpTransport::new(&config)?;

    let outcome = Crawler::new(transport, config.root_url.clone(), config.concurrency)
        .run()
        .await;
    let ledger = &outcome.ledger;

    if ledger.is_empty() {
        println!("\n✅ Crawl finished. No broken links found!");
    } else {
        println!(
            "\n✅ Crawl finished. Found {} broken links. Writing to {}...",
            ledger.len(),
            config.output_path.display()
        );
        if report::write_report(ledger, &config.output_path, config.format)? {
            println!("📁 Report written successfully.");
        }
    }

    println!();
    report::print_summary(
        ledger,
        outcome.stats.pages_visited,
        outcome.stats.images_checked,
    );
    if outcome.stats.fetch_errors > 0 {
        println!(
            "   ⚠️  Pages not explored (non-404 errors): {}",
            outcome.stats.fetch_errors
        );
    }

    if cli.fail_on_broken && !ledger.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}
