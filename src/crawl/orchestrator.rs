// src/crawl/orchestrator.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Start with the root URL in the frontier
// 2. Take the oldest entry, mark it visited, fetch it
// 3. 404? Record a broken page and move on. Other error? Log it, move on.
// 4. Queue every in-scope link that is not visited or already queued
// 5. HEAD every image on the page concurrently, wait for ALL of them,
//    record the 404s
// 6. Repeat until the frontier is empty
//
// Pages are fetched strictly one at a time. The only concurrency is the image
// checks of the current page, so at any moment there is at most one page
// request plus that page's image requests in flight.
//
// All mutable state (frontier, ledger, stats) lives in `Crawler` and is only
// touched by the loop itself. The image checks borrow the transport and
// return their results; nothing is shared between tasks.
// =============================================================================

use tracing::{debug, info, warn};
use url::Url;

use super::frontier::{Frontier, FrontierEntry};
use super::scope::in_scope;
use crate::checker::{check_all, fetch_and_extract, Transport};
use crate::report::{announce, BrokenReference, Ledger, Referrer};

/// Counters collected during a run, for the closing summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_visited: usize,
    pub images_checked: usize,
    /// Page fetches that failed for a reason other than 404.
    pub fetch_errors: usize,
}

/// Everything a finished crawl hands to the reporter.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub ledger: Ledger,
    pub stats: CrawlStats,
}

pub struct Crawler<T> {
    transport: T,
    root: Url,
    concurrency: usize,
    frontier: Frontier,
    ledger: Ledger,
    stats: CrawlStats,
}

impl<T: Transport> Crawler<T> {
    /// A crawler seeded with `root`, which is also the scope prefix.
    ///
    /// `concurrency` bounds the image checks in flight for one page.
    pub fn new(transport: T, root: Url, concurrency: usize) -> Self {
        Self {
            transport,
            frontier: Frontier::with_seed(root.clone()),
            root,
            concurrency,
            ledger: Ledger::new(),
            stats: CrawlStats::default(),
        }
    }

    /// Runs until the frontier is empty.
    ///
    /// No error ends the run early: every failure is either recorded in the
    /// ledger (404) or logged and skipped.
    pub async fn run(mut self) -> CrawlOutcome {
        info!("🚀 Starting crawl from: {}", self.root);

        while let Some(entry) = self.frontier.take_next() {
            // Cannot happen while try_enqueue checks both sets
            if self.frontier.is_visited(&entry.url) {
                continue;
            }
            self.frontier.mark_visited(&entry.url);

            self.visit(entry).await;
        }

        self.stats.pages_visited = self.frontier.visited_count();

        CrawlOutcome {
            ledger: self.ledger,
            stats: self.stats,
        }
    }

    // Processes one page completely, image checks included
    async fn visit(&mut self, entry: FrontierEntry) {
        info!("🔎 Crawling: {}", entry.url);

        let page = match fetch_and_extract(&self.transport, &entry.url).await {
            Ok(page) => page,
            Err(e) if e.is_not_found() => {
                // Nothing to extract from a page that does not exist
                self.record(BrokenReference::page(entry.url, entry.referrer));
                return;
            }
            Err(e) => {
                warn!("❌ Error crawling {}: {}", entry.url, e);
                self.stats.fetch_errors += 1;
                return;
            }
        };

        for link in page.links {
            if in_scope(&link, &self.root) {
                self.frontier
                    .try_enqueue(link, Referrer::Page(entry.url.clone()));
            }
        }

        debug!(
            "{} image(s) on {}, {} page(s) queued",
            page.images.len(),
            entry.url,
            self.frontier.len()
        );

        let results = check_all(&self.transport, page.images, self.concurrency).await;
        self.stats.images_checked += results.len();

        for (image, status) in results {
            if status.is_not_found() {
                self.record(BrokenReference::image(
                    image,
                    entry.url.clone(),
                    page.title.as_str(),
                ));
            }
        }
    }

    fn record(&mut self, reference: BrokenReference) {
        announce(&reference);
        self.ledger.record(reference);
    }
}
