// src/crawl/mod.rs
// =============================================================================
// This module handles walking the site.
//
// Features:
// - Breadth-first crawling starting from the root URL
// - Stays under the root URL prefix (never wanders off to other sites)
// - Each page is fetched at most once, however many pages link to it
// - Every image on a page is checked before the next page is fetched
//
// Rust concepts:
// - Generics: The crawler works with any `Transport`, real or fake
// - Collections: HashSet for dedup, VecDeque for the queue
// =============================================================================

mod frontier;
mod orchestrator;
mod scope;

pub use orchestrator::{CrawlOutcome, CrawlStats, Crawler};
