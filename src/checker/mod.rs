// src/checker/mod.rs
// =============================================================================
// This module contains everything that touches a single URL.
//
// Submodules:
// - http: The network seam (Transport trait, reqwest implementation, errors)
// - html: Extracts the title, links and images from an HTML page
// - page: Fetches a page and runs the extraction on it
// - verify: HEAD-checks images, one page's worth at a time
//
// The crawl module decides WHICH urls to look at; this module decides
// WHAT each of them looks like.
// =============================================================================

mod html;
mod http;
mod page;
mod verify;

pub use http::{FetchError, HttpTransport, Transport};
pub use page::fetch_and_extract;
pub use verify::check_all;
