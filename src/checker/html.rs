// src/checker/html.rs
// =============================================================================
// This module pulls everything the crawler needs out of one HTML page:
// - the page title (shown next to every broken image found on it)
// - every <a href> target, resolved to an absolute URL
// - every <img src> source, resolved to an absolute URL
//
// We use the `scraper` crate for parsing (html5ever underneath, so malformed
// markup is repaired the way a browser would, never rejected) and the `url`
// crate for resolving relative links against the page URL.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

/// Title used when a page has no (or an empty) <title>.
pub const UNTITLED: &str = "No Title";

/// What one page contributes to the crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    /// Absolute hyperlink targets, in document order.
    pub links: Vec<Url>,
    /// Absolute image sources, in document order; inline data: images excluded.
    pub images: Vec<Url>,
}

// Parses an HTML document and extracts its title, links and images
//
// Parameters:
//   html: the page body
//   base: the URL the page was fetched from (for resolving relative links)
//
// Returns: PageContent with the title and every link/image as an absolute URL
pub fn extract_page(html: &str, base: &Url) -> PageContent {
    // Parse the HTML into a document; this never fails, broken markup is
    // repaired the same way a browser would repair it
    let document = Html::parse_document(html);

    // These selectors are constants and known to be valid
    let title_selector = Selector::parse("title").expect("valid selector");
    let link_selector = Selector::parse("a[href]").expect("valid selector");
    let image_selector = Selector::parse("img[src]").expect("valid selector");

    // Only the first <title> counts; whitespace around it is noise from
    // the page's indentation
    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    // <a> elements without an href (named anchors) never match "a[href]"
    let links = document
        .select(&link_selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| resolve_url(base, href))
        .collect();

    // Inline data: images carry their bytes with them; there is nothing
    // on the network to check. The scheme is compared after parsing, which
    // lowercases it, so "DATA:" is caught as well.
    let images = document
        .select(&image_selector)
        .filter_map(|el| el.value().attr("src"))
        .filter_map(|src| resolve_url(base, src))
        .filter(|url| url.scheme() != "data")
        .collect();

    PageContent {
        title,
        links,
        images,
    }
}

// Resolves a possibly-relative reference to an absolute URL
//
// Examples (base = "https://example.com/docs/page"):
//   "/img/a.png"            -> "https://example.com/img/a.png"
//   "../other"              -> "https://example.com/other"
//   "//cdn.example.com/x"   -> "https://cdn.example.com/x"
//   "#section"              -> "https://example.com/docs/page#section"
//   ""                      -> None
//
// The result is exactly what URL resolution gives, fragment included, so the
// report shows the reference as it was written on the page.
pub fn resolve_url(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    // join handles absolute, relative and protocol-relative references alike
    // If the reference can't be parsed at all, skip it rather than fail the page
    base.join(reference).ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does Url::join do?
//    - It resolves a reference against a base URL, exactly like a browser
//    - "../up" climbs one directory, "/root" restarts at the host,
//      "//cdn.example.com/x" keeps only the scheme of the base
//
// 2. Why filter_map twice in a row?
//    - The first step drops elements without the attribute (None)
//    - The second drops values that do not resolve to a URL (None)
//    - What is left is only the Some(...) values, unwrapped
//
// 3. Why return Url instead of String?
//    - The crawler compares, hashes and prints these; Url already knows
//      its scheme, host and fragment, so nobody has to re-parse a String
//
// 4. Why expect() on Selector::parse?
//    - The selectors are constants; if one were invalid it would be a
//      programmer error caught by the very first test run
// -----------------------------------------------------------------------------
