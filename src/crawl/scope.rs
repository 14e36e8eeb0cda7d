// src/crawl/scope.rs
// Decides which discovered URLs the crawler is allowed to follow.

use url::Url;

// A URL is in scope when its string form starts with the root's string form.
//
// This is a literal prefix test, not a path comparison: with a root of
// "https://example.com/about" the page "https://example.com/about-us/" is in
// scope too. Use a trailing slash on the root to avoid that.
pub fn in_scope(url: &Url, root: &Url) -> bool {
    url.as_str().starts_with(root.as_str())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why compare strings instead of hosts and paths?
//    - Both URLs are already parsed and serialized the same way by the url
//      crate (lowercase scheme and host, resolved dots)
//    - A plain starts_with is then predictable: what you typed as the root
//      is exactly the prefix that is followed
//
// 2. Why does this not need a Result?
//    - Both arguments are already valid Url values; nothing can fail here
// -----------------------------------------------------------------------------
