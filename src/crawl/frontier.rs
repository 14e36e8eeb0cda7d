// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: which pages are waiting, and which have been visited.
//
// Three pieces of state, all owned by one crawl run:
// - queue: pages waiting to be fetched, first in first out
// - pending: the same URLs as `queue`, as a set for O(1) membership checks
// - visited: every URL the crawler has started processing; it only grows
//
// A URL is enqueued only if it is in neither `pending` nor `visited`, so it
// appears at most once across the two at any moment.
//
// Both sets are keyed on the URL without its fragment: "page#a" and "page"
// are one request to the server and are visited once. The entry itself keeps
// the URL exactly as it was resolved, so a broken "page#a" is reported as
// written.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use url::Url;

use crate::report::Referrer;

/// A page waiting to be visited, and where it was linked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: Url,
    pub referrer: Referrer,
}

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    pending: HashSet<Url>,
    visited: HashSet<Url>,
}

impl Frontier {
    /// A frontier holding only the seed. The seed skips scope and dedup
    /// checks: it is in scope by definition.
    pub fn with_seed(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.pending.insert(dedup_key(&seed));
        frontier.queue.push_back(FrontierEntry {
            url: seed,
            referrer: Referrer::Seed,
        });
        frontier
    }

    /// Appends `url` unless it was already visited or is already waiting.
    pub fn try_enqueue(&mut self, url: Url, referrer: Referrer) -> bool {
        let key = dedup_key(&url);
        if self.visited.contains(&key) || self.pending.contains(&key) {
            return false;
        }

        self.pending.insert(key);
        self.queue.push_back(FrontierEntry { url, referrer });
        true
    }

    /// Removes the oldest entry. `None` means the crawl is finished.
    pub fn take_next(&mut self) -> Option<FrontierEntry> {
        let entry = self.queue.pop_front()?;
        self.pending.remove(&dedup_key(&entry.url));
        Some(entry)
    }

    pub fn mark_visited(&mut self, url: &Url) {
        self.visited.insert(dedup_key(url));
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(&dedup_key(url))
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

// The fragment never reaches the server
fn dedup_key(url: &Url) -> Url {
    let mut key = url.clone();
    key.set_fragment(None);
    key
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why both a VecDeque and a HashSet for the same URLs?
//    - The VecDeque keeps the order (breadth-first crawling)
//    - The HashSet answers "is it already queued?" without scanning the queue
//    - Scanning a 10,000-entry queue for every link would be O(n) per link
//
// 2. Why mark visited when dequeuing, not when enqueuing?
//    - `pending` already blocks a second enqueue while the URL waits
//    - `visited` takes over once it leaves the queue
//    - Dropping either check lets the same page be queued again and again
//
// 3. Why is Url usable as a HashSet key?
//    - Url implements Hash and Eq by comparing its serialized string
// -----------------------------------------------------------------------------
