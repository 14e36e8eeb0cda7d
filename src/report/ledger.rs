// src/report/ledger.rs
// =============================================================================
// The broken-reference ledger: every 404 found during a crawl, in the order
// it was found.
//
// Entries are never deduplicated. The same missing image linked from three
// pages yields three entries, because each page needs its own fix.
// =============================================================================

use std::fmt;
use url::Url;

/// What kind of reference turned out to be broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Page,
    Image,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Page => f.write_str("Page"),
            ReferenceKind::Image => f.write_str("Image"),
        }
    }
}

/// Where a frontier entry (and therefore a broken page) was discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Referrer {
    /// The crawl's starting point; nothing linked to it.
    Seed,
    Page(Url),
}

impl fmt::Display for Referrer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Referrer::Seed => f.write_str("START_URL"),
            Referrer::Page(url) => f.write_str(url.as_str()),
        }
    }
}

/// One reportable 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenReference {
    pub kind: ReferenceKind,
    pub broken_url: Url,
    pub referrer: Referrer,
    /// Title of the page the image sits on; `None` for broken pages.
    pub page_title: Option<String>,
}

impl BrokenReference {
    pub fn page(broken_url: Url, referrer: Referrer) -> Self {
        Self {
            kind: ReferenceKind::Page,
            broken_url,
            referrer,
            page_title: None,
        }
    }

    pub fn image(broken_url: Url, owner: Url, owner_title: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::Image,
            broken_url,
            referrer: Referrer::Page(owner),
            page_title: Some(owner_title.into()),
        }
    }
}

/// Append-only, ordered list of broken references for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<BrokenReference>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reference: BrokenReference) {
        self.entries.push(reference);
    }

    pub fn entries(&self) -> &[BrokenReference] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: ReferenceKind) -> usize {
        self.entries.iter().filter(|r| r.kind == kind).count()
    }
}
