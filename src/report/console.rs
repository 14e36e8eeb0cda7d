// src/report/console.rs
// Human-readable output on stdout: one block per broken reference as it is
// found, and a summary once the crawl is over.

use super::ledger::{BrokenReference, Ledger, ReferenceKind};

// Formats a broken reference as a multi-line block
//
// The "Page Title" line is only present for references that carry a title.
pub fn format_block(reference: &BrokenReference) -> String {
    let mut block = String::from("\n--- ⚠️ BROKEN LINK FOUND ---\n");
    block.push_str(&format!("  Type       : {}\n", reference.kind));
    block.push_str(&format!("  URL        : {}\n", reference.broken_url));
    block.push_str(&format!("  Found On   : {}\n", reference.referrer));
    if let Some(title) = &reference.page_title {
        block.push_str(&format!("  Page Title : {}\n", title));
    }
    block.push_str("---------------------------\n");
    block
}

pub fn announce(reference: &BrokenReference) {
    println!("{}", format_block(reference));
}

pub fn print_summary(ledger: &Ledger, pages_visited: usize, images_checked: usize) {
    println!("📊 Summary:");
    println!("   📄 Pages crawled: {}", pages_visited);
    println!("   🖼️  Images checked: {}", images_checked);
    println!("   ❌ Broken pages: {}", ledger.count(ReferenceKind::Page));
    println!("   ❌ Broken images: {}", ledger.count(ReferenceKind::Image));
}
