// src/extract/mod.rs

//! Entry extraction from rendered page content.
//!
//! The target page has no stable schema, so extraction is an ordered list of
//! independent heuristics. Strategies run in priority order and the first
//! one to produce anything wins; results are de-duplicated on the entry
//! prefix key with first-seen order preserved.

pub mod elements;
pub mod lines;
pub mod matching;
pub mod section;
pub mod tokens;

use std::collections::HashSet;

use scraper::{ElementRef, Html};

use crate::models::Entry;

pub use matching::find_match;

/// Extraction strategies in priority order.
const STRATEGIES: [(&str, fn(&Html) -> Vec<Entry>); 3] = [
    ("line-proximity", lines::extract),
    ("structural-element", elements::extract),
    ("section-scoped", section::extract),
];

/// Extract an ordered, de-duplicated list of proceedings entries.
///
/// Never fails: malformed or empty content yields an empty list, which the
/// caller treats as a normal polling outcome.
pub fn extract_entries(page: &str) -> Vec<Entry> {
    let document = Html::parse_document(page);

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for (name, strategy) in STRATEGIES {
        let found = strategy(&document);
        if found.is_empty() {
            log::debug!("Strategy {} found nothing, falling back", name);
            continue;
        }

        log::debug!("Strategy {} found {} entries", name, found.len());
        for entry in found {
            if seen.insert(entry.dedupe_key()) {
                entries.push(entry);
            }
        }
        break;
    }

    entries
}

/// Collapse an element's text into single-space-separated form.
fn normalize_text(node: ElementRef<'_>) -> String {
    node.text()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
