//! Structural-element extraction strategy.
//!
//! Walks the content nodes that commonly hold one listing each and keeps
//! those whose text names both a year and the conference.

use scraper::{Html, Selector};

use crate::models::Entry;

use super::{normalize_text, tokens};

/// Content nodes that can hold one listing.
const NODE_SELECTOR: &str = "li, div, p, span, article";

/// Minimum text length; anything shorter is navigation or a header.
const MIN_TEXT_CHARS: usize = 20;

/// Extract entries from structural content nodes.
pub fn extract(document: &Html) -> Vec<Entry> {
    let selector = Selector::parse(NODE_SELECTOR).expect("static selector");

    let mut entries = Vec::new();
    for node in document.select(&selector) {
        let text = normalize_text(node);
        if text.chars().count() <= MIN_TEXT_CHARS {
            continue;
        }
        if tokens::has_year(&text) && tokens::has_conference(&text) {
            entries.push(Entry::new(text));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(html: &str) -> Vec<Entry> {
        extract(&Html::parse_document(html))
    }

    #[test]
    fn test_list_items_with_both_tokens() {
        let html = "<ul>\
            <li>2024 International Conference for Advancement in Technology (ICONAT)</li>\
            <li>2023 International Conference for Advancement in Technology (ICONAT)</li>\
            </ul>";
        let entries = extract_from(html);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].text.starts_with("2024"));
        assert!(entries[1].text.starts_with("2023"));
    }

    #[test]
    fn test_tokens_split_across_child_nodes_still_match() {
        // No single flattened line carries both tokens here, but the list
        // item's joined text does.
        let html = "<li>\
            <span>International Conference for Advancement in Technology</span>\
            <span>Year: 2025</span>\
            </li>";
        let entries = extract_from(html);
        assert!(!entries.is_empty());
        assert!(entries[0].text.contains("2025"));
    }

    #[test]
    fn test_short_text_is_skipped() {
        let entries = extract_from("<li>ICONAT 2025</li>");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_year_without_conference_is_skipped() {
        let entries = extract_from("<li>Proceedings of the 2025 Widget Symposium</li>");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let html = "<li>ICONAT   2025\n  International   Conference details here</li>";
        let entries = extract_from(html);
        assert_eq!(
            entries[0].text,
            "ICONAT 2025 International Conference details here"
        );
    }
}
