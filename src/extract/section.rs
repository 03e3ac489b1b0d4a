//! Section-scoped extraction strategy.
//!
//! Last resort: locate the page's own "All Proceedings" section and trust
//! its scope instead of a conference token. Any sufficiently long node
//! inside that section naming a year is taken as a listing.

use scraper::{ElementRef, Html, Selector};

use crate::models::Entry;

use super::{normalize_text, tokens};

/// Elements that can mark the proceedings section.
const MARKER_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, a, button";

/// Nodes collected inside the section.
const ITEM_SELECTOR: &str = "li, div, p";

/// Marker text, matched case-sensitively as the site renders it.
const SECTION_TITLE: &str = "All Proceedings";

/// Marker link fragment, matched case-insensitively.
const SECTION_HREF: &str = "all-proceedings";

const MIN_TEXT_CHARS: usize = 20;

/// Extract entries scoped to the "All Proceedings" section.
pub fn extract(document: &Html) -> Vec<Entry> {
    let Some(container) = find_section(document) else {
        log::debug!("Could not find 'All Proceedings' section");
        return Vec::new();
    };

    let item_sel = Selector::parse(ITEM_SELECTOR).expect("static selector");
    let mut entries = Vec::new();
    for node in container.select(&item_sel) {
        let text = normalize_text(node);
        if text.chars().count() > MIN_TEXT_CHARS && tokens::has_year(&text) {
            entries.push(Entry::new(text));
        }
    }
    entries
}

/// Locate the container enclosing the section marker element.
fn find_section(document: &Html) -> Option<ElementRef<'_>> {
    let marker_sel = Selector::parse(MARKER_SELECTOR).expect("static selector");

    for element in document.select(&marker_sel) {
        let text: String = element.text().collect();
        let href_hit = element
            .value()
            .attr("href")
            .is_some_and(|href| href.to_lowercase().contains(SECTION_HREF));
        if text.contains(SECTION_TITLE) || href_hit {
            return Some(enclosing_container(element));
        }
    }
    None
}

/// Nearest enclosing element, falling back to the marker itself at the root.
fn enclosing_container(element: ElementRef<'_>) -> ElementRef<'_> {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .unwrap_or(element)
}
