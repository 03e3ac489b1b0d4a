//! Line-proximity extraction strategy.
//!
//! Scans the flattened page text line by line. A line carrying both a year
//! token and a conference token anchors an entry; up to two lookahead lines
//! are folded in while they still read like part of the same listing. This
//! runs first because it survives arbitrary markup reshuffles.

use scraper::Html;

use crate::models::Entry;

use super::tokens;

/// Maximum number of lookahead lines folded into one anchor.
const MAX_CONTINUATION_LINES: usize = 2;

/// Extract entries by grouping anchor lines with their continuations.
pub fn extract(document: &Html) -> Vec<Entry> {
    let lines = flatten_lines(document);
    let mut entries = Vec::new();

    let mut idx = 0;
    while idx < lines.len() {
        if !is_anchor(&lines[idx]) {
            idx += 1;
            continue;
        }

        let mut text = lines[idx].clone();
        let mut absorbed = 0;
        while absorbed < MAX_CONTINUATION_LINES {
            match lines.get(idx + absorbed + 1) {
                Some(next) if is_continuation(next) => {
                    text.push(' ');
                    text.push_str(next);
                    absorbed += 1;
                }
                _ => break,
            }
        }

        entries.push(Entry::new(text));
        // Absorbed lines are consumed; they are not re-examined as anchors.
        idx += absorbed + 1;
    }

    entries
}

/// Flatten the document into trimmed, non-empty text lines.
fn flatten_lines(document: &Html) -> Vec<String> {
    document
        .root_element()
        .text()
        .flat_map(|chunk| chunk.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// An anchor line carries both a year token and a conference token.
fn is_anchor(line: &str) -> bool {
    tokens::has_year(line) && tokens::has_conference(line)
}

/// Whether a lookahead line reads like the continuation of a listing:
/// a venue line, a short fragment, or one leading with a date or count.
fn is_continuation(line: &str) -> bool {
    if line.to_lowercase().contains("location") {
        return true;
    }
    if line.chars().count() < 100 {
        return true;
    }
    line.chars().take(10).any(|c| c.is_ascii_digit())
}
