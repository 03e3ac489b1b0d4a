//! Match detection over extracted entries.

use crate::models::Entry;

/// Find the first entry announcing the target publication.
///
/// An entry matches when it contains the year token exactly and the keyword
/// token case-insensitively. Both must appear in the same entry; a year in
/// one listing and the keyword in a neighboring one never counts.
pub fn find_match<'a>(entries: &'a [Entry], year: &str, keyword: &str) -> Option<&'a Entry> {
    let keyword = keyword.to_lowercase();
    entries
        .iter()
        .find(|entry| entry.text.contains(year) && entry.text.to_lowercase().contains(&keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(texts: &[&str]) -> Vec<Entry> {
        texts.iter().copied().map(Entry::new).collect()
    }

    #[test]
    fn test_first_match_wins() {
        let entries = entries(&[
            "2024 ICONAT proceedings",
            "2025 ICONAT proceedings, first",
            "2025 ICONAT proceedings, second",
        ]);
        let hit = find_match(&entries, "2025", "ICONAT").unwrap();
        assert!(hit.text.ends_with("first"));
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let entries = entries(&["Proceedings of iconat 2025, Goa"]);
        assert!(find_match(&entries, "2025", "ICONAT").is_some());
    }

    #[test]
    fn test_tokens_in_separate_entries_do_not_match() {
        let entries = entries(&[
            "ICONAT proceedings, year pending",
            "2025 Widget Symposium proceedings",
        ]);
        assert!(find_match(&entries, "2025", "ICONAT").is_none());
    }

    #[test]
    fn test_no_entries_no_match() {
        assert!(find_match(&[], "2025", "ICONAT").is_none());
    }

    #[test]
    fn test_year_must_be_exact() {
        let entries = entries(&["ICONAT 2024 proceedings now available"]);
        assert!(find_match(&entries, "2025", "ICONAT").is_none());
    }
}
