//! Proceedings entry data structure.

/// One candidate proceedings listing extracted from page content.
///
/// Entries are transient: they live for a single extraction pass and carry no
/// identity beyond their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Visible text of the listing
    pub text: String,
}

/// Two entries are the same listing when this many leading characters match.
const KEY_PREFIX_CHARS: usize = 100;

impl Entry {
    /// Create an entry from its visible text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// De-duplication key: the first 100 characters, lowercased.
    ///
    /// Listings rendered by more than one page structure tend to differ only
    /// in trailing boilerplate, so identity is decided on the prefix.
    pub fn dedupe_key(&self) -> String {
        self.text
            .chars()
            .take(KEY_PREFIX_CHARS)
            .collect::<String>()
            .to_lowercase()
    }

    /// Prefix of the entry text suitable for log lines.
    pub fn preview(&self) -> &str {
        match self.text.char_indices().nth(KEY_PREFIX_CHARS) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_key_lowercases() {
        let entry = Entry::new("ICONAT 2025 Proceedings");
        assert_eq!(entry.dedupe_key(), "iconat 2025 proceedings");
    }

    #[test]
    fn test_dedupe_key_truncates_to_prefix() {
        let long = format!("{}{}", "a".repeat(100), "different tail");
        let other = format!("{}{}", "A".repeat(100), "ANOTHER TAIL");
        assert_eq!(Entry::new(long).dedupe_key(), Entry::new(other).dedupe_key());
    }

    #[test]
    fn test_dedupe_key_differs_within_prefix() {
        let a = Entry::new("2024 ICONAT proceedings");
        let b = Entry::new("2025 ICONAT proceedings");
        assert_ne!(a.dedupe_key(), b.dedupe_key());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(150);
        let entry = Entry::new(text);
        assert_eq!(entry.preview().chars().count(), 100);
    }
}
