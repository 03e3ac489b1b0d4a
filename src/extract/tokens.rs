//! Match token sets shared by the extraction strategies.

/// Year tokens that identify a proceedings listing.
pub const YEAR_TOKENS: [&str; 4] = ["2022", "2023", "2024", "2025"];

/// Conference name fragments, matched case-insensitively.
pub const CONFERENCE_TOKENS: [&str; 4] = [
    "iconat",
    "international conference",
    "conference for advancement",
    "advancement in technology",
];

/// Whether the text contains any year token.
pub fn has_year(text: &str) -> bool {
    YEAR_TOKENS.iter().any(|year| text.contains(year))
}

/// Whether the text contains any conference token, ignoring case.
pub fn has_conference(text: &str) -> bool {
    let lower = text.to_lowercase();
    CONFERENCE_TOKENS.iter().any(|token| lower.contains(token))
}
