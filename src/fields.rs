//! Contact-field heuristics over decoded resume text.
//!
//! Pure functions, total: absence of a field yields the sentinel `"Unknown"`,
//! never an error. These are deliberately shallow pattern scans, not parsers;
//! downstream scoring depends only on the extracted text, not on extraction
//! accuracy, so the scan order and fallback chain here must stay stable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel for a field the heuristics could not find.
pub const UNKNOWN: &str = "Unknown";

/// How many non-empty lines to consider when guessing the candidate's name.
const NAME_SCAN_LINES: usize = 10;
/// Lines at or beyond this length are never taken as a name.
const NAME_MAX_LEN: usize = 50;

static ONLY_SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\W_]+$").unwrap());
static NAME_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"@|http|www|\.com").unwrap());
static CAPITALIZED_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+ [A-Z][a-z]+").unwrap());

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.[A-Za-z]{2,}").unwrap());

// Tried in order; the first pattern with a hit wins.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // 123-456-7890, 123.456.7890, 1234567890
        Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap(),
        // (123) 456-7890
        Regex::new(r"\(\d{3}\)[-. ]?\d{3}[-.]?\d{4}").unwrap(),
        // +1 123-456-7890
        Regex::new(r"\+\d{1,2}[-. ]?\d{3}[-. ]?\d{3}[-. ]?\d{4}").unwrap(),
    ]
});

/// The three contact fields guessed from a resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Runs all three heuristics over the decoded text.
pub fn extract(text: &str) -> ContactFields {
    ContactFields {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
    }
}

/// Guesses the candidate's name: the first of the leading non-empty lines
/// that is short, not pure punctuation, and free of contact markers.
/// Falls back to the first "Firstname Lastname" capitalized pair anywhere
/// in the text.
pub fn extract_name(text: &str) -> String {
    for line in text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(NAME_SCAN_LINES)
    {
        if ONLY_SYMBOLS.is_match(line) {
            continue;
        }
        if line.chars().count() < NAME_MAX_LEN && !NAME_MARKERS.is_match(&line.to_lowercase()) {
            return line.to_string();
        }
    }

    if let Some(m) = CAPITALIZED_PAIR.find(text) {
        return m.as_str().to_string();
    }

    UNKNOWN.to_string()
}

/// First email-shaped substring, or the sentinel.
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// First phone-shaped substring across the pattern chain, or the sentinel.
pub fn extract_phone(text: &str) -> String {
    for pattern in PHONE_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            return m.as_str().to_string();
        }
    }
    UNKNOWN.to_string()
}
