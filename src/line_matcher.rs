//! # Line Matcher
//!
//! Locates the transcript line that mentions a given menu item. Matching
//! compares accent-, case-, space- and punctuation-free keys so that OCR
//! noise in spacing or diacritics does not prevent a match.

use log::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Split transcript text into trimmed, non-empty lines
pub fn transcript_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Matching key: lowercase, NFD, ASCII letters and digits only
///
/// # Examples
///
/// ```rust
/// use menu_reconcile::line_matcher::match_key;
///
/// assert_eq!(match_key("Hamburguesa Clásica"), "hamburguesaclasica");
/// assert_eq!(match_key("L'Ñoño - 2"), "lnono2");
/// ```
pub fn match_key(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Transcript lines with their precomputed matching keys
#[derive(Debug, Clone, Default)]
pub struct LineMatcher {
    lines: Vec<(String, String)>,
}

impl LineMatcher {
    /// Build a matcher over the lines of a transcript
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(transcript_lines(text))
    }

    /// Build a matcher over already split lines, keeping their order
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines: Vec<(String, String)> = lines
            .into_iter()
            .map(|line| {
                let key = match_key(&line);
                (line, key)
            })
            .collect();
        info!("Indexed {} transcript lines", lines.len());
        Self { lines }
    }

    /// First line whose key contains the key of `name`
    ///
    /// A name with an empty key (only punctuation or non-Latin symbols)
    /// is contained in every key, so it matches the first line.
    pub fn find(&self, name: &str) -> Option<&str> {
        let target = match_key(name);

        let found = self
            .lines
            .iter()
            .find(|(_, key)| key.contains(&target))
            .map(|(line, _)| line.as_str());

        match found {
            Some(line) => debug!("Matched '{}' to transcript line '{}'", name, line),
            None => debug!("No transcript line for '{}'", name),
        }
        found
    }
}
