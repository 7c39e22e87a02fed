//! # Text Processing Module
//!
//! This module turns free-text ingredient descriptions into comparable
//! ingredient tokens.
//!
//! ## Features
//!
//! - Weight markers ("200GR.") and adjective variants ("Double") are canonicalized
//! - Descriptions are split on commas and on the Spanish/Basque connectors " y " / " eta "
//! - Spanish stopwords are removed as whole words
//! - Whitespace is collapsed and empty phrases dropped
//!
//! ## Usage
//!
//! ```rust
//! use menu_reconcile::text_processing::normalize_ingredients;
//!
//! let tokens = normalize_ingredients("Carne de vacuno, queso cheddar y bacon.");
//! assert_eq!(tokens, vec!["carne vacuno", "queso cheddar", "bacon"]);
//! ```

use log::{debug, trace};

use crate::measurement_patterns::{
    ADJECTIVE_REGEXES, CONNECTOR_REGEX, STOPWORD_REGEX, TRAILING_PERIODS_REGEX, WEIGHT_REGEX,
    WHITESPACE_RUN_REGEX,
};

/// Normalize a raw ingredient description into ordered ingredient phrases
///
/// Duplicates are kept; an empty description yields an empty list.
///
/// # Examples
///
/// ```rust
/// use menu_reconcile::text_processing::normalize_ingredients;
///
/// let tokens = normalize_ingredients("200gr. de carne, Double queso");
/// assert_eq!(tokens, vec!["200gr. carne", "doble queso"]);
/// assert!(normalize_ingredients("").is_empty());
/// ```
pub fn normalize_ingredients(description: &str) -> Vec<String> {
    if description.trim().is_empty() {
        return Vec::new();
    }

    let cleaned = canonicalize_description(description);
    let tokens: Vec<String> = split_segments(&cleaned)
        .iter()
        .map(|phrase| clean_phrase(&phrase.to_lowercase()))
        .filter(|phrase| !phrase.is_empty())
        .collect();

    debug!(
        "Normalized description '{}' into {} tokens",
        description,
        tokens.len()
    );
    tokens
}

/// Strip trailing periods and canonicalize weights and adjective variants
pub fn canonicalize_description(description: &str) -> String {
    let stripped = TRAILING_PERIODS_REGEX.replace(description, "");
    let mut cleaned = WEIGHT_REGEX
        .replace_all(&stripped, |caps: &regex::Captures| caps[0].to_lowercase())
        .into_owned();

    for (pattern, canonical) in ADJECTIVE_REGEXES.iter() {
        cleaned = pattern.replace_all(&cleaned, *canonical).into_owned();
    }

    trace!("Canonicalized description: '{}' -> '{}'", description, cleaned);
    cleaned
}

/// Split text on commas, then on " y " / " eta " connectors
///
/// Segments are trimmed and empty ones dropped. Case is left untouched.
pub fn split_segments(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();

    for segment in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if CONNECTOR_REGEX.is_match(segment) {
            phrases.extend(
                CONNECTOR_REGEX
                    .split(segment)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        } else {
            phrases.push(segment.to_string());
        }
    }

    phrases
}

/// Remove stopwords and collapse whitespace in a lowercased phrase
fn clean_phrase(phrase: &str) -> String {
    let without_stopwords = STOPWORD_REGEX.replace_all(phrase, "");
    WHITESPACE_RUN_REGEX
        .replace_all(&without_stopwords, " ")
        .trim()
        .to_string()
}
