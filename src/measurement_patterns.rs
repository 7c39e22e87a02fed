//! # Measurement Patterns Module
//!
//! This module contains the regex patterns and lookup tables used to
//! normalize ingredient descriptions and transcript lines.

use lazy_static::lazy_static;
use regex::Regex;

/// Spanish stopwords removed from ingredient phrases (whole words only)
pub const SPANISH_STOPWORDS: [&str; 8] = ["de", "con", "la", "el", "los", "las", "un", "una"];

/// Adjective spellings unified across the web menu and the printed menu
pub const ADJECTIVE_CANONICAL: [(&str, &str); 2] = [("double", "doble"), ("crispy", "crispy")];

// Weight markers such as "200gr.", "180 g"
pub const WEIGHT_PATTERN: &str = r"(?i)\b\d+\s?gr?\.?";

// " y " / " eta " between two whitespace characters
pub const CONNECTOR_PATTERN: &str = r"(?i)\s(?:y|eta)\s";

// Separators between an item name and its ingredients in a transcript line
pub const NAME_DELIMITER_PATTERN: &str = r"[:\-–]";

// A repeated all-caps item name in front of transcript ingredients
pub const LEADING_CAPS_PATTERN: &str = r"^[A-ZÁÉÍÓÚÜÑ0-9 ]{3,}\s+";

lazy_static! {
    pub static ref TRAILING_PERIODS_REGEX: Regex =
        Regex::new(r"\.+$").expect("Trailing periods pattern should be valid");
    pub static ref WEIGHT_REGEX: Regex =
        Regex::new(WEIGHT_PATTERN).expect("Weight pattern should be valid");
    pub static ref CONNECTOR_REGEX: Regex =
        Regex::new(CONNECTOR_PATTERN).expect("Connector pattern should be valid");
    pub static ref NAME_DELIMITER_REGEX: Regex =
        Regex::new(NAME_DELIMITER_PATTERN).expect("Name delimiter pattern should be valid");
    pub static ref LEADING_CAPS_REGEX: Regex =
        Regex::new(LEADING_CAPS_PATTERN).expect("Leading caps pattern should be valid");
    pub static ref WHITESPACE_RUN_REGEX: Regex =
        Regex::new(r"\s{2,}").expect("Whitespace pattern should be valid");
    pub static ref STOPWORD_REGEX: Regex = Regex::new(&format!(
        r"\b(?:{})\b",
        SPANISH_STOPWORDS.join("|")
    ))
    .expect("Stopword pattern should be valid");
    pub static ref ADJECTIVE_REGEXES: Vec<(Regex, &'static str)> = ADJECTIVE_CANONICAL
        .iter()
        .map(|(variant, canonical)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(variant));
            (
                Regex::new(&pattern).expect("Adjective pattern should be valid"),
                *canonical,
            )
        })
        .collect();
}
