//! # Transcript Ingredient Extraction
//!
//! Isolates the ingredient part of a matched transcript line and turns it
//! into tokens comparable with the web description.

use log::trace;

use crate::config::TranscriptConfig;
use crate::measurement_patterns::{LEADING_CAPS_REGEX, NAME_DELIMITER_REGEX};
use crate::text_processing::{normalize_ingredients, split_segments};

/// Text after the first `:`, `-` or `–`, or the whole line without a delimiter
///
/// Further delimiter-separated pieces are rejoined with single spaces.
pub fn ingredient_section(line: &str) -> String {
    let mut pieces = NAME_DELIMITER_REGEX.split(line);
    pieces.next();
    let rest: Vec<&str> = pieces.collect();

    if rest.is_empty() {
        line.to_string()
    } else {
        rest.join(" ").trim().to_string()
    }
}

/// Drop a leading run of 3+ uppercase letters, digits or spaces followed by whitespace
///
/// Best-effort removal of an item name repeated in capitals before its
/// ingredients, as OCR output of the printed menu often shows.
pub fn strip_leading_caps_run(text: &str) -> String {
    LEADING_CAPS_REGEX.replace(text, "").into_owned()
}

/// Lowercased comma/connector phrases of a transcript line, before normalization
pub fn raw_transcript_phrases(line: &str, config: &TranscriptConfig) -> Vec<String> {
    let mut section = ingredient_section(line);
    if config.strip_leading_caps {
        section = strip_leading_caps_run(&section);
    }
    trace!("Ingredient section of '{}': '{}'", line, section);

    split_segments(&section)
        .into_iter()
        .map(|phrase| phrase.to_lowercase())
        .collect()
}

/// Fully normalized ingredient tokens of a transcript line
///
/// # Examples
///
/// ```rust
/// use menu_reconcile::config::TranscriptConfig;
/// use menu_reconcile::transcript::transcript_tokens;
///
/// let tokens = transcript_tokens(
///     "CLÁSICA: carne, queso, lechuga y tomate",
///     &TranscriptConfig::default(),
/// );
/// assert_eq!(tokens, vec!["carne", "queso", "lechuga", "tomate"]);
/// ```
pub fn transcript_tokens(line: &str, config: &TranscriptConfig) -> Vec<String> {
    normalize_ingredients(&raw_transcript_phrases(line, config).join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_section_after_first_delimiter() {
        assert_eq!(
            ingredient_section("CLÁSICA: carne, queso"),
            "carne, queso"
        );
        assert_eq!(
            ingredient_section("TEXANA – carne - salsa bbq"),
            "carne   salsa bbq"
        );
    }

    #[test]
    fn test_ingredient_section_without_delimiter() {
        assert_eq!(
            ingredient_section("CLÁSICA carne, queso"),
            "CLÁSICA carne, queso"
        );
    }

    #[test]
    fn test_strip_leading_caps_run() {
        assert_eq!(strip_leading_caps_run("CLÁSICA carne, queso"), "carne, queso");
        assert_eq!(strip_leading_caps_run("LA TEXANA 200 carne"), "carne");
        assert_eq!(strip_leading_caps_run("BB carne"), "BB carne");
        assert_eq!(strip_leading_caps_run("carne, queso"), "carne, queso");
    }

    #[test]
    fn test_raw_phrases_lowercased_not_normalized() {
        let phrases = raw_transcript_phrases(
            "CLÁSICA: Carne de vacuno, Queso y Bacon.",
            &TranscriptConfig::default(),
        );
        assert_eq!(phrases, vec!["carne de vacuno", "queso", "bacon."]);
    }

    #[test]
    fn test_caps_heuristic_can_be_disabled() {
        let config = TranscriptConfig {
            strip_leading_caps: false,
        };
        assert_eq!(
            transcript_tokens("CLÁSICA carne, queso", &config),
            vec!["clásica carne", "queso"]
        );
        assert_eq!(
            transcript_tokens("CLÁSICA carne, queso", &TranscriptConfig::default()),
            vec!["carne", "queso"]
        );
    }

    #[test]
    fn test_transcript_tokens_full_normalization() {
        assert_eq!(
            transcript_tokens(
                "DOBLE BACON - 2x100GR de carne, Double cheddar y bacon crispy.",
                &TranscriptConfig::default()
            ),
            vec!["2x100gr carne", "doble cheddar", "bacon crispy"]
        );
    }
}
