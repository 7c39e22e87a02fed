//! # Token Differ
//!
//! Set differences between web and transcript ingredient tokens.
//! Membership is exact string equality on normalized tokens.

use std::collections::HashSet;

use log::trace;

use crate::menu_model::{ComparisonStatus, IngredientDiff};

/// Compute both one-directional differences between two token lists
///
/// Each side is deduplicated and keeps the order in which tokens first appear.
///
/// # Examples
///
/// ```rust
/// use menu_reconcile::differ::diff_tokens;
///
/// let web = vec!["carne".to_string(), "bacon".to_string()];
/// let transcript = vec!["carne".to_string(), "cebolla".to_string()];
/// let diff = diff_tokens(&web, &transcript);
///
/// assert_eq!(diff.only_in_web, vec!["bacon"]);
/// assert_eq!(diff.only_in_transcript, vec!["cebolla"]);
/// ```
pub fn diff_tokens(web: &[String], transcript: &[String]) -> IngredientDiff {
    let web_set: HashSet<&str> = web.iter().map(String::as_str).collect();
    let transcript_set: HashSet<&str> = transcript.iter().map(String::as_str).collect();

    let diff = IngredientDiff {
        only_in_web: difference_in_order(web, &transcript_set),
        only_in_transcript: difference_in_order(transcript, &web_set),
    };

    trace!(
        "Diffed {} web tokens against {} transcript tokens: {:?}",
        web.len(),
        transcript.len(),
        diff
    );
    diff
}

/// Status for an item that was matched to a transcript line
pub fn classify(diff: &IngredientDiff) -> ComparisonStatus {
    if diff.is_empty() {
        ComparisonStatus::Ok
    } else {
        ComparisonStatus::Differences
    }
}

fn difference_in_order(tokens: &[String], exclude: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| !exclude.contains(t.as_str()))
        .filter(|t| seen.insert(*t))
        .cloned()
        .collect()
}
