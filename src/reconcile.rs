//! # Reconciliation Pipeline
//!
//! Composes extraction, normalization, line matching and diffing into a
//! single pure pass over the web document and the transcript text.

use log::{debug, info, warn};

use crate::config::ReconcilerConfig;
use crate::differ::diff_tokens;
use crate::errors::ReconcileError;
use crate::extractor::MenuExtractor;
use crate::line_matcher::LineMatcher;
use crate::menu_model::{ComparisonResult, ComparisonStatus, MenuItem, Reconciliation};
use crate::text_processing::normalize_ingredients;
use crate::transcript::transcript_tokens;

/// Compare one menu item against the transcript
///
/// Without a matcher (no transcript) the item is reported as not found.
pub fn compare_item(
    item: &MenuItem,
    matcher: Option<&LineMatcher>,
    config: &ReconcilerConfig,
) -> ComparisonResult {
    let web_tokens = normalize_ingredients(&item.raw_description);

    let Some(line) = matcher.and_then(|m| m.find(&item.name)) else {
        return ComparisonResult::not_found(&item.name, web_tokens);
    };

    let transcript = transcript_tokens(line, &config.transcript);
    let diff = diff_tokens(&web_tokens, &transcript);
    let result = ComparisonResult::compared(&item.name, web_tokens, line, transcript, diff);
    debug!("'{}' -> {}", result.name, result.status);
    result
}

/// Run the whole comparison on in-memory inputs
///
/// # Examples
///
/// ```rust
/// use menu_reconcile::config::ReconcilerConfig;
/// use menu_reconcile::menu_model::ComparisonStatus;
/// use menu_reconcile::reconcile::reconcile;
///
/// let html = r#"<section id="hamburguesas"><article class="card menu-card">
///   <span class="menu-card-title">Clásica</span>
///   <div class="menu-card-desc">Carne, queso, lechuga y tomate.</div>
/// </article></section>"#;
/// let transcript = "CLÁSICA: carne, queso, lechuga y tomate";
///
/// let run = reconcile(html, Some(transcript), &ReconcilerConfig::default())?;
/// assert_eq!(run.results[0].status, ComparisonStatus::Ok);
/// # Ok::<(), menu_reconcile::errors::ReconcileError>(())
/// ```
pub fn reconcile(
    html: &str,
    transcript: Option<&str>,
    config: &ReconcilerConfig,
) -> Result<Reconciliation, ReconcileError> {
    let extractor = MenuExtractor::with_config(&config.extractor)?;
    let items = extractor.extract(html);

    let matcher = transcript.map(LineMatcher::from_text);
    if matcher.is_none() {
        warn!("No transcript available, every item will be reported as not found");
    }

    let results: Vec<ComparisonResult> = items
        .iter()
        .map(|item| compare_item(item, matcher.as_ref(), config))
        .collect();

    let run = Reconciliation {
        items,
        transcript_available: matcher.is_some(),
        results,
    };

    info!(
        "Compared {} items: {} ok, {} with differences, {} not found",
        run.results.len(),
        run.count(ComparisonStatus::Ok),
        run.count(ComparisonStatus::Differences),
        run.count(ComparisonStatus::NotFoundInTranscript)
    );
    Ok(run)
}
