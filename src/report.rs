//! # Report Rendering
//!
//! Human-readable and JSON renderings of a reconciliation run.

use std::fmt::Write;

use crate::errors::ReconcileError;
use crate::menu_model::{ComparisonStatus, Reconciliation};

/// Render the run as a plain text report
///
/// `transcript_name` is shown in the notice printed when no transcript was
/// available.
pub fn render_text(run: &Reconciliation, transcript_name: &str) -> String {
    let mut out = String::new();

    out.push_str("=== WEB MENU ITEMS ===\n");
    for item in &run.items {
        let _ = writeln!(out, "- {item}");
    }

    out.push_str("\n=== COMPARISON RESULTS ===\n");
    if !run.transcript_available {
        let _ = writeln!(
            out,
            "No transcript found -> create {transcript_name} (OCR of the printed menu) to compare."
        );
    }

    for result in &run.results {
        let _ = writeln!(out, "\n{} -> {}", result.name, result.status);
        if result.is_ok() {
            continue;
        }

        let _ = writeln!(out, "  Web: {}", result.web_tokens.join(", "));
        if let Some(tokens) = &result.transcript_tokens {
            let _ = writeln!(out, "  Transcript: {}", tokens.join(", "));
        }
        if !result.only_in_web.is_empty() {
            let _ = writeln!(out, "  Only in web: {}", result.only_in_web.join(", "));
        }
        if !result.only_in_transcript.is_empty() {
            let _ = writeln!(
                out,
                "  Only in transcript: {}",
                result.only_in_transcript.join(", ")
            );
        }
    }

    let _ = writeln!(
        out,
        "\nSummary: {} OK, {} with differences, {} not found in transcript",
        run.count(ComparisonStatus::Ok),
        run.count(ComparisonStatus::Differences),
        run.count(ComparisonStatus::NotFoundInTranscript)
    );
    out
}

/// Render the run as pretty-printed JSON
pub fn render_json(run: &Reconciliation) -> Result<String, ReconcileError> {
    Ok(serde_json::to_string_pretty(run)?)
}
