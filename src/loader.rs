//! # Input Loader
//!
//! The two reads at the boundary of a run. Failures are mapped onto the
//! reconciliation error taxonomy: the menu document is required, the
//! transcript is optional.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::errors::ReconcileError;

/// Read the HTML menu document
pub fn read_menu_document(path: &Path) -> Result<String, ReconcileError> {
    info!("Reading menu document: {}", path.display());
    let html = fs::read_to_string(path)
        .map_err(|e| ReconcileError::FatalInput(format!("{}: {}", path.display(), e)))?;

    if html.trim().is_empty() {
        return Err(ReconcileError::FatalInput(format!(
            "{}: document is empty",
            path.display()
        )));
    }
    Ok(html)
}

/// Read the OCR transcript
pub fn read_transcript(path: &Path) -> Result<String, ReconcileError> {
    info!("Reading transcript: {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| ReconcileError::MissingTranscript(format!("{}: {}", path.display(), e)))?;

    if text.trim().is_empty() {
        return Err(ReconcileError::MissingTranscript(format!(
            "{}: file is empty",
            path.display()
        )));
    }
    Ok(text)
}

/// Read the transcript, degrading to `None` when it cannot be read
pub fn read_transcript_optional(path: &Path) -> Option<String> {
    match read_transcript(path) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}
