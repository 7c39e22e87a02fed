//! # Error Types Module
//!
//! This module defines the error taxonomy of a reconciliation run.
//! Only an unreadable menu document aborts a run; a missing transcript
//! degrades the run and unmatched items are a per-item status.

/// Custom error types for reconciliation
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileError {
    /// The HTML menu document could not be read
    FatalInput(String),
    /// The transcript file is absent or unreadable
    MissingTranscript(String),
    /// Invalid selector, pattern or report format
    InvalidConfig(String),
    /// Report rendering errors
    Report(String),
}

impl std::fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconcileError::FatalInput(msg) => write!(f, "Cannot read menu document: {msg}"),
            ReconcileError::MissingTranscript(msg) => write!(f, "Transcript unavailable: {msg}"),
            ReconcileError::InvalidConfig(msg) => write!(f, "Configuration error: {msg}"),
            ReconcileError::Report(msg) => write!(f, "Report error: {msg}"),
        }
    }
}

impl std::error::Error for ReconcileError {}

impl From<serde_json::Error> for ReconcileError {
    fn from(err: serde_json::Error) -> Self {
        ReconcileError::Report(err.to_string())
    }
}
