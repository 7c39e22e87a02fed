//! # Menu Data Model
//!
//! This module defines the records that flow through a reconciliation run.
//!
//! ## Core Concepts
//!
//! - **MenuItem**: a burger name and its raw description, as published on the web
//! - **ComparisonStatus**: the outcome of comparing one item against the transcript
//! - **IngredientDiff**: tokens present on only one side
//! - **ComparisonResult**: everything known about one item after comparison
//! - **Reconciliation**: a whole run, ready to be reported

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::differ::classify;

/// A burger record extracted from the web menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item name, trimmed and tag-stripped (e.g., "Clásica")
    pub name: String,

    /// Description as published (e.g., "Carne de vacuno, queso cheddar y bacon.")
    pub raw_description: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, raw_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_description: raw_description.into(),
        }
    }

    /// Both fields must carry text for the item to be comparable
    pub fn is_comparable(&self) -> bool {
        !self.name.trim().is_empty() && !self.raw_description.trim().is_empty()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.raw_description)
    }
}

/// Outcome of comparing one menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonStatus {
    /// Same ingredient set in both sources
    Ok,
    /// No transcript line mentions the item
    NotFoundInTranscript,
    /// Ingredient sets differ
    Differences,
}

impl fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComparisonStatus::Ok => "OK",
            ComparisonStatus::NotFoundInTranscript => "NOT_FOUND_IN_TRANSCRIPT",
            ComparisonStatus::Differences => "DIFFERENCES",
        };
        f.write_str(label)
    }
}

/// One-directional set differences between web and transcript tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDiff {
    /// Tokens of the web description missing from the transcript, first-seen order
    pub only_in_web: Vec<String>,
    /// Tokens of the transcript line missing from the web description, first-seen order
    pub only_in_transcript: Vec<String>,
}

impl IngredientDiff {
    pub fn is_empty(&self) -> bool {
        self.only_in_web.is_empty() && self.only_in_transcript.is_empty()
    }
}

/// Comparison outcome for a single menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub name: String,
    pub status: ComparisonStatus,
    pub web_tokens: Vec<String>,
    /// Transcript line matched for this item
    pub transcript_line: Option<String>,
    /// `None` when no transcript line was found
    pub transcript_tokens: Option<Vec<String>>,
    pub only_in_web: Vec<String>,
    pub only_in_transcript: Vec<String>,
}

impl ComparisonResult {
    /// Result for an item with no matching transcript line
    pub fn not_found(name: impl Into<String>, web_tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            status: ComparisonStatus::NotFoundInTranscript,
            web_tokens,
            transcript_line: None,
            transcript_tokens: None,
            only_in_web: Vec::new(),
            only_in_transcript: Vec::new(),
        }
    }

    /// Result for an item matched to a transcript line
    pub fn compared(
        name: impl Into<String>,
        web_tokens: Vec<String>,
        transcript_line: impl Into<String>,
        transcript_tokens: Vec<String>,
        diff: IngredientDiff,
    ) -> Self {
        let status = classify(&diff);
        Self {
            name: name.into(),
            status,
            web_tokens,
            transcript_line: Some(transcript_line.into()),
            transcript_tokens: Some(transcript_tokens),
            only_in_web: diff.only_in_web,
            only_in_transcript: diff.only_in_transcript,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ComparisonStatus::Ok
    }
}

/// The outcome of a whole reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Comparable items extracted from the web menu, document order
    pub items: Vec<MenuItem>,
    /// False when no transcript could be read
    pub transcript_available: bool,
    pub results: Vec<ComparisonResult>,
}

impl Reconciliation {
    /// Number of results with the given status
    pub fn count(&self, status: ComparisonStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}
