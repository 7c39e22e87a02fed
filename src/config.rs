//! # Reconciler Configuration Module
//!
//! This module defines configuration structures for a reconciliation run:
//! input locations, report format, extractor selectors and transcript
//! heuristics.

use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::ReconcileError;

// Constants for reconciler configuration
pub const DEFAULT_INDEX_PATH: &str = "index.html";
pub const DEFAULT_TRANSCRIPT_PATH: &str = "carta_texto.txt";
pub const DEFAULT_SECTION_IDS: [&str; 2] = ["hamburguesas", "chuletas"];
pub const DEFAULT_CARD_SELECTOR: &str = "article.card.menu-card";
pub const DEFAULT_TITLE_SELECTOR: &str = "span.menu-card-title";
pub const DEFAULT_TITLE_WRAPPER_SELECTOR: &str = "span.menu-card-title-wrapper";
pub const DEFAULT_DESCRIPTION_SELECTOR: &str = "div.menu-card-desc";

/// Output format of the comparison report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON of the whole run
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReconcileError::InvalidConfig(format!(
                "unknown report format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Selectors used to locate menu items in the web page
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// `id` attributes of the sections holding burger cards
    pub section_ids: Vec<String>,
    /// Item block selector, evaluated inside each section
    pub card_selector: String,
    /// Plain title element
    pub title_selector: String,
    /// Title wrapper, used when the plain title element is missing
    pub title_wrapper_selector: String,
    /// Description element
    pub description_selector: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            section_ids: DEFAULT_SECTION_IDS.iter().map(|s| s.to_string()).collect(),
            card_selector: DEFAULT_CARD_SELECTOR.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            title_wrapper_selector: DEFAULT_TITLE_WRAPPER_SELECTOR.to_string(),
            description_selector: DEFAULT_DESCRIPTION_SELECTOR.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Comma-separated section selector, e.g. `section#hamburguesas, section#chuletas`
    pub fn section_selector(&self) -> String {
        self.section_ids
            .iter()
            .map(|id| format!("section#{id}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Transcript line heuristics
#[derive(Debug, Clone)]
pub struct TranscriptConfig {
    /// Drop a repeated all-caps item name in front of the ingredients
    pub strip_leading_caps: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            strip_leading_caps: true,
        }
    }
}

/// Configuration structure for a reconciliation run
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Web menu document
    pub index_path: PathBuf,
    /// OCR transcript of the printed menu
    pub transcript_path: PathBuf,
    pub report_format: ReportFormat,
    pub extractor: ExtractorConfig,
    pub transcript: TranscriptConfig,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            transcript_path: PathBuf::from(DEFAULT_TRANSCRIPT_PATH),
            report_format: ReportFormat::default(),
            extractor: ExtractorConfig::default(),
            transcript: TranscriptConfig::default(),
        }
    }
}
