//! # Menu Reconcile
//!
//! Compares the burger menu published on the restaurant's web page with an
//! OCR transcript of the printed menu, and reports naming and ingredient
//! mismatches between the two.

pub mod config;
pub mod differ;
pub mod errors;
pub mod extractor;
pub mod line_matcher;
pub mod loader;
pub mod measurement_patterns;
pub mod menu_model;
pub mod reconcile;
pub mod report;
pub mod text_processing;
pub mod transcript;
