//! # Integration Tests
//!
//! End-to-end runs over a web menu document and an OCR transcript.

use menu_reconcile::config::ReconcilerConfig;
use menu_reconcile::loader::{read_menu_document, read_transcript_optional};
use menu_reconcile::menu_model::ComparisonStatus;
use menu_reconcile::reconcile::reconcile;
use menu_reconcile::report::render_text;
use std::io::Write;
use tempfile::NamedTempFile;

const MENU_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<body>
  <section id="entrantes">
    <article class="card menu-card">
      <span class="menu-card-title">Nachos</span>
      <div class="menu-card-desc">Nachos con queso y guacamole.</div>
    </article>
  </section>
  <section id="hamburguesas" class="menu-section">
    <article class="card menu-card">
      <div class="menu-card-header">
        <span class="menu-card-title">Clásica</span>
        <span class="menu-card-price">11,50 €</span>
      </div>
      <div class="menu-card-desc">Carne, queso, lechuga y tomate.</div>
    </article>
    <article class="card menu-card">
      <span class="menu-card-title-wrapper"><span class="menu-card-title">Bacon Cheese</span></span>
      <div class="menu-card-desc">Carne de vacuno, queso cheddar y bacon.</div>
    </article>
    <article class="card menu-card">
      <span class="menu-card-title">Doble Queso</span>
      <div class="menu-card-desc">200gr. de carne, Double queso</div>
    </article>
    <article class="card menu-card">
      <span class="menu-card-title">Texana</span>
      <div class="menu-card-desc">Carne, salsa barbacoa, aros de cebolla</div>
    </article>
    <article class="card menu-card">
      <span class="menu-card-title">Próximamente</span>
      <div class="menu-card-desc"></div>
    </article>
  </section>
  <section id="chuletas">
    <article class="card menu-card">
      <span class="menu-card-title">Chuletón</span>
      <div class="menu-card-desc">Vaca vieja madurada, patatas.</div>
    </article>
  </section>
</body>
</html>"#;

const TRANSCRIPT: &str = "CARTA
HAMBURGUESAS

CLÁSICA: tomate, lechuga, queso y carne
BACON CHEESE - Carne de vacuno, queso cheddar, bacon, pepinillo
DOBLE QUESO: 200GR. carne, doble queso
CHULETON – vaca vieja madurada y patatas
";

fn run_with_transcript() -> menu_reconcile::menu_model::Reconciliation {
    reconcile(MENU_HTML, Some(TRANSCRIPT), &ReconcilerConfig::default()).unwrap()
}

fn result_for<'a>(
    run: &'a menu_reconcile::menu_model::Reconciliation,
    name: &str,
) -> &'a menu_reconcile::menu_model::ComparisonResult {
    run.results
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no result for {name}"))
}

#[test]
fn test_items_extracted_from_known_sections_only() {
    let run = run_with_transcript();
    let names: Vec<&str> = run.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Clásica", "Bacon Cheese", "Doble Queso", "Texana", "Chuletón"]
    );
    assert_eq!(run.results.len(), run.items.len());
}

#[test]
fn test_same_ingredients_in_different_order_is_ok() {
    let run = run_with_transcript();
    let result = result_for(&run, "Clásica");
    assert_eq!(result.status, ComparisonStatus::Ok);
    assert_eq!(
        result.transcript_tokens.as_deref(),
        Some(&["tomate", "lechuga", "queso", "carne"].map(String::from)[..])
    );
}

#[test]
fn test_extra_transcript_ingredient_reported() {
    let run = run_with_transcript();
    let result = result_for(&run, "Bacon Cheese");
    assert_eq!(result.status, ComparisonStatus::Differences);
    assert_eq!(
        result.web_tokens,
        vec!["carne vacuno", "queso cheddar", "bacon"]
    );
    assert!(result.only_in_web.is_empty());
    assert_eq!(result.only_in_transcript, vec!["pepinillo"]);
}

#[test]
fn test_weights_and_double_spelling_unified() {
    let run = run_with_transcript();
    let result = result_for(&run, "Doble Queso");
    assert_eq!(result.web_tokens, vec!["200gr. carne", "doble queso"]);
    assert_eq!(result.status, ComparisonStatus::Ok);
}

#[test]
fn test_item_missing_from_transcript() {
    let run = run_with_transcript();
    let result = result_for(&run, "Texana");
    assert_eq!(result.status, ComparisonStatus::NotFoundInTranscript);
    assert!(result.transcript_tokens.is_none());
    assert!(result.only_in_web.is_empty());
    assert!(result.only_in_transcript.is_empty());
}

#[test]
fn test_accents_ignored_when_matching() {
    let run = run_with_transcript();
    let result = result_for(&run, "Chuletón");
    assert_eq!(
        result.transcript_line.as_deref(),
        Some("CHULETON – vaca vieja madurada y patatas")
    );
    assert_eq!(result.status, ComparisonStatus::Ok);
}

#[test]
fn test_run_from_files() {
    let mut html_file = NamedTempFile::new().unwrap();
    html_file.write_all(MENU_HTML.as_bytes()).unwrap();
    let mut transcript_file = NamedTempFile::new().unwrap();
    transcript_file.write_all(TRANSCRIPT.as_bytes()).unwrap();

    let html = read_menu_document(html_file.path()).unwrap();
    let transcript = read_transcript_optional(transcript_file.path());
    let run = reconcile(&html, transcript.as_deref(), &ReconcilerConfig::default()).unwrap();

    assert!(run.transcript_available);
    assert_eq!(run.count(ComparisonStatus::Ok), 3);
    assert_eq!(run.count(ComparisonStatus::Differences), 1);
    assert_eq!(run.count(ComparisonStatus::NotFoundInTranscript), 1);
}

#[test]
fn test_missing_transcript_reports_every_item_unmatched() {
    let transcript = read_transcript_optional(std::path::Path::new("/nonexistent/carta_texto.txt"));
    let run = reconcile(MENU_HTML, transcript.as_deref(), &ReconcilerConfig::default()).unwrap();

    assert!(!run.transcript_available);
    assert!(run
        .results
        .iter()
        .all(|r| r.status == ComparisonStatus::NotFoundInTranscript));

    let report = render_text(&run, "carta_texto.txt");
    assert!(report.starts_with("=== WEB MENU ITEMS ===\n- Clásica: Carne, queso, lechuga y tomate.\n"));
    assert!(report.contains("create carta_texto.txt"));
    assert!(report.contains("Summary: 0 OK, 0 with differences, 5 not found in transcript"));
}
