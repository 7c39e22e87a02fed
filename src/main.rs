use anyhow::{Context, Result};
use log::info;

use menu_reconcile::config::{ReconcilerConfig, ReportFormat};
use menu_reconcile::loader::{read_menu_document, read_transcript_optional};
use menu_reconcile::reconcile::reconcile;
use menu_reconcile::report::{render_json, render_text};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting menu reconciliation");

    let config = ReconcilerConfig::default();

    let html = read_menu_document(&config.index_path).context("Menu document is required")?;
    let transcript = read_transcript_optional(&config.transcript_path);

    let run = reconcile(&html, transcript.as_deref(), &config)?;

    match config.report_format {
        ReportFormat::Text => {
            let transcript_name = config
                .transcript_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| config.transcript_path.display().to_string());
            print!("{}", render_text(&run, &transcript_name));
        }
        ReportFormat::Json => println!("{}", render_json(&run)?),
    }

    info!("Reconciliation finished");
    Ok(())
}
