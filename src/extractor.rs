//! # Menu Extractor
//!
//! Pulls burger records out of the web menu with CSS selector queries over
//! the parsed document tree: section -> item cards -> title/description.

use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

use crate::config::ExtractorConfig;
use crate::errors::ReconcileError;
use crate::menu_model::MenuItem;

/// Menu item extractor with precompiled selectors
pub struct MenuExtractor {
    sections: Selector,
    card: Selector,
    title: Selector,
    title_wrapper: Selector,
    description: Selector,
}

impl MenuExtractor {
    /// Create an extractor with the default selectors
    pub fn new() -> Result<Self, ReconcileError> {
        Self::with_config(&ExtractorConfig::default())
    }

    /// Create an extractor from custom section ids and selectors
    pub fn with_config(config: &ExtractorConfig) -> Result<Self, ReconcileError> {
        if config.section_ids.is_empty() {
            return Err(ReconcileError::InvalidConfig(
                "at least one menu section id is required".to_string(),
            ));
        }

        debug!("Using section selector: {}", config.section_selector());
        Ok(Self {
            sections: parse_selector(&config.section_selector())?,
            card: parse_selector(&config.card_selector)?,
            title: parse_selector(&config.title_selector)?,
            title_wrapper: parse_selector(&config.title_wrapper_selector)?,
            description: parse_selector(&config.description_selector)?,
        })
    }

    /// Extract comparable menu items from an HTML document, in document order
    ///
    /// Cards without a title are skipped; items with an empty name or an
    /// empty description are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use menu_reconcile::extractor::MenuExtractor;
    ///
    /// let html = r#"<section id="hamburguesas">
    ///   <article class="card menu-card">
    ///     <span class="menu-card-title">Clásica</span>
    ///     <div class="menu-card-desc">Carne, queso y <b>bacon</b>.</div>
    ///   </article>
    /// </section>"#;
    ///
    /// let items = MenuExtractor::new()?.extract(html);
    /// assert_eq!(items.len(), 1);
    /// assert_eq!(items[0].name, "Clásica");
    /// assert_eq!(items[0].raw_description, "Carne, queso y bacon.");
    /// # Ok::<(), menu_reconcile::errors::ReconcileError>(())
    /// ```
    pub fn extract(&self, html: &str) -> Vec<MenuItem> {
        let document = Html::parse_document(html);
        let mut items = Vec::new();

        for section in document.select(&self.sections) {
            for card in section.select(&self.card) {
                let Some(name) = self.card_title(card) else {
                    debug!("Skipping menu card without title");
                    continue;
                };

                let raw_description = card
                    .select(&self.description)
                    .next()
                    .map(element_text)
                    .unwrap_or_default();

                let item = MenuItem::new(name, raw_description);
                if item.is_comparable() {
                    items.push(item);
                } else {
                    debug!("Dropping incomplete menu item: {:?}", item);
                }
            }
        }

        info!("Extracted {} menu items from web document", items.len());
        items
    }

    fn card_title(&self, card: ElementRef<'_>) -> Option<String> {
        card.select(&self.title)
            .next()
            .or_else(|| card.select(&self.title_wrapper).next())
            .map(element_text)
    }
}

/// Text content of an element, whitespace collapsed and trimmed
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

fn parse_selector(selector: &str) -> Result<Selector, ReconcileError> {
    Selector::parse(selector).map_err(|e| {
        ReconcileError::InvalidConfig(format!("invalid selector '{selector}': {e:?}"))
    })
}
