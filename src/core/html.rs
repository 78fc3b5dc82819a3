// src/core/html.rs
//
// Small helpers over `scraper` for pulling visible text out of catalog pages.

use scraper::{ElementRef, Html, Selector};

/// Parse a static CSS selector. Only ever called with literals.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Text of the first element matching `sel`, with each text node trimmed
/// and the pieces glued together without separators.
pub fn first_text_stripped(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel).next().map(text_stripped)
}

/// Raw text content of the first element matching `sel`.
pub fn first_text(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel).next().map(|el| el.text().collect())
}

pub fn text_stripped(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
