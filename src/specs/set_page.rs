// src/specs/set_page.rs
//
// Set listing page: the document title starts with the set name,
// followed by " (<code>)" and site decoration.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::Mismatch;
use crate::core::html::{first_text, selector};
use crate::core::sanitize::{before_paren, normalize_ws};

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));

/// Set name taken from `<title>`, cut before the first `" ("`.
pub fn parse_set_name(html: &str) -> Result<String, Mismatch> {
    let doc = Html::parse_document(html);
    let title = first_text(&doc, &TITLE).ok_or("page has no <title>")?;
    let title = normalize_ws(&title);
    Ok(s!(before_paren(&title)))
}
