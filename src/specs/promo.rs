// src/specs/promo.rs
//
// Promo card page: `<div class="card-prints-current">` holds the set name
// and how the card is obtained ("Shop", "Wonder Pick", ...).

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::Mismatch;
use crate::core::html::{first_text_stripped, selector};

static PRINTS: LazyLock<Selector> = LazyLock::new(|| selector("div.card-prints-current"));

// Leftmost match wins; at the same position the first listed phrase wins.
static CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Shop|Campaign|Missions|Premium Missions|Promo pack|Wonder Pick)")
        .expect("static regex")
});

/// Distribution category of a promo card, e.g. `"Shop"` or `"Promo pack"`.
pub fn parse_category(html: &str) -> Result<String, Mismatch> {
    let doc = Html::parse_document(html);
    let text = first_text_stripped(&doc, &PRINTS).ok_or("card-prints-current block missing")?;
    CATEGORY
        .find(&text)
        .map(|m| s!(m.as_str()))
        .ok_or("no known pack category in card-prints-current")
}
