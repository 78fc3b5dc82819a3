// src/browse.rs
//
// Read-only browsing model over the canonical dataset.
//
// - CardFilter: sidebar filter values and the per-card predicate.
// - Facets: the choices offered for the set filters.
// - CardView: indexes of the cards that pass the filter (no copies).
// - CardImage: where a card's picture comes from.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::card::Card;
use crate::config::consts::YES;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFilter {
    /// Case-insensitive substring of the card name. Empty = off.
    pub name_query: String,
    pub types: BTreeSet<String>,
    pub packs: BTreeSet<String>,
    pub rarities: BTreeSet<String>,
    pub only_ex: bool,
    pub only_fullart: bool,
}

impl CardFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, card: &Card) -> bool {
        // Used as typed: surrounding spaces are part of the query.
        if !self.name_query.is_empty() {
            let name = card.name.as_deref().unwrap_or_default().to_lowercase();
            if !name.contains(&self.name_query.to_lowercase()) {
                return false;
            }
        }
        in_set(&self.types, &card.kind)
            && in_set(&self.packs, &card.pack)
            && in_set(&self.rarities, &card.rarity)
            && (!self.only_ex || is_yes(&card.ex))
            && (!self.only_fullart || is_yes(&card.fullart))
    }
}

// An empty selection lets everything through.
fn in_set(sel: &BTreeSet<String>, value: &Option<String>) -> bool {
    sel.is_empty() || value.as_ref().is_some_and(|v| sel.contains(v))
}

fn is_yes(v: &Option<String>) -> bool {
    v.as_deref() == Some(YES)
}

/// Sorted, distinct, non-empty values per filterable field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facets {
    pub types: Vec<String>,
    pub packs: Vec<String>,
    pub rarities: Vec<String>,
}

impl Facets {
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            types: distinct(cards, |c| c.kind.as_deref()),
            packs: distinct(cards, |c| c.pack.as_deref()),
            rarities: distinct(cards, |c| c.rarity.as_deref()),
        }
    }
}

fn distinct<F>(cards: &[Card], field: F) -> Vec<String>
where
    F: Fn(&Card) -> Option<&str>,
{
    cards.iter()
        .filter_map(field)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Filtered projection of the dataset, kept as row indexes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardView {
    pub row_ix: Vec<usize>,
    pub total: usize,
}

impl CardView {
    pub fn build(cards: &[Card], filter: &CardFilter) -> Self {
        let row_ix = cards.iter()
            .enumerate()
            .filter(|(_, c)| filter.matches(c))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, total: cards.len() }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn card<'a>(&self, cards: &'a [Card], i: usize) -> Option<&'a Card> {
        self.row_ix.get(i).and_then(|&ix| cards.get(ix))
    }

    pub fn caption(&self) -> String {
        format!("Showing {} / {} cards", self.len(), self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardImage {
    Local(PathBuf),
    Remote(String),
    Missing,
}

impl CardImage {
    /// URI for egui's image loaders. Local files go through the texture
    /// cache instead, so only remote images have one.
    pub fn uri(&self) -> Option<&str> {
        match self {
            CardImage::Remote(url) => Some(url),
            CardImage::Local(_) | CardImage::Missing => None,
        }
    }
}

/// `<images_dir>/<id>.png` if present, else the card's image URL.
pub fn card_image(card: &Card, images_dir: &Path) -> CardImage {
    let local = images_dir.join(format!("{}.png", card.id));
    if local.is_file() {
        return CardImage::Local(local);
    }
    match card.image.as_deref() {
        Some(url) if !url.is_empty() => CardImage::Remote(s!(url)),
        _ => CardImage::Missing,
    }
}

/// One-line summary under a card: "Grass · Rarity: ◊ · Pack: Shop · HP: 60 · EX".
pub fn meta_line(card: &Card) -> String {
    let mut meta: Vec<String> = Vec::new();
    let mut push = |prefix: &str, v: &Option<String>| {
        if let Some(v) = v.as_deref().filter(|v| !v.is_empty()) {
            meta.push(join!(prefix, v));
        }
    };
    push("", &card.kind);
    push("Rarity: ", &card.rarity);
    push("Pack: ", &card.pack);
    push("HP: ", &card.health);
    push("Artist: ", &card.artist);
    if is_yes(&card.ex) { meta.push(s!("EX")); }
    if is_yes(&card.fullart) { meta.push(s!("Full Art")); }
    meta.join(" · ")
}
