// src/normalize.rs
//
// Raw record → canonical card. Pure; no I/O.

use std::collections::HashMap;

use crate::card::{Card, RawCard};
use crate::config::consts::*;
use crate::error::{PipelineError, Result};
use crate::registry::SetRegistry;

/// `<set-code>-<sequence>`, sequence left-padded with zeros to width 3.
///
/// The raw set label is trimmed at both ends before the registry lookup;
/// everything else (case, interior spacing) must match exactly.
pub fn resolve_id(raw: &RawCard, registry: &SetRegistry) -> Result<String> {
    let seq = raw.id.as_deref()
        .ok_or(PipelineError::MissingField { field: "id" })?;
    let label = raw.set_details.as_deref()
        .ok_or(PipelineError::MissingField { field: "set_details" })?;

    let code = registry.code_for_label(label.trim())
        .ok_or_else(|| PipelineError::UnknownSet { label: s!(label) })?;

    Ok(format!("{code}{ID_SEP}{seq:0>ID_WIDTH$}"))
}

pub fn normalize(raw: &RawCard, registry: &SetRegistry) -> Result<Card> {
    let id = resolve_id(raw, registry)?;
    let rarity = canonical_rarity(&id, raw.rarity.as_deref());
    let pack = raw.pack.as_deref().map(strip_pack_suffix);

    Ok(Card {
        id,
        name: raw.name.clone(),
        rarity,
        pack,
        health: raw.hp.clone(),
        image: raw.image.clone(),
        fullart: raw.fullart.clone(),
        ex: raw.ex.clone(),
        artist: raw.artist.clone(),
        kind: raw.kind.clone(),
    })
}

/// Normalize a whole dataset in input order.
/// Stops at the first bad record; rejects duplicate ids.
pub fn normalize_all(raws: &[RawCard], registry: &SetRegistry) -> Result<Vec<Card>> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(raws.len());
    let mut cards = Vec::with_capacity(raws.len());

    for (i, raw) in raws.iter().enumerate() {
        let card = normalize(raw, registry)?;
        if let Some(&first) = seen.get(&card.id) {
            return Err(PipelineError::DuplicateId { id: card.id, first, second: i });
        }
        seen.insert(card.id.clone(), i);
        cards.push(card);
    }
    Ok(cards)
}

/// Crown Rare becomes the crown symbol; promo cards are always "Promo".
fn canonical_rarity(id: &str, raw: Option<&str>) -> Option<String> {
    if crate::card::set_code_of(id) == PROMO_SET {
        return Some(s!(PROMO_RARITY));
    }
    match raw {
        Some(CROWN_RARE) => Some(s!(CROWN_SYMBOL)),
        other => other.map(String::from),
    }
}

/// "Shop pack" → "Shop". Only the exact trailing " pack", only once.
pub fn strip_pack_suffix(pack: &str) -> String {
    s!(pack.strip_suffix(PACK_SUFFIX).unwrap_or(pack))
}
