// src/resolve.rs
//
// Repair pass for cards whose pack is the "Every" placeholder.
//
// Lookups run strictly in dataset order: the promo volume numbering
// depends on it.

use std::thread;
use std::time::Duration;

use crate::card::Card;
use crate::config::consts::{PLACEHOLDER_PACK, PROMO_VOLUME_SIZE};
use crate::lookup::{CatalogLookup, PackLookup};
use crate::progress::Progress;

/// Rolling promo volume position. Every `PROMO_VOLUME_SIZE` promo-pack
/// cards start a new volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeCounter {
    volume: u32,
    in_volume: u32,
}

impl Default for VolumeCounter {
    fn default() -> Self {
        Self { volume: 1, in_volume: 0 }
    }
}

impl VolumeCounter {
    /// Count one more promo-pack card and return its volume number.
    pub fn advance(&mut self) -> u32 {
        if self.in_volume == PROMO_VOLUME_SIZE {
            self.volume += 1;
            self.in_volume = 0;
        }
        self.in_volume += 1;
        self.volume
    }

    pub fn volume(&self) -> u32 { self.volume }

    pub fn label(volume: u32) -> String {
        format!("Promo V{volume}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackChange {
    pub id: String,
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub changes: Vec<PackChange>,
    /// Ids still carrying the placeholder; need a manual fix.
    pub unresolved: Vec<String>,
}

impl ResolveReport {
    pub fn resolved_count(&self) -> usize { self.changes.len() }
    pub fn all_resolved(&self) -> bool { self.unresolved.is_empty() }
}

/// Look up every placeholder pack and write back what the catalog knows.
///
/// Only `pack` of placeholder cards is ever touched. Failed lookups, and
/// lookups that come back with the placeholder itself, leave the card as is
/// and land in `unresolved`.
pub fn resolve_ambiguous(
    cards: &mut [Card],
    catalog: &dyn CatalogLookup,
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> ResolveReport {
    let pending: Vec<usize> = cards.iter()
        .enumerate()
        .filter(|(_, c)| c.pack_is(PLACEHOLDER_PACK))
        .map(|(i, _)| i)
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pending.len());
    }
    logf!("Resolve: {} of {} cards carry the placeholder pack", pending.len(), cards.len());

    let mut volumes = VolumeCounter::default();
    let mut report = ResolveReport::default();

    for (n, &i) in pending.iter().enumerate() {
        if n > 0 && !pause.is_zero() {
            thread::sleep(pause);
        }

        let card = &mut cards[i];
        let label = match catalog.lookup_pack(&card.id) {
            PackLookup::Resolved(label) => Some(label),
            PackLookup::PromoVolume => Some(VolumeCounter::label(volumes.advance())),
            PackLookup::TransientError(why) | PackLookup::StructuralMismatch(why) => {
                logd!("Resolve: {} unresolved ({why})", card.id);
                None
            }
        };

        match label {
            Some(to) if !card.pack_is(&to) => {
                let from = card.pack.replace(to.clone()).unwrap_or_default();
                logf!("Resolve: {}: {from} → {to}", card.id);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Updated {}: {from} → {to}", card.id));
                    p.item_done(&card.id);
                }
                report.changes.push(PackChange { id: card.id.clone(), from, to });
            }
            _ => {
                logw!("Resolve: {} keeps placeholder pack", card.id);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&card.id);
                }
                report.unresolved.push(card.id.clone());
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::VolumeCounter;

    #[test]
    fn volumes_roll_every_five() {
        let mut v = VolumeCounter::default();
        let got: Vec<u32> = (0..11).map(|_| v.advance()).collect();
        assert_eq!(got, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3]);
    }
}
