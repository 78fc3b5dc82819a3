// src/lookup.rs
//! Catalog lookup: canonical card id → distribution pack label.
//!
//! Promo cards have one page each and name their pack category directly.
//! Every other set is looked up via its set page, whose title names the set;
//! sets with several booster packs get a `Shared(<set>)` label because the
//! card may come from any of them.
//!
//! Nothing here returns an error: transport and page-shape problems are
//! logged and folded into [`PackLookup`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::card::set_code_of;
use crate::config::consts::{PROMO_ENDPOINT, PROMO_PACK_CATEGORY, PROMO_SET};
use crate::core::net::Fetch;
use crate::core::sanitize::bare_card_number;
use crate::registry::SetRegistry;
use crate::specs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackLookup {
    /// A usable pack label.
    Resolved(String),
    /// Generic "Promo pack" category; the caller decides the volume.
    PromoVolume,
    /// Network failure, timeout or non-2xx status.
    TransientError(String),
    /// The page was fetched but didn't have the expected content.
    StructuralMismatch(String),
}

pub trait CatalogLookup {
    fn lookup_pack(&self, card_id: &str) -> PackLookup;
}

/// Lookups against pocket.limitlesstcg.com (or a mirror with the same layout).
///
/// Set pages are fetched once per run; the resolved set label is reused for
/// every later card of that set.
pub struct LimitlessCatalog<'r, F> {
    fetcher: F,
    registry: &'r SetRegistry,
    base_url: String,
    set_labels: RefCell<HashMap<String, String>>,
}

impl<'r, F: Fetch> LimitlessCatalog<'r, F> {
    pub fn new(fetcher: F, registry: &'r SetRegistry, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') { base_url.push('/'); }
        Self { fetcher, registry, base_url, set_labels: RefCell::new(HashMap::new()) }
    }

    pub fn promo_url(&self, card_id: &str) -> String {
        let number = bare_card_number(card_id, PROMO_SET);
        join!(&self.base_url, PROMO_ENDPOINT, "/", &number)
    }

    pub fn set_url(&self, endpoint: &str) -> String {
        join!(&self.base_url, endpoint)
    }

    fn fetch(&self, url: &str) -> Result<String, PackLookup> {
        self.fetcher.get(url).map_err(|e| {
            loge!("Lookup: {e}");
            PackLookup::TransientError(e.to_string())
        })
    }

    fn lookup_promo(&self, card_id: &str) -> PackLookup {
        let url = self.promo_url(card_id);
        let body = match self.fetch(&url) {
            Ok(b) => b,
            Err(failed) => return failed,
        };
        match specs::promo::parse_category(&body) {
            Ok(cat) if cat == PROMO_PACK_CATEGORY => {
                logd!("Lookup: {card_id} → {cat}");
                PackLookup::PromoVolume
            }
            Ok(cat) => {
                logd!("Lookup: {card_id} → {cat}");
                PackLookup::Resolved(cat)
            }
            Err(why) => {
                loge!("Lookup: {card_id} at {url}: {why}");
                PackLookup::StructuralMismatch(s!(why))
            }
        }
    }

    fn lookup_set(&self, card_id: &str, code: &str) -> PackLookup {
        let Some(info) = self.registry.set(code) else {
            loge!("Lookup: {card_id}: set code {code:?} not in registry");
            return PackLookup::StructuralMismatch(format!("unknown set code {code:?}"));
        };

        if let Some(label) = self.set_labels.borrow().get(code) {
            return PackLookup::Resolved(label.clone());
        }

        let url = self.set_url(info.endpoint);
        let body = match self.fetch(&url) {
            Ok(b) => b,
            Err(failed) => return failed,
        };
        match specs::set_page::parse_set_name(&body) {
            Ok(name) => {
                let label = if info.packs == 1 { name } else { format!("Shared({name})") };
                self.set_labels.borrow_mut().insert(s!(code), label.clone());
                PackLookup::Resolved(label)
            }
            Err(why) => {
                loge!("Lookup: {card_id} at {url}: {why}");
                PackLookup::StructuralMismatch(s!(why))
            }
        }
    }
}

impl<F: Fetch> CatalogLookup for LimitlessCatalog<'_, F> {
    fn lookup_pack(&self, card_id: &str) -> PackLookup {
        let code = set_code_of(card_id);
        if code == PROMO_SET {
            self.lookup_promo(card_id)
        } else {
            self.lookup_set(card_id, &code)
        }
    }
}
