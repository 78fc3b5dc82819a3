// tests/catalog_lookup.rs
//
// Catalog adapter against canned pages; no network.

use std::cell::RefCell;
use std::collections::HashMap;

use tcgp_cards::core::net::{Fetch, FetchError};
use tcgp_cards::lookup::{CatalogLookup, LimitlessCatalog, PackLookup};
use tcgp_cards::registry::SetRegistry;
use tcgp_cards::specs::{promo, set_page};

const BASE: &str = "https://cards.test/cards/";

/// Serves fixture bodies by URL; anything else is a 404.
#[derive(Default)]
struct FakeSite {
    pages: HashMap<String, String>,
    hits: RefCell<Vec<String>>,
}

impl FakeSite {
    fn page(mut self, path: &str, body: &str) -> Self {
        self.pages.insert(format!("{BASE}{path}"), body.to_string());
        self
    }
    fn hits(&self) -> Vec<String> {
        self.hits.borrow().clone()
    }
}

impl Fetch for &FakeSite {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.hits.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

fn promo_page(prints: &str) -> String {
    format!(
        r#"<html><head><title>Pikachu - P-A 1</title></head><body>
        <div class="card-page">
          <div class="card-prints-current">
            <div class="prints-current-details">
              <span class="text-lg">Promo-A</span>
              <span>{prints}</span>
            </div>
          </div>
        </div></body></html>"#
    )
}

fn set_listing(title: &str) -> String {
    format!("<html><head><title>{title}</title></head><body><div class=\"set\"></div></body></html>")
}

#[test]
fn promo_category_extraction() {
    assert_eq!(promo::parse_category(&promo_page("#1 · Wonder Pick")).unwrap(), "Wonder Pick");
    assert_eq!(promo::parse_category(&promo_page("#7 · Premium Missions")).unwrap(), "Premium Missions");
    assert_eq!(promo::parse_category(&promo_page("#9 · Promo pack Vol. 1")).unwrap(), "Promo pack");
    assert!(promo::parse_category(&promo_page("#3 · Tournament")).is_err());
    assert!(promo::parse_category("<html><body><p>gone</p></body></html>").is_err());
}

#[test]
fn set_title_extraction() {
    let page = set_listing("Mythical Island (A1a) | Pokémon TCG Pocket");
    assert_eq!(set_page::parse_set_name(&page).unwrap(), "Mythical Island");
    assert!(set_page::parse_set_name("<html><body></body></html>").is_err());
}

#[test]
fn promo_lookup_uses_bare_number() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default().page("P-A/12", &promo_page("#12 · Shop"));
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    assert_eq!(catalog.promo_url("pa-012"), format!("{BASE}P-A/12"));
    assert_eq!(catalog.lookup_pack("pa-012"), PackLookup::Resolved("Shop".into()));
    assert_eq!(site.hits(), vec![format!("{BASE}P-A/12")]);
}

#[test]
fn promo_pack_category_is_left_to_the_caller() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default().page("P-A/9", &promo_page("#9 · Promo pack"));
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    assert_eq!(catalog.lookup_pack("pa-009"), PackLookup::PromoVolume);
}

#[test]
fn promo_page_without_category_is_a_mismatch() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default()
        .page("P-A/3", &promo_page("#3 · Tournament"))
        .page("P-A/4", "<html><title>x</title><body>no prints</body></html>");
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    assert!(matches!(catalog.lookup_pack("pa-003"), PackLookup::StructuralMismatch(_)));
    assert!(matches!(catalog.lookup_pack("pa-004"), PackLookup::StructuralMismatch(_)));
}

#[test]
fn single_pack_set_uses_title() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default().page("A1a", &set_listing("Mythical Island (A1a) | Limitless"));
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    assert_eq!(catalog.lookup_pack("a1a-070"), PackLookup::Resolved("Mythical Island".into()));
}

#[test]
fn multi_pack_set_is_shared() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default().page("A1?pack=0", &set_listing("Genetic Apex (A1) | Limitless"));
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    assert_eq!(catalog.lookup_pack("a1-283"), PackLookup::Resolved("Shared(Genetic Apex)".into()));
}

#[test]
fn set_page_fetched_once_per_set() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default().page("A2a", &set_listing("Triumphant Light (A2a)"));
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    for id in ["a2a-001", "a2a-050", "a2a-096"] {
        assert_eq!(catalog.lookup_pack(id), PackLookup::Resolved("Triumphant Light".into()));
    }
    assert_eq!(site.hits().len(), 1);
}

#[test]
fn page_without_title_is_a_mismatch() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default().page("A3b", "<html><body>maintenance</body></html>");
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    assert!(matches!(catalog.lookup_pack("a3b-001"), PackLookup::StructuralMismatch(_)));
}

#[test]
fn http_failure_is_transient() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default();
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    match catalog.lookup_pack("a4-010") {
        PackLookup::TransientError(why) => assert!(why.contains("404"), "{why}"),
        other => panic!("expected TransientError, got {other:?}"),
    }
    match catalog.lookup_pack("pa-001") {
        PackLookup::TransientError(_) => {}
        other => panic!("expected TransientError, got {other:?}"),
    }
}

#[test]
fn unregistered_set_code_is_a_mismatch_without_fetching() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default();
    let catalog = LimitlessCatalog::new(&site, &reg, BASE);

    assert!(matches!(catalog.lookup_pack("zz-001"), PackLookup::StructuralMismatch(_)));
    assert!(site.hits().is_empty());
}

#[test]
fn base_url_gets_trailing_slash() {
    let reg = SetRegistry::builtin();
    let site = FakeSite::default();
    let catalog = LimitlessCatalog::new(&site, &reg, "https://cards.test/cards");
    assert_eq!(catalog.set_url("A4"), "https://cards.test/cards/A4");
}
