// tests/normalize_cards.rs
//
// Raw record → canonical card rules, without any I/O.

use tcgp_cards::card::RawCard;
use tcgp_cards::error::PipelineError;
use tcgp_cards::normalize::{normalize, normalize_all, resolve_id};
use tcgp_cards::registry::SetRegistry;
use tcgp_cards::store;

fn raw(json: &str) -> RawCard {
    serde_json::from_str(json).unwrap()
}

fn a1(id: &str) -> RawCard {
    RawCard {
        id: Some(id.into()),
        set_details: Some("Genetic Apex  (A1)".into()),
        ..RawCard::default()
    }
}

#[test]
fn promo_scenario_from_raw_json() {
    let reg = SetRegistry::builtin();
    let r = raw(r#"{"id":"1","set_details":"Promo-A","name":"Pikachu","rarity":"Crown Rare","pack":"Every","hp":"60"}"#);
    let card = normalize(&r, &reg).unwrap();

    assert_eq!(card.id, "pa-001");
    assert_eq!(card.rarity.as_deref(), Some("Promo"));
    assert_eq!(card.pack.as_deref(), Some("Every"));
    assert_eq!(card.name.as_deref(), Some("Pikachu"));
    assert_eq!(card.health.as_deref(), Some("60"));
    assert_eq!(card.image, None);
}

#[test]
fn crown_rare_gets_symbol_outside_promo() {
    let reg = SetRegistry::builtin();
    let mut r = a1("286");
    r.rarity = Some("Crown Rare".into());
    assert_eq!(normalize(&r, &reg).unwrap().rarity.as_deref(), Some("👑"));

    r.rarity = Some("◊◊◊".into());
    assert_eq!(normalize(&r, &reg).unwrap().rarity.as_deref(), Some("◊◊◊"));
}

#[test]
fn promo_rarity_forced_even_without_raw_rarity() {
    let reg = SetRegistry::builtin();
    let r = raw(r#"{"id":"12","set_details":"Promo-A"}"#);
    assert_eq!(normalize(&r, &reg).unwrap().rarity.as_deref(), Some("Promo"));
}

#[test]
fn pack_suffix_rule() {
    let reg = SetRegistry::builtin();
    let mut r = a1("1");

    r.pack = Some("Shop pack".into());
    assert_eq!(normalize(&r, &reg).unwrap().pack.as_deref(), Some("Shop"));

    r.pack = Some("Shop".into());
    assert_eq!(normalize(&r, &reg).unwrap().pack.as_deref(), Some("Shop"));

    r.pack = Some("Pikachu pack ".into());
    assert_eq!(normalize(&r, &reg).unwrap().pack.as_deref(), Some("Pikachu pack "));

    r.pack = None;
    assert_eq!(normalize(&r, &reg).unwrap().pack, None);
}

#[test]
fn display_fields_copied_verbatim() {
    let reg = SetRegistry::builtin();
    let r = raw(r#"{
        "id": "33", "set_details": "Mythical Island  (A1a)", "name": "Mew ex",
        "rarity": "◊◊◊◊", "pack": "Mythical Island pack", "hp": 130,
        "image": "https://img.example/a1a-033.png", "fullart": "No", "ex": "Yes",
        "artist": "PLANETA Mochizuki", "type": "Psychic"
    }"#);
    let card = normalize(&r, &reg).unwrap();

    assert_eq!(card.id, "a1a-033");
    assert_eq!(card.pack.as_deref(), Some("Mythical Island"));
    assert_eq!(card.health.as_deref(), Some("130"));
    assert_eq!(card.image.as_deref(), Some("https://img.example/a1a-033.png"));
    assert_eq!(card.fullart.as_deref(), Some("No"));
    assert_eq!(card.ex.as_deref(), Some("Yes"));
    assert_eq!(card.artist.as_deref(), Some("PLANETA Mochizuki"));
    assert_eq!(card.kind.as_deref(), Some("Psychic"));
}

#[test]
fn unknown_set_is_an_error() {
    let reg = SetRegistry::builtin();
    let r = raw(r#"{"id":"1","set_details":"Base Set"}"#);
    match resolve_id(&r, &reg) {
        Err(PipelineError::UnknownSet { label }) => assert_eq!(label, "Base Set"),
        other => panic!("expected UnknownSet, got {other:?}"),
    }
}

#[test]
fn missing_id_or_set_is_an_error() {
    let reg = SetRegistry::builtin();
    assert!(matches!(
        resolve_id(&raw(r#"{"set_details":"Promo-A"}"#), &reg),
        Err(PipelineError::MissingField { field: "id" })
    ));
    assert!(matches!(
        resolve_id(&raw(r#"{"id":"4"}"#), &reg),
        Err(PipelineError::MissingField { field: "set_details" })
    ));
}

#[test]
fn ids_distinct_across_sets_and_sequences() {
    let reg = SetRegistry::builtin();
    let raws = vec![
        a1("1"),
        a1("2"),
        raw(r#"{"id":"1","set_details":"Mythical Island  (A1a)"}"#),
        raw(r#"{"id":"1","set_details":"Promo-A"}"#),
        raw(r#"{"id":"10","set_details":"Promo-A"}"#),
    ];
    let ids: Vec<String> = normalize_all(&raws, &reg).unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["a1-001", "a1-002", "a1a-001", "pa-001", "pa-010"]);
}

#[test]
fn duplicate_ids_rejected() {
    let reg = SetRegistry::builtin();
    // "7" and "007" pad to the same id
    let raws = vec![a1("7"), a1("8"), a1("007")];
    match normalize_all(&raws, &reg) {
        Err(PipelineError::DuplicateId { id, first, second }) => {
            assert_eq!(id, "a1-007");
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn normalizing_twice_gives_identical_json() {
    let reg = SetRegistry::builtin();
    let raws: Vec<RawCard> = serde_json::from_str(r#"[
        {"id":"1","set_details":"Genetic Apex  (A1)","name":"Bulbasaur","rarity":"◊","pack":"Mewtwo pack","hp":"70","type":"Grass"},
        {"id":"5","set_details":"Promo-A","name":"Poké Ball","rarity":"Crown Rare","pack":"Every"},
        {"id":"1","set_details":"Deluxe Pack: ex","name":"Pikachu ex","pack":"Every","ex":"Yes"}
    ]"#).unwrap();

    let first = store::to_json(&normalize_all(&raws, &reg).unwrap()).unwrap();
    let second = store::to_json(&normalize_all(&raws, &reg).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn canonical_json_shape() {
    let reg = SetRegistry::builtin();
    let raws = vec![raw(r#"{"id":"5","set_details":"Promo-A","name":"Poké Ball"}"#)];
    let json = store::to_json(&normalize_all(&raws, &reg).unwrap()).unwrap();

    // key order, nulls kept, non-ASCII unescaped, two-space indent
    let expected = r#"[
  {
    "id": "pa-005",
    "name": "Poké Ball",
    "rarity": "Promo",
    "pack": null,
    "health": null,
    "image": null,
    "fullart": null,
    "ex": null,
    "artist": null,
    "type": null
  }
]"#;
    assert_eq!(json, expected);
}
