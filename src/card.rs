// src/card.rs
//
// Raw input record and canonical card record.
//
// Raw records come from an external dump, so numeric-looking fields
// (`id`, `hp`) are accepted either as JSON strings or numbers and kept as
// text. Canonical records always serialize every key, absent values as null.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawCard {
    #[serde(default, deserialize_with = "text_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub set_details: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub pack: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub hp: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub fullart: Option<String>,
    #[serde(default)]
    pub ex: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: Option<String>,
    pub rarity: Option<String>,
    pub pack: Option<String>,
    /// Older canonical files may hold a number here; always written as text.
    #[serde(default, deserialize_with = "text_or_number")]
    pub health: Option<String>,
    pub image: Option<String>,
    pub fullart: Option<String>,
    pub ex: Option<String>,
    pub artist: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Card {
    /// Set code part of the id (`"a1"` for `"a1-001"`), lowercased.
    pub fn set_code(&self) -> String {
        set_code_of(&self.id)
    }

    pub fn pack_is(&self, label: &str) -> bool {
        self.pack.as_deref() == Some(label)
    }
}

pub fn set_code_of(id: &str) -> String {
    id.split(crate::config::consts::ID_SEP)
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

fn text_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
