// src/store.rs
//
// JSON files on disk: the raw input dump and the canonical card dataset.
// The canonical file is always rewritten whole (never appended).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::card::{Card, RawCard};
use crate::error::{PipelineError, Result};

pub fn load_raw(path: &Path) -> Result<Vec<RawCard>> {
    read_json(path)
}

pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    read_json(path)
}

/// Pretty-printed (two-space indent), UTF-8 kept as-is, nulls written.
pub fn to_json(cards: &[Card]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

/// Write the dataset to `path`, creating parent directories as needed.
/// Goes through a sibling temp file so a crash never leaves half a file.
pub fn save_cards(path: &Path, cards: &[Card]) -> Result<PathBuf> {
    let json = to_json(cards)?;
    let write_err = |source| PipelineError::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    if let Err(e) = write_then_rename(&tmp, path, json.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(path.to_path_buf())
}

fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    {
        let mut f = fs::File::create(tmp)?;
        f.write_all(bytes)?;
        f.flush()?;
    }
    fs::rename(tmp, path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(|source| PipelineError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text)
        .map_err(|source| PipelineError::Parse { path: path.to_path_buf(), source })
}
