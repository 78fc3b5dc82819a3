// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a pipeline run.
///
/// Catalog lookups never show up here; they are contained in
/// [`crate::lookup::PackLookup`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("set id not found for set label {label:?}")]
    UnknownSet { label: String },

    #[error("raw card has no {field:?} field")]
    MissingField { field: &'static str },

    #[error("card id {id} produced twice (records {first} and {second})")]
    DuplicateId { id: String, first: usize, second: usize },

    #[error("reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("parsing {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("encoding card data: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
