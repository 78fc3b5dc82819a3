// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Which part of the pipeline to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Normalize, save, repair packs, save again.
    Full,
    /// Normalize and save; no catalog lookups.
    NormalizeOnly,
    /// Load an already normalized dataset and only repair packs.
    ResolveOnly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub base_url: String,
    pub timeout: Duration,
    pub pause: Duration,
    pub mode: RunMode,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_OUTPUT_FILE),
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            mode: RunMode::Full,
        }
    }
}

impl PipelineOptions {
    /// Where the repair pass reads from: the fresh output in `Full`,
    /// the input file in `ResolveOnly`.
    pub fn resolve_source(&self) -> &PathBuf {
        match self.mode {
            RunMode::ResolveOnly => &self.input,
            RunMode::Full | RunMode::NormalizeOnly => &self.output,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Canonical dataset shown by the browser.
    pub data: PathBuf,
    /// Directory holding `<id>.png` card images.
    pub images_dir: PathBuf,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_OUTPUT_FILE),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }
}
