// src/config/state.rs
use super::options::{BrowserOptions, PipelineOptions};
use crate::browse::CardFilter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Sidebar filter values
    pub filter: CardFilter,

    /// Row in the canonical dataset shown in the detail panel
    pub selected: Option<usize>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filter: CardFilter::default(),
            selected: None,
            window_w: 1200,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub browser: BrowserOptions,
    pub pipeline: PipelineOptions,
    pub gui: GuiState,
}
