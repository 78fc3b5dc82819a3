// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread::JoinHandle,
};

use eframe::egui;

use crate::{
    browse::{CardView, Facets},
    card::Card,
    config::state::AppState,
    runner::RunSummary,
    store,
};

use super::{components, images::ImageCache};

pub type PipelineJob = JoinHandle<Result<RunSummary, String>>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "TCG Pocket Card Browser",
        options,
        Box::new(|cc| {
            // http:// and https:// image URIs for cards without a local picture
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default())))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical dataset, read-only while browsing
    pub cards: Vec<Card>,
    pub facets: Facets,
    pub view: CardView,

    // status/progress (pipeline thread writes here)
    pub status: Arc<Mutex<String>>,
    pub job: Option<PipelineJob>,

    pub images: ImageCache,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            cards: Vec::new(),
            facets: Facets::default(),
            view: CardView::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            job: None,
            images: ImageCache::default(),
        };
        app.reload();
        logf!("Init: cards={}, data={}", app.cards.len(), app.state.browser.data.display());
        app
    }

    /// (Re)read the canonical dataset from disk and rebuild facets + view.
    pub fn reload(&mut self) {
        let path = self.state.browser.data.clone();
        match store::load_cards(&path) {
            Ok(cards) => {
                logf!("Data: Loaded {} cards from {}", cards.len(), path.display());
                self.status(if cards.is_empty() {
                    format!("No cards found in {}", path.display())
                } else {
                    s!("Loaded local data")
                });
                self.set_cards(cards);
            }
            Err(e) => {
                loge!("Data: {e}");
                self.status(format!("Error: {e}"));
                self.set_cards(Vec::new());
            }
        }
    }

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.facets = Facets::from_cards(&cards);
        self.cards = cards;
        self.images.clear();
        self.state.gui.selected = None;
        self.rebuild_view();
    }

    /// Re-apply the sidebar filter.
    pub fn rebuild_view(&mut self) {
        self.view = CardView::build(&self.cards, &self.state.gui.filter);
        if let Some(sel) = self.state.gui.selected {
            if !self.view.row_ix.contains(&sel) {
                self.state.gui.selected = None;
            }
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.state.gui.selected.and_then(|ix| self.cards.get(ix))
    }

    #[inline]
    pub fn running(&self) -> bool { self.job.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll_pipeline(self, ctx);

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            components::action_bar::draw(ui, self);
        });

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::SidePanel::right("detail")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                components::card_detail::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(self.view.caption());
            ui.separator();
            components::card_table::draw(ui, self);
        });
    }
}
