// src/gui/progress.rs
//
// Pipeline progress → shared status line read by the action bar.

use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    resolved: usize,
    unresolved: usize,
    pending: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, resolved: 0, unresolved: 0, pending: 0 }
    }

    fn show(&self, line: String) {
        if let Ok(mut status) = self.status.lock() {
            *status = line;
        }
    }

    fn show_lookup(&self, verb: &str, card_id: &str) {
        let seen = self.resolved + self.unresolved;
        self.show(format!("Looking up packs {seen}/{}: {verb} {card_id}", self.pending));
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.pending = total;
    }

    fn log(&mut self, msg: &str) {
        self.show(s!(msg));
    }

    fn item_done(&mut self, card_id: &str) {
        self.resolved += 1;
        self.show_lookup("fixed", card_id);
    }

    fn item_failed(&mut self, card_id: &str) {
        self.unresolved += 1;
        self.show_lookup("no pack for", card_id);
    }

    fn finish(&mut self) {
        match self.pending {
            0 => self.show(s!("No placeholder packs to correct")),
            n => self.show(format!(
                "Pack lookups done: {} fixed, {} unresolved of {n}",
                self.resolved, self.unresolved
            )),
        }
    }
}
