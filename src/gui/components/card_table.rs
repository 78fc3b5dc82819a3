// src/gui/components/card_table.rs
//
// Filtered card list. Purely a view: reads app.view and sets the
// selected card on click.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::card::Card;
use crate::gui::app::App;

const HEADERS: &[&str] = &["Id", "Name", "Type", "Rarity", "Pack", "HP", "EX", "Full Art", "Artist"];
const WIDTHS: &[f32] = &[70.0, 160.0, 80.0, 70.0, 150.0, 40.0, 36.0, 60.0, 140.0];
// Columns drawn centered
const CENTERED: &[usize] = &[3, 5, 6, 7];

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or_default()
}

fn cell(card: &Card, col: usize) -> &str {
    match col {
        0 => &card.id,
        1 => opt(&card.name),
        2 => opt(&card.kind),
        3 => opt(&card.rarity),
        4 => opt(&card.pack),
        5 => opt(&card.health),
        6 => opt(&card.ex),
        7 => opt(&card.fullart),
        _ => opt(&card.artist),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.view.is_empty() {
        ui.label(if app.cards.is_empty() { "No cards loaded" } else { "No card matches the filters" });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut clicked: Option<usize> = None;
    let selected = app.state.gui.selected;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .min_scrolled_height(0.0)
        .id_salt("card_table");
    for (i, &w) in WIDTHS.iter().enumerate() {
        let col = Column::initial(w).resizable(true).clip(true).at_least(24.0);
        table = table.column(if i + 1 == WIDTHS.len() { col.resizable(false) } else { col });
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    let label = egui::Label::new(RichText::new(*h).strong()).selectable(false);
                    if CENTERED.contains(&ci) {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    } else {
                        ui.add(label);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.view.len(), |mut row| {
                let Some(&src_ix) = app.view.row_ix.get(row.index()) else { return };
                let Some(card) = app.cards.get(src_ix) else { return };
                row.set_selected(selected == Some(src_ix));

                for ci in 0..HEADERS.len() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        let text = egui::Label::new(cell(card, ci)).selectable(false);
                        if CENTERED.contains(&ci) {
                            ui.centered_and_justified(|ui| { ui.add(text); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(text); });
                        }
                    });
                }
                if row.response().clicked() {
                    clicked = Some(src_ix);
                }
            });
        });

    if let Some(ix) = clicked {
        logd!("UI: Selected card {}", app.cards[ix].id);
        app.state.gui.selected = Some(ix);
    }
}
