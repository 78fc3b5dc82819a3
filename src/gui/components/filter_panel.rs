// src/gui/components/filter_panel.rs
//
// Left sidebar: name search, Type/Pack/Rarity multi-select, EX and Full Art
// toggles. Any change re-filters the table.

use std::collections::BTreeSet;

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    let mut changed = false;
    let filter = &mut app.state.gui.filter;

    ui.label("Search name contains");
    changed |= ui.text_edit_singleline(&mut filter.name_query).changed();

    ui.separator();
    changed |= ui.checkbox(&mut filter.only_ex, "EX only").changed();
    changed |= ui.checkbox(&mut filter.only_fullart, "Full Art only").changed();

    if ui.add_enabled(!filter.is_empty(), egui::Button::new("Clear filters")).clicked() {
        filter.clear();
        changed = true;
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("filters_scroll")
        .show(ui, |ui| {
            let facets = &app.facets;
            let filter = &mut app.state.gui.filter;
            changed |= multiselect(ui, "Type", &facets.types, &mut filter.types);
            changed |= multiselect(ui, "Pack", &facets.packs, &mut filter.packs);
            changed |= multiselect(ui, "Rarity", &facets.rarities, &mut filter.rarities);
        });

    if changed {
        app.rebuild_view();
        logd!("UI: Filter changed → {} / {} cards", app.view.len(), app.view.total);
    }
}

/// One collapsible checkbox list. Returns true if the selection changed.
fn multiselect(ui: &mut egui::Ui, title: &str, options: &[String], sel: &mut BTreeSet<String>) -> bool {
    let mut changed = false;
    let header = if sel.is_empty() { s!(title) } else { format!("{title} ({})", sel.len()) };

    egui::CollapsingHeader::new(header)
        .id_salt(title)
        .default_open(false)
        .show(ui, |ui| {
            for opt in options {
                let mut on = sel.contains(opt);
                if ui.checkbox(&mut on, opt.as_str()).changed() {
                    if on { sel.insert(opt.clone()); } else { sel.remove(opt); }
                    changed = true;
                }
            }
        });
    changed
}
