// src/gui/components/card_detail.rs
//
// Right panel: picture and metadata of the selected card.
// Local `<id>.png` first, then the card's image URL loaded over HTTP.

use eframe::egui::{self, load::SizedTexture};

use crate::browse::{card_image, meta_line, CardImage};
use crate::gui::app::App;

const IMAGE_MAX_W: f32 = 280.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(card) = app.selected_card().cloned() else {
        ui.weak("Select a card to see it here");
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("detail_scroll")
        .show(ui, |ui| {
            match card_image(&card, &app.state.browser.images_dir) {
                CardImage::Local(path) => {
                    let ctx = ui.ctx().clone();
                    match app.images.get_or_load(&ctx, &card.id, &path) {
                        Some(tex) => {
                            ui.add(egui::Image::from_texture(SizedTexture::from_handle(tex))
                                .max_width(IMAGE_MAX_W));
                        }
                        None => { ui.weak("Image could not be decoded"); }
                    }
                }
                remote @ CardImage::Remote(_) => {
                    if let Some(uri) = remote.uri() {
                        ui.add(egui::Image::from_uri(uri.to_owned())
                            .max_width(IMAGE_MAX_W)
                            .show_loading_spinner(true));
                        ui.hyperlink_to("Open card image", uri);
                    }
                }
                CardImage::Missing => {
                    ui.weak("No image available");
                }
            }

            ui.add_space(6.0);
            ui.label(egui::RichText::new(card.name.as_deref().unwrap_or("Unknown")).strong().size(16.0));
            ui.label(&card.id);
            ui.add(egui::Label::new(egui::RichText::new(meta_line(&card)).small()).wrap());
        });
}
