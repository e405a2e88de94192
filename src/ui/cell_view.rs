use eframe::egui;

use crate::grid::Cell;

/// Draws one cell and returns the name picked in its dropdown, if any.
///
/// The empty entry stands for "no selection".
pub(super) fn show(
    ui: &mut egui::Ui,
    cell: &Cell,
    choices: &[String],
    textures: &mut super::TextureCache,
    box_size: egui::Vec2,
) -> Option<String> {
    let mut picked = None;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(cell.position().label()).strong());

            let (rect, _) = ui.allocate_exact_size(box_size, egui::Sense::hover());
            if let Some(thumbnail) = cell.image() {
                let texture = textures.get_or_upload(ui.ctx(), thumbnail);
                let size = egui::vec2(thumbnail.width() as f32, thumbnail.height() as f32);
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter().image(
                    texture.id(),
                    egui::Rect::from_center_size(rect.center(), size),
                    uv,
                    egui::Color32::WHITE,
                );
            }

            let selected = cell.selected().unwrap_or_default();
            egui::ComboBox::from_id_salt(("cell", cell.position().index()))
                .width(box_size.x)
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(selected.is_empty(), "").clicked() {
                        picked = Some(String::new());
                    }
                    for name in choices {
                        if ui.selectable_label(selected == name.as_str(), name.as_str()).clicked() {
                            picked = Some(name.clone());
                        }
                    }
                });
        });
    });
    picked
}
