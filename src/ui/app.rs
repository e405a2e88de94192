use eframe::egui;

use crate::model::CellPosition;
use crate::runtime::AppContext;

use super::layout::{CELL_SPACING, PANEL_MARGIN, box_size};
use super::{TextureCache, cell_view, dialogs};

pub struct NineGridApp {
    context: AppContext,
    textures: TextureCache,
}

impl NineGridApp {
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            textures: TextureCache::new(),
        }
    }

    fn reload(&mut self) {
        if let Err(error) = self.context.reload_options() {
            log::error!("{error}");
            dialogs::show_error(error.title(), &error.to_string());
        }
    }
}

impl eframe::App for NineGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Clear All").clicked() {
                    self.context.clear_all();
                }
                if ui.button("Reload Options").clicked() {
                    self.reload();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.context.status());
                });
            });
        });

        let mut picks = Vec::new();
        let cell_box = box_size(self.context.config().cell_size);
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(PANEL_MARGIN))
            .show(ctx, |ui| {
                let grid = self.context.grid();
                egui::Grid::new("cells")
                    .spacing([CELL_SPACING, CELL_SPACING])
                    .show(ui, |ui| {
                        for position in CellPosition::ALL {
                            let cell = grid.cell(position);
                            if let Some(name) =
                                cell_view::show(ui, cell, grid.choices(), &mut self.textures, cell_box)
                            {
                                picks.push((position, name));
                            }
                            if position.column() == CellPosition::COLUMNS - 1 {
                                ui.end_row();
                            }
                        }
                    });
            });

        for (position, name) in picks {
            let state = self.context.select(position, &name);
            log::debug!("{} -> {name:?} ({state:?})", position.label());
        }
    }
}
