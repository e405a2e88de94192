use eframe::egui;

use crate::model::{CellPosition, ThumbSize};

pub(super) const CELL_SPACING: f32 = 16.0;
pub(super) const PANEL_MARGIN: f32 = 10.0;
pub(super) const TOOLBAR_HEIGHT: f32 = 36.0;
// Frame padding plus the title and dropdown rows around the image box.
pub(super) const CELL_CHROME_WIDTH: f32 = 20.0;
pub(super) const CELL_CHROME_HEIGHT: f32 = 76.0;

/// Inner window size that shows the whole grid without scrolling.
pub(super) fn window_size(cell: ThumbSize) -> egui::Vec2 {
    let columns = CellPosition::COLUMNS as f32;
    let rows = (CellPosition::COUNT / CellPosition::COLUMNS) as f32;
    let cell_width = cell.width() as f32 + CELL_CHROME_WIDTH;
    let cell_height = cell.height() as f32 + CELL_CHROME_HEIGHT;
    egui::vec2(
        columns * cell_width + (columns - 1.0) * CELL_SPACING + 2.0 * PANEL_MARGIN,
        rows * cell_height + (rows - 1.0) * CELL_SPACING + 2.0 * PANEL_MARGIN + TOOLBAR_HEIGHT,
    )
}

pub(super) fn box_size(cell: ThumbSize) -> egui::Vec2 {
    egui::vec2(cell.width() as f32, cell.height() as f32)
}
