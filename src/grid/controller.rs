use crate::cache::ImageCache;
use crate::catalog::OptionStore;
use crate::model::{CellPosition, ImageOption, ThumbSize};

use super::{Cell, CellState};

/// The nine cells and the option names every dropdown offers.
///
/// Events carry a `CellPosition`; the store and cache are borrowed per call.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [Cell; CellPosition::COUNT],
    choices: Vec<String>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: CellPosition::ALL.map(Cell::new),
            choices: Vec::new(),
        }
    }

    pub fn cell(&self, position: CellPosition) -> &Cell {
        &self.cells[position.index()]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Pushes a freshly loaded option set into every cell.
    ///
    /// Selections that no longer name an option lose both name and image;
    /// surviving selections are re-resolved against the new set. Returns the
    /// number of invalidated cells.
    pub fn on_options_loaded(
        &mut self,
        store: &OptionStore,
        cache: &mut ImageCache,
        size: ThumbSize,
    ) -> usize {
        self.choices = store.names();
        let mut invalidated = 0;
        for cell in &mut self.cells {
            let Some(name) = cell.selected().map(str::to_string) else {
                continue;
            };
            match store.get(&name) {
                Some(option) => bind(cell, option, cache, size),
                None => {
                    log::debug!("{} lost selection {name:?}", cell.position().label());
                    cell.clear();
                    invalidated += 1;
                }
            }
        }
        invalidated
    }

    pub fn on_selection_changed(
        &mut self,
        position: CellPosition,
        name: &str,
        store: &OptionStore,
        cache: &mut ImageCache,
        size: ThumbSize,
    ) -> CellState {
        let cell = &mut self.cells[position.index()];
        match store.get(name) {
            Some(option) => bind(cell, option, cache, size),
            None => {
                cell.clear();
            }
        }
        cell.state()
    }

    /// Empties every cell. Returns how many held a selection or image.
    pub fn clear_all(&mut self) -> usize {
        self.cells
            .iter_mut()
            .map(Cell::clear)
            .filter(|had_content| *had_content)
            .count()
    }
}

fn bind(cell: &mut Cell, option: &ImageOption, cache: &mut ImageCache, size: ThumbSize) {
    let image = cache.displayable(&option.image_path, Some(size));
    if image.is_none() {
        log::debug!(
            "{}: no image for {:?} at {}",
            cell.position().label(),
            option.name,
            option.image_path.display()
        );
    }
    cell.bind(&option.name, image);
}
