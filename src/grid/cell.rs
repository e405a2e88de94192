use crate::cache::Thumbnail;
use crate::model::CellPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    SelectedWithImage,
    SelectedWithoutImage,
}

/// One grid slot: the chosen option name and the bitmap shown for it.
#[derive(Debug, Clone)]
pub struct Cell {
    position: CellPosition,
    selected: Option<String>,
    image: Option<Thumbnail>,
}

impl Cell {
    pub fn new(position: CellPosition) -> Self {
        Self {
            position,
            selected: None,
            image: None,
        }
    }

    pub fn position(&self) -> CellPosition {
        self.position
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn image(&self) -> Option<&Thumbnail> {
        self.image.as_ref()
    }

    pub fn state(&self) -> CellState {
        match (&self.selected, &self.image) {
            (None, _) => CellState::Empty,
            (Some(_), Some(_)) => CellState::SelectedWithImage,
            (Some(_), None) => CellState::SelectedWithoutImage,
        }
    }

    pub(super) fn bind(&mut self, name: &str, image: Option<Thumbnail>) {
        self.selected = Some(name.to_string());
        self.image = image;
    }

    /// Returns whether the cell held anything before.
    pub(super) fn clear(&mut self) -> bool {
        let had_content = self.selected.is_some() || self.image.is_some();
        self.selected = None;
        self.image = None;
        had_content
    }
}
