use super::{ModelError, Result};

/// Fixed grid position, indexed row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellPosition {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl CellPosition {
    pub const COUNT: usize = 9;
    pub const COLUMNS: usize = 3;

    pub const ALL: [CellPosition; 9] = [
        CellPosition::TopLeft,
        CellPosition::TopCenter,
        CellPosition::TopRight,
        CellPosition::MiddleLeft,
        CellPosition::Center,
        CellPosition::MiddleRight,
        CellPosition::BottomLeft,
        CellPosition::BottomCenter,
        CellPosition::BottomRight,
    ];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ModelError::CellIndex(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn row(self) -> usize {
        self.index() / Self::COLUMNS
    }

    pub fn column(self) -> usize {
        self.index() % Self::COLUMNS
    }

    pub fn label(self) -> &'static str {
        match self {
            CellPosition::TopLeft => "Top Left",
            CellPosition::TopCenter => "Top Center",
            CellPosition::TopRight => "Top Right",
            CellPosition::MiddleLeft => "Middle Left",
            CellPosition::Center => "Center",
            CellPosition::MiddleRight => "Middle Right",
            CellPosition::BottomLeft => "Bottom Left",
            CellPosition::BottomCenter => "Bottom Center",
            CellPosition::BottomRight => "Bottom Right",
        }
    }
}
