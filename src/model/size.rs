use super::{ModelError, Result};

/// Target box for containment scaling. Both sides are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThumbSize {
    width: u32,
    height: u32,
}

impl ThumbSize {
    /// Fixed display box of a grid cell.
    pub const CELL: ThumbSize = ThumbSize {
        width: 220,
        height: 220,
    };

    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ModelError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn square(side: u32) -> Result<Self> {
        Self::new(side, side)
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Whether an image of the given dimensions already fits inside the box.
    pub fn contains(self, width: u32, height: u32) -> bool {
        width <= self.width && height <= self.height
    }
}

impl std::fmt::Display for ThumbSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
