mod cell;
mod controller;


pub use cell::{Cell, CellState};
pub use controller::Grid;
