pub mod cell;
pub mod grid;
pub mod maze;

pub use cell::{Cell, CellWall};
pub use grid::Grid;
pub use maze::Maze;

use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Invalid maze dimensions {0}, both must be positive")]
    InvalidDimension(Dims),
    #[error("Cells {0} and {1} are not adjacent")]
    NotAdjacent(Dims, Dims),
    #[error("Cell {0} is out of bounds")]
    OutOfBounds(Dims),
}
