//! Perfect maze generation and solving.
//!
//! A [`Maze`] is carved out of a fully walled [`Grid`] by a randomized depth-first backtracker,
//! which leaves exactly one path between any two cells. [`solver::solve`] finds that path.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod solver;

pub use gameboard::{Cell, CellWall, Grid, Maze, MazeError};
pub use solver::Path;
