use serde::Serialize;
use smallvec::SmallVec;

use crate::{array::Array2D, dims::Dims};

use super::{
    cell::{Cell, CellWall},
    MazeError,
};

use CellWall::*;

/// Wall configuration of a rectangular grid.
///
/// Walls are always removed in pairs through [`Grid::remove_wall`], so the wall
/// between two neighbours is either present on both sides or on neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a fully walled grid.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        Self::new_dims(Dims(width, height))
    }

    pub fn new_dims(size: Dims) -> Result<Self, MazeError> {
        let cells = Array2D::new_dims(Cell::new(), size).ok_or(MazeError::InvalidDimension(size))?;
        Ok(Grid { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> i32 {
        self.size().0
    }

    pub fn height(&self) -> i32 {
        self.size().1
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(w, h) = self.size();
        0 <= pos.0 && pos.0 < w && 0 <= pos.1 && pos.1 < h
    }

    /// Returns the wall of `cell` facing `cell2`, if they are adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (0, -1) => Some(North),
            (0, 1) => Some(South),
            (1, 0) => Some(East),
            (-1, 0) => Some(West),
            _ => None,
        }
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn has_wall(&self, pos: Dims, wall: CellWall) -> Option<bool> {
        self.get_cell(pos).map(|cell| cell.get_wall(wall))
    }

    /// In-bounds cardinal neighbours, walled or not.
    ///
    /// Empty when `cell` itself is out of bounds.
    pub fn get_neighbors_pos(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        if !self.is_in_bounds(cell) {
            return SmallVec::new();
        }

        CellWall::get_in_order()
            .into_iter()
            .map(|wall| cell + wall.to_coord())
            .filter(|&pos| self.is_in_bounds(pos))
            .collect()
    }

    /// Neighbours reachable from `cell` without crossing a wall.
    ///
    /// Empty when `cell` itself is out of bounds.
    pub fn open_neighbors(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        let Some(walls) = self.get_cell(cell) else {
            return SmallVec::new();
        };

        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| walls.is_open(wall))
            .map(|wall| cell + wall.to_coord())
            .filter(|&pos| self.is_in_bounds(pos))
            .collect()
    }

    /// Clears the wall between two unit-adjacent cells on both sides.
    ///
    /// Fails with [`MazeError::OutOfBounds`] if either cell lies outside the grid,
    /// checked first, and with [`MazeError::NotAdjacent`] if the cells are not
    /// unit-adjacent. The grid is left untouched on error.
    pub fn remove_wall(&mut self, cell: Dims, cell2: Dims) -> Result<(), MazeError> {
        for pos in [cell, cell2] {
            if !self.is_in_bounds(pos) {
                return Err(MazeError::OutOfBounds(pos));
            }
        }

        let wall = Self::which_wall_between(cell, cell2).ok_or(MazeError::NotAdjacent(cell, cell2))?;
        self.cells[cell].remove_wall(wall);
        self.cells[cell2].remove_wall(wall.reverse_wall());

        Ok(())
    }

    /// Every open edge exactly once, as the cell and its open east or south wall.
    pub fn open_edges(&self) -> impl Iterator<Item = (Dims, CellWall)> + '_ {
        self.cells.iter_pos().flat_map(move |pos| {
            [East, South]
                .into_iter()
                .filter(move |&wall| {
                    self.is_in_bounds(pos + wall.to_coord()) && self.cells[pos].is_open(wall)
                })
                .map(move |wall| (pos, wall))
        })
    }

    pub fn open_edge_count(&self) -> usize {
        self.open_edges().count()
    }

    /// Whether every cell can be reached from every other cell.
    pub fn is_connected(&self) -> bool {
        let mut visited = Array2D::new(false, self.width() as usize, self.height() as usize);
        let mut stack = vec![Dims::ZERO];
        let mut reached = 1;
        visited[Dims::ZERO] = true;

        while let Some(pos) = stack.pop() {
            for next in self.open_neighbors(pos) {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == self.cell_count()
    }

    /// Connected with exactly `cells - 1` open edges, i.e. a spanning tree.
    pub fn is_perfect(&self) -> bool {
        self.open_edge_count() + 1 == self.cell_count() && self.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_fully_walled() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.size(), Dims(4, 3));
        assert_eq!(grid.cell_count(), 12);
        assert!(grid.get_cells().all(|cell| cell.wall_count() == 4));
        assert_eq!(grid.open_edge_count(), 0);
        assert!(grid.get_cell(Dims(4, 0)).is_none());
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(Grid::new(0, 5), Err(MazeError::InvalidDimension(Dims(0, 5))));
        assert_eq!(Grid::new(5, -2), Err(MazeError::InvalidDimension(Dims(5, -2))));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn remove_wall_clears_both_sides() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.remove_wall(Dims(1, 1), Dims(1, 0)).unwrap();

        assert_eq!(grid.has_wall(Dims(1, 1), North), Some(false));
        assert_eq!(grid.has_wall(Dims(1, 0), South), Some(false));
        assert_eq!(grid.has_wall(Dims(1, 1), South), Some(true));
        assert_eq!(grid.open_edge_count(), 1);

        assert_eq!(grid.open_neighbors(Dims(1, 1)).as_slice(), &[Dims(1, 0)]);
        assert_eq!(grid.open_neighbors(Dims(1, 0)).as_slice(), &[Dims(1, 1)]);
    }

    #[test]
    fn remove_wall_rejects_non_adjacent() {
        let mut grid = Grid::new(3, 3).unwrap();

        assert_eq!(
            grid.remove_wall(Dims(0, 0), Dims(1, 1)),
            Err(MazeError::NotAdjacent(Dims(0, 0), Dims(1, 1)))
        );
        assert_eq!(
            grid.remove_wall(Dims(0, 0), Dims(0, 0)),
            Err(MazeError::NotAdjacent(Dims(0, 0), Dims(0, 0)))
        );
        assert_eq!(
            grid.remove_wall(Dims(0, 0), Dims(2, 0)),
            Err(MazeError::NotAdjacent(Dims(0, 0), Dims(2, 0)))
        );
        assert_eq!(
            grid.remove_wall(Dims(0, 0), Dims(-1, 0)),
            Err(MazeError::OutOfBounds(Dims(-1, 0)))
        );
        assert_eq!(grid.open_edge_count(), 0);
    }

    #[test]
    fn neighbors_respect_bounds() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(
            grid.get_neighbors_pos(Dims(0, 0)).as_slice(),
            &[Dims(0, 1), Dims(1, 0)]
        );
        assert_eq!(grid.get_neighbors_pos(Dims(1, 1)).len(), 3);
        assert!(grid.open_neighbors(Dims(0, 0)).is_empty());
        assert!(grid.open_neighbors(Dims(7, 7)).is_empty());
    }

    #[test]
    fn neighbors_of_far_away_cell() {
        let grid = Grid::new(3, 2).unwrap();

        for cell in [Dims(i32::MAX, i32::MAX), Dims(i32::MIN, 0), Dims(3, 1), Dims(-1, 0)] {
            assert!(grid.get_neighbors_pos(cell).is_empty(), "{cell}");
            assert!(grid.open_neighbors(cell).is_empty(), "{cell}");
        }
    }

    #[test]
    fn remove_wall_checks_bounds_before_adjacency() {
        let mut grid = Grid::new(3, 3).unwrap();

        assert_eq!(
            grid.remove_wall(Dims(5, 5), Dims(0, 0)),
            Err(MazeError::OutOfBounds(Dims(5, 5)))
        );
        assert_eq!(
            grid.remove_wall(Dims(2, 2), Dims(2, 3)),
            Err(MazeError::OutOfBounds(Dims(2, 3)))
        );
        assert_eq!(grid, Grid::new(3, 3).unwrap());
    }

    #[test]
    fn outer_walls_never_lead_outside() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.remove_wall(Dims(0, 0), Dims(0, 1)).unwrap();

        assert_eq!(grid.open_neighbors(Dims(0, 0)).as_slice(), &[Dims(0, 1)]);
        assert!(grid.is_perfect());
    }

    #[test]
    fn which_wall_between() {
        assert_eq!(Grid::which_wall_between(Dims(2, 2), Dims(2, 1)), Some(North));
        assert_eq!(Grid::which_wall_between(Dims(2, 2), Dims(2, 3)), Some(South));
        assert_eq!(Grid::which_wall_between(Dims(2, 2), Dims(3, 2)), Some(East));
        assert_eq!(Grid::which_wall_between(Dims(2, 2), Dims(1, 2)), Some(West));
        assert_eq!(Grid::which_wall_between(Dims(2, 2), Dims(3, 3)), None);
    }

    #[test]
    fn connectivity_and_cycles() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.is_connected());

        grid.remove_wall(Dims(0, 0), Dims(1, 0)).unwrap();
        grid.remove_wall(Dims(1, 0), Dims(1, 1)).unwrap();
        assert!(!grid.is_connected());

        grid.remove_wall(Dims(1, 1), Dims(0, 1)).unwrap();
        assert!(grid.is_connected());
        assert!(grid.is_perfect());

        // closes the loop
        grid.remove_wall(Dims(0, 1), Dims(0, 0)).unwrap();
        assert!(grid.is_connected());
        assert_eq!(grid.open_edge_count(), 4);
        assert!(!grid.is_perfect());
    }
}
