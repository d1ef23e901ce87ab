use serde::Serialize;

use crate::dims::Dims;

use CellWall::*;

/// Wall state of a single cell, `true` means the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
}

impl Cell {
    /// Fully walled cell.
    pub fn new() -> Cell {
        Cell {
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            North => self.north = false,
            South => self.south = false,
            East => self.east = false,
            West => self.west = false,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            North => self.north,
            South => self.south,
            East => self.east,
            West => self.west,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn wall_count(&self) -> usize {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.get_wall(wall))
            .count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CellWall {
    North,
    South,
    East,
    West,
}

impl CellWall {
    /// Offset of the neighbour on the other side of the wall.
    pub fn to_coord(&self) -> Dims {
        match self {
            North => Dims(0, -1),
            South => Dims(0, 1),
            East => Dims(1, 0),
            West => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    /// All walls in the order the generator inspects neighbours.
    pub const fn get_in_order() -> [CellWall; 4] {
        [North, South, East, West]
    }
}
