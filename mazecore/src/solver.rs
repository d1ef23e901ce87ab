//! Breadth-first shortest path search over the open passages of a [`Grid`].

use std::collections::VecDeque;

use serde::Serialize;

use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::{CellWall, Grid, MazeError},
};

/// Ordered cells from a start to a goal, both included.
///
/// Consecutive cells are adjacent and open toward each other. A path never holds a reference
/// to the maze it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Dims>);

impl Path {
    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    /// Number of cells, at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps between the cells.
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Dims> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Dims> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dims> {
        self.0.iter()
    }

    pub fn reversed(&self) -> Path {
        Path(self.0.iter().rev().copied().collect())
    }

    /// Direction of every step, as the wall crossed when leaving each cell.
    pub fn moves(&self) -> impl Iterator<Item = CellWall> + '_ {
        self.0
            .windows(2)
            .filter_map(|step| Grid::which_wall_between(step[0], step[1]))
    }

    /// Whether every step of the path crosses an open passage of `grid`.
    pub fn is_valid_in(&self, grid: &Grid) -> bool {
        !self.0.is_empty()
            && self.0.iter().all(|&pos| grid.is_in_bounds(pos))
            && self
                .0
                .windows(2)
                .all(|step| grid.open_neighbors(step[0]).contains(&step[1]))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Dims;
    type IntoIter = std::slice::Iter<'a, Dims>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Path> for Vec<Dims> {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// Finds the shortest path from `start` to `goal`.
///
/// Fails with [`MazeError::OutOfBounds`] when either end lies outside the grid.
///
/// # Panics
///
/// When `goal` can not be reached from `start`. That never happens on a generated maze, only
/// on a hand-built grid with disconnected regions.
pub fn solve(grid: &Grid, start: Dims, goal: Dims) -> Result<Path, MazeError> {
    for pos in [start, goal] {
        if !grid.is_in_bounds(pos) {
            return Err(MazeError::OutOfBounds(pos));
        }
    }

    // predecessor of every discovered cell, start points to itself
    let mut came_from: Array2D<Option<Dims>> =
        Array2D::new(None, grid.width() as usize, grid.height() as usize);
    let mut queue = VecDeque::from([start]);
    came_from[start] = Some(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }

        for next in grid.open_neighbors(current) {
            if came_from[next].is_none() {
                came_from[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    assert!(
        came_from[goal].is_some(),
        "goal {} is unreachable from {}, the grid is not a perfect maze",
        goal,
        start
    );

    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current].filter(|&prev| prev != current) {
        cells.push(prev);
        current = prev;
    }
    cells.reverse();

    log::trace!("Solved {} -> {} in {} steps", start, goal, cells.len() - 1);

    Ok(Path(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameboard::Maze;

    /// Independent path search: the unique simple path in a tree, found by plain DFS.
    fn tree_path(grid: &Grid, from: Dims, to: Dims) -> Vec<Dims> {
        fn walk(grid: &Grid, prev: Option<Dims>, pos: Dims, to: Dims, path: &mut Vec<Dims>) -> bool {
            path.push(pos);
            if pos == to {
                return true;
            }
            for next in grid.open_neighbors(pos) {
                if Some(next) != prev && walk(grid, Some(pos), next, to, path) {
                    return true;
                }
            }
            path.pop();
            false
        }

        let mut path = vec![];
        assert!(walk(grid, None, from, to, &mut path));
        path
    }

    #[test]
    fn five_by_five_seed_42() {
        let maze = Maze::generate(Dims(5, 5), Some(42)).unwrap();
        let path = maze.solve(Dims(0, 0), Dims(4, 4)).unwrap();

        assert_eq!(path.start(), Some(Dims(0, 0)));
        assert_eq!(path.goal(), Some(Dims(4, 4)));
        assert!(path.cells().windows(2).all(|s| s[0].manhattan(s[1]) == 1));
        assert!(path.is_valid_in(maze.grid()));

        let again = Maze::generate(Dims(5, 5), Some(42)).unwrap();
        assert_eq!(again.solve(Dims(0, 0), Dims(4, 4)).unwrap(), path);
        assert_eq!(again.solve_default(), path);
    }

    #[test]
    fn start_equals_goal() {
        let maze = Maze::generate(Dims(4, 4), Some(1)).unwrap();
        let path = maze.solve(Dims(2, 1), Dims(2, 1)).unwrap();

        assert_eq!(path.cells(), &[Dims(2, 1)]);
        assert_eq!(path.edge_count(), 0);
        assert_eq!(path.moves().count(), 0);
    }

    #[test]
    fn out_of_bounds() {
        let maze = Maze::generate(Dims(5, 5), Some(42)).unwrap();

        assert_eq!(
            maze.solve(Dims(10, 10), maze.goal()),
            Err(MazeError::OutOfBounds(Dims(10, 10)))
        );
        assert_eq!(
            maze.solve(Dims(0, 0), Dims(5, 0)),
            Err(MazeError::OutOfBounds(Dims(5, 0)))
        );
        assert_eq!(
            maze.solve(Dims(0, -1), Dims(0, 0)),
            Err(MazeError::OutOfBounds(Dims(0, -1)))
        );
    }

    #[test]
    fn matches_tree_distance_for_all_pairs() {
        let maze = Maze::generate(Dims(6, 5), Some(7)).unwrap();
        let grid = maze.grid();
        let cells: Vec<_> = grid.get_cells().iter_pos().collect();

        for &a in &cells {
            for &b in &cells {
                let path = maze.solve(a, b).unwrap();
                let expected = tree_path(grid, a, b);

                assert_eq!(path.cells(), expected.as_slice(), "{a} -> {b}");
                assert_eq!(maze.solve(b, a).unwrap(), path.reversed(), "{b} -> {a}");
            }
        }
    }

    #[test]
    fn moves_follow_path() {
        let maze = Maze::generate(Dims(9, 9), Some(3)).unwrap();
        let path = maze.solve_default();

        let mut pos = path.start().unwrap();
        for (wall, &next) in path.moves().zip(path.iter().skip(1)) {
            assert_eq!(maze.grid().has_wall(pos, wall), Some(false));
            pos = pos + wall.to_coord();
            assert_eq!(pos, next);
        }
        assert_eq!(Some(pos), path.goal());
        assert_eq!(path.moves().count(), path.edge_count());
    }

    #[test]
    fn shortest_on_open_grid() {
        // with cycles, BFS still returns a shortest route
        let mut grid = Grid::new(3, 3).unwrap();
        for pos in Dims::iter_fill(Dims::ZERO, Dims(3, 3)) {
            for next in grid.get_neighbors_pos(pos) {
                grid.remove_wall(pos, next).unwrap();
            }
        }

        let path = solve(&grid, Dims(0, 0), Dims(2, 2)).unwrap();
        assert_eq!(path.edge_count(), 4);
        assert!(path.is_valid_in(&grid));
    }

    #[test]
    fn invalid_path_detected() {
        let maze = Maze::generate(Dims(3, 3), Some(0)).unwrap();
        let path = Path(vec![Dims(0, 0), Dims(1, 1)]);

        assert!(!path.is_valid_in(maze.grid()));
        assert!(!Path(vec![]).is_valid_in(maze.grid()));
    }

    #[test]
    #[should_panic(expected = "unreachable")]
    fn disconnected_grid_panics() {
        let grid = Grid::new(2, 2).unwrap();
        let _ = solve(&grid, Dims(0, 0), Dims(1, 1));
    }
}
