use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::{Grid, MazeAlgorithm, MazeError, Random};
use crate::{array::Array2D, dims::Dims};

/// Randomized depth-first backtracker.
///
/// Grows a spanning tree from the north-west corner. Each step either connects the cell on top
/// of the stack to a random unvisited neighbour, or pops it when no such neighbour is left.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn generate(&self, mut grid: Grid, rng: &mut Random) -> Result<Grid, MazeError> {
        let size = grid.size();
        let mut visited =
            Array2D::new_dims(false, size).ok_or(MazeError::InvalidDimension(size))?;
        let mut stack = Vec::with_capacity(visited.len());

        let start = Dims::ZERO;
        visited[start] = true;
        stack.push(start);

        let mut pushed = 1usize;
        while let Some(&current) = stack.last() {
            let unvisited_neighbors = grid
                .get_neighbors_pos(current)
                .into_iter()
                .filter(|cell| !visited[*cell])
                .collect::<SmallVec<[_; 4]>>();

            match unvisited_neighbors.choose(rng) {
                Some(&next) => {
                    grid.remove_wall(current, next)?;
                    visited[next] = true;
                    stack.push(next);
                    pushed += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug_assert_eq!(pushed, visited.len());
        debug_assert!(visited.all(|&seen| seen));
        log::trace!("Depth first search visited {} cells", pushed);

        Ok(grid)
    }
}
