use serde::Serialize;

use crate::{
    algorithms::{seeded_rng, DepthFirstSearch, MazeAlgorithm},
    dims::Dims,
    solver::{self, Path},
};

use super::{Grid, MazeError};

/// Generated perfect maze.
///
/// The wall configuration is fixed once generation finishes, a `Maze` only hands out shared
/// references to its [`Grid`]. It is `Send + Sync`, so it can be solved from many threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maze {
    width: i32,
    height: i32,
    seed: u64,
    #[serde(flatten)]
    grid: Grid,
}

impl Maze {
    /// Generates a maze with the randomized depth-first backtracker.
    ///
    /// Without a seed, a random one is drawn and can be read back with [`Maze::seed`].
    pub fn generate(size: Dims, seed: Option<u64>) -> Result<Maze, MazeError> {
        Self::generate_with(&DepthFirstSearch, size, seed)
    }

    pub fn generate_with(
        algorithm: &dyn MazeAlgorithm,
        size: Dims,
        seed: Option<u64>,
    ) -> Result<Maze, MazeError> {
        let grid = Grid::new_dims(size)?;
        let (mut rng, seed) = seeded_rng(seed);

        let grid = algorithm.generate(grid, &mut rng)?;
        log::debug!(
            "Generated {}x{} maze with {:?}, seed {}",
            size.0,
            size.1,
            algorithm,
            seed
        );

        Ok(Maze {
            width: size.0,
            height: size.1,
            seed,
            grid,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Dims {
        Dims(self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Entrance, the north-west corner.
    pub fn start(&self) -> Dims {
        Dims::ZERO
    }

    /// Exit, the south-east corner.
    pub fn goal(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn solve(&self, start: Dims, goal: Dims) -> Result<Path, MazeError> {
        solver::solve(&self.grid, start, goal)
    }

    /// Solves from [`Maze::start`] to [`Maze::goal`].
    pub fn solve_default(&self) -> Path {
        // corners are always in bounds
        match self.solve(self.start(), self.goal()) {
            Ok(path) => path,
            Err(err) => unreachable!("corners of a {}x{} maze: {}", self.width, self.height, err),
        }
    }
}
