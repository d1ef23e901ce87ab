mod depth_first_search;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::gameboard::{Grid, MazeError};
pub use depth_first_search::DepthFirstSearch;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a new [`Random`], drawing a fresh seed when none is given.
///
/// Returns the seed actually used, so the result can be reproduced later.
pub fn seeded_rng(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Algorithm carving a perfect maze out of a fully walled grid.
///
/// Implementations must draw all of their randomness from `rng`, so that the same seed
/// always produces the same maze.
pub trait MazeAlgorithm: fmt::Debug + Sync + Send {
    fn generate(&self, grid: Grid, rng: &mut Random) -> Result<Grid, MazeError>;
}
