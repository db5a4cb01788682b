//! Estimates of the number of touches left to solve a grid.
//!
//! Each estimate is a pure function of the grid and is computed once per
//! state, when the state is created.

use std::fmt;
use std::str::FromStr;

use crate::engine::Grid;
use crate::error::TilesError;

/// The most tiles a single touch can change: the cell and its four neighbours.
pub const MAX_FLIPS_PER_TOUCH: usize = 5;

/// Which heuristic a [`TilesProblem`](crate::tiles::TilesProblem) attaches to its states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileHeuristic {
    /// Always 0. Turns A* into uniform-cost search.
    #[default]
    Zero,
    /// Red tiles divided by five, rounded up. Never overestimates.
    Admissible,
    /// The red tile count. Usually overestimates but ranks grids well.
    Inadmissible,
}

impl TileHeuristic {
    /// Estimates the touches needed to turn `grid` all green.
    ///
    /// # Arguments
    /// * `grid`: The grid to evaluate.
    ///
    /// # Returns
    /// A non-negative estimate; 0 for a solved grid under every variant.
    pub fn estimate(&self, grid: &Grid) -> f64 {
        match self {
            TileHeuristic::Zero => 0.0,
            TileHeuristic::Admissible => admissible_estimate(grid) as f64,
            TileHeuristic::Inadmissible => grid.red_count() as f64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileHeuristic::Zero => "zero",
            TileHeuristic::Admissible => "admissible",
            TileHeuristic::Inadmissible => "inadmissible",
        }
    }
}

impl fmt::Display for TileHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileHeuristic {
    type Err = TilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "h0" => Ok(TileHeuristic::Zero),
            "admissible" | "h1" => Ok(TileHeuristic::Admissible),
            "inadmissible" | "h2" => Ok(TileHeuristic::Inadmissible),
            _ => Err(TilesError::UnknownHeuristic(s.to_string())),
        }
    }
}

/// Calculates a lower bound on the touches needed to clear every red tile.
///
/// A touch flips at most [`MAX_FLIPS_PER_TOUCH`] tiles, so `k` red tiles need
/// at least `ceil(k / 5)` touches. The bound is also consistent: one touch
/// changes the red count by at most five, so the estimate drops by at most
/// one per step.
///
/// # Arguments
/// * `grid`: The grid to evaluate.
///
/// # Returns
/// The bound as a touch count.
pub fn admissible_estimate(grid: &Grid) -> usize {
    grid.red_count().div_ceil(MAX_FLIPS_PER_TOUCH)
}
