//! # Colored Tiles Solver Library
//!
//! This library provides a generic state-space search toolkit and the colored
//! tiles puzzle it was built to solve: a grid of red and green tiles where
//! touching a cell flips it and its orthogonal neighbours, and the goal is an
//! all-green grid.
//!
//! It is used by four binaries:
//! - `run_search`: Runs systematic strategies over a puzzle file and prints a summary.
//! - `see_solutions`: Solves each puzzle with iterative deepening and prints the touches.
//! - `gen_data`: Generates puzzle files by scrambling solved grids.
//! - `local_solver`: Compares the local-search strategies over a puzzle file.
//!
//! ## Modules
//! - `problem`: Capability traits a puzzle implements (`Problem`, `Heuristic`,
//!   `TracedState`, `LocalProblem`, `LocalState`) and `SearchMode`.
//! - `node`, `frontier`, `record`: Search nodes, frontier policies (FIFO, LIFO,
//!   depth-limited, priority, loop-checking) and search outcomes.
//! - `search`: The tree-search driver and the `Search` façade; strategies are
//!   added to it by `uninformed` (BFS, DFS, DLS, IDS) and `informed` (UCS, greedy, A*).
//! - `local`: Random guessing, random search and the hill-climbing family.
//! - `engine`: The tile grid and the touch rule.
//! - `tiles`, `heuristics`: The puzzle as a search problem and its heuristics.
//! - `plan`: The puzzle as a local-search problem.
//! - `utils`: Parsing and formatting puzzle files.
//! - `stats`: Summary statistics and the effective branching factor.
//! - `error`: The crate error type.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod informed;
pub mod local;
pub mod node;
pub mod plan;
pub mod problem;
pub mod record;
pub mod search;
pub mod stats;
pub mod tiles;
pub mod uninformed;
pub mod utils;

pub use error::TilesError;
