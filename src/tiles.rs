//! The colored tiles puzzle as a search problem.
//!
//! States are grids; an action touches one cell; every touch costs 1; the
//! goal is the all-green grid. Because touching a cell twice undoes it, the
//! state space is full of short cycles, which is what graph mode is for.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::engine::{Grid, Touch};
use crate::heuristics::TileHeuristic;
use crate::problem::{Heuristic, Problem, TracedState};

/// A grid, the touch that produced it, and its heuristic estimate.
///
/// Two states are equal when their grids are equal, however they were reached.
#[derive(Clone, Debug)]
pub struct TileState {
    grid: Grid,
    action: Option<Touch>,
    hval: f64,
}

impl TileState {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The touch that produced this state; `None` for an initial state.
    pub fn touch(&self) -> Option<Touch> {
        self.action
    }

    /// Renders the grid in color, marking the touch that produced it.
    pub fn display(&self) -> String {
        self.grid.to_string_with_highlight(self.action)
    }
}

impl PartialEq for TileState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for TileState {}

impl Hash for TileState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl Heuristic for TileState {
    fn heuristic(&self) -> f64 {
        self.hval
    }
}

impl TracedState for TileState {
    type Action = Touch;

    fn action(&self) -> Option<&Touch> {
        self.action.as_ref()
    }
}

impl fmt::Display for TileState {
    /// Rows separated by `/`, e.g. `RG/GG`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.grid.to_string().replace('\n', "/");
        f.write_str(&rows)
    }
}

/// A colored tiles puzzle: a starting grid and the heuristic used to rank its states.
#[derive(Clone, Debug)]
pub struct TilesProblem {
    start: Grid,
    heuristic: TileHeuristic,
    // Legal touches depend only on the dimensions.
    actions: Vec<Touch>,
}

impl TilesProblem {
    /// Creates a problem with the zero heuristic.
    pub fn new(start: Grid) -> Self {
        let actions = start.cells().collect();
        TilesProblem {
            start,
            heuristic: TileHeuristic::Zero,
            actions,
        }
    }

    /// Replaces the heuristic attached to states created from now on.
    ///
    /// # Examples
    /// ```
    /// use tiles_solver::heuristics::TileHeuristic;
    /// use tiles_solver::problem::Heuristic;
    /// use tiles_solver::tiles::TilesProblem;
    /// use tiles_solver::utils::grid_from_str_array;
    ///
    /// let grid = grid_from_str_array(&["RR", "RG"]).unwrap();
    /// let problem = TilesProblem::new(grid).with_heuristic(TileHeuristic::Inadmissible);
    /// assert_eq!(problem.initial_state().heuristic(), 3.0);
    /// ```
    pub fn with_heuristic(mut self, heuristic: TileHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn heuristic(&self) -> TileHeuristic {
        self.heuristic
    }

    pub fn start(&self) -> &Grid {
        &self.start
    }

    /// The starting grid as a state, with no action and its heuristic value computed.
    pub fn initial_state(&self) -> TileState {
        self.state_for(self.start.clone(), None)
    }

    /// The all-green grid with the starting grid's dimensions.
    pub fn goal_state(&self) -> TileState {
        self.state_for(Grid::new_green(self.start.rows(), self.start.cols()), None)
    }

    fn state_for(&self, grid: Grid, action: Option<Touch>) -> TileState {
        let hval = self.heuristic.estimate(&grid);
        TileState { grid, action, hval }
    }
}

impl Problem for TilesProblem {
    type State = TileState;
    type Action = Touch;

    fn is_goal(&self, state: &TileState) -> bool {
        state.grid.is_solved()
    }

    /// Every cell, in row-major order, whatever the state.
    fn actions(&self, _state: &TileState) -> Vec<Touch> {
        self.actions.clone()
    }

    fn result(&self, state: &TileState, action: &Touch) -> TileState {
        let mut grid = state.grid.clone();
        grid.apply(*action);
        self.state_for(grid, Some(*action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::SearchMode;
    use crate::search::Search;
    use crate::utils::grid_from_str_array;
    use std::collections::HashSet;
    use std::time::Duration;

    fn problem(rows: &[&str]) -> TilesProblem {
        TilesProblem::new(grid_from_str_array(rows).unwrap())
    }

    /// Replays the recorded touches on the starting grid.
    fn replay(problem: &TilesProblem, touches: &[&Touch]) -> Grid {
        let mut grid = problem.start().clone();
        for touch in touches {
            grid.apply(**touch);
        }
        grid
    }

    #[test]
    fn test_initial_and_goal_states() {
        let p = problem(&["RG", "GG"]);
        let init = p.initial_state();
        assert!(init.touch().is_none());
        assert!(!p.is_goal(&init));
        assert!(p.is_goal(&p.goal_state()));
        assert_eq!(init.to_string(), "RG/GG");
        assert_eq!(p.actions(&init).len(), 4);
        assert_eq!(p.actions(&init)[1], Touch::new(0, 1));
    }

    #[test]
    fn test_result_is_idempotent() {
        for rows in [&["RGR", "GGR", "RRG"][..], &["R"][..]] {
            let p = problem(rows);
            let init = p.initial_state();
            for touch in p.actions(&init) {
                let first = p.result(&init, &touch);
                let second = p.result(&init, &touch);
                assert_eq!(first, second);
                assert_eq!(first.touch(), second.touch());
                assert_eq!(p.is_goal(&first), p.is_goal(&second));
            }
        }
        // The single touch on a lone red tile reaches the goal both times.
        let p = problem(&["R"]);
        let init = p.initial_state();
        let touch = Touch::new(0, 0);
        assert!(p.is_goal(&p.result(&init, &touch)));
        assert!(p.is_goal(&p.result(&init, &touch)));
    }

    #[test]
    fn test_result_leaves_input_untouched() {
        let p = problem(&["RGR", "GGG", "RRG"]);
        let init = p.initial_state();
        let before = init.grid().clone();
        let next = p.result(&init, &Touch::new(1, 1));
        assert_eq!(init.grid(), &before);
        assert_ne!(next, init);
        assert_eq!(next.touch(), Some(Touch::new(1, 1)));
        // Touching again returns to an equal state.
        assert_eq!(p.result(&next, &Touch::new(1, 1)), init);
    }

    #[test]
    fn test_equality_ignores_action_and_heuristic() {
        let p = problem(&["RG", "GG"]);
        let a = p.initial_state();
        let b = p.result(&p.result(&a, &Touch::new(1, 1)), &Touch::new(1, 1));
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_hval_follows_heuristic() {
        let grid = grid_from_str_array(&["RRR", "RRR", "GGG"]).unwrap();
        let p = TilesProblem::new(grid.clone()).with_heuristic(TileHeuristic::Admissible);
        assert_eq!(p.initial_state().heuristic(), 2.0);
        let p = TilesProblem::new(grid).with_heuristic(TileHeuristic::Inadmissible);
        assert_eq!(p.initial_state().heuristic(), 6.0);
        assert_eq!(p.goal_state().heuristic(), 0.0);
    }

    #[test]
    fn test_single_red_tile_solved_in_one_touch() {
        let p = problem(&["R"]);
        let rec = Search::new(&p, Duration::from_secs(1))
            .breadth_first(p.initial_state(), SearchMode::Tree);
        assert!(rec.is_success());
        assert_eq!(rec.depth(), Some(1));
        assert_eq!(rec.result().unwrap().display_steps(), "Solution:\n(0, 0)");
    }

    #[test]
    fn test_all_red_two_by_two_with_bfs_graph() {
        let p = problem(&["RR", "RR"]);
        let rec = Search::new(&p, Duration::from_secs(5))
            .breadth_first(p.initial_state(), SearchMode::Graph);
        assert!(rec.is_success());
        assert!(rec.depth().unwrap() <= 4);
        let goal = rec.result().unwrap();
        assert!(p.is_goal(goal.state()));
        assert!(replay(&p, &goal.actions()).is_solved());
    }

    #[test]
    fn test_tree_dfs_stops_at_time_limit_without_error() {
        let p = problem(&["RR", "RR"]);
        let limit = Duration::from_millis(50);
        let rec = Search::new(&p, limit).depth_first(p.initial_state(), SearchMode::Tree);
        // Tree DFS keeps touching (1, 1) and undoing it; it never reaches the goal.
        assert!(!rec.is_success());
        assert!(rec.elapsed() >= limit);
        assert!(rec.nodes_expanded() > 0);
    }

    #[test]
    fn test_ids_matches_bfs_depth() {
        // Touches at (0, 0) and (2, 2) from the solved grid.
        let p = problem(&["RRG", "RGR", "GRR"]);
        let searcher = Search::new(&p, Duration::from_secs(10));
        let bfs = searcher.breadth_first(p.initial_state(), SearchMode::Graph);
        let ids = searcher.iterative_deepening(p.initial_state(), SearchMode::Graph);
        assert!(bfs.is_success() && ids.is_success());
        assert_eq!(ids.depth(), bfs.depth());
        assert!(replay(&p, &ids.result().unwrap().actions()).is_solved());
    }

    // Not every 4x4 grid is solvable; this one is three touches from solved.
    #[test]
    fn test_a_star_admissible_is_optimal() {
        let grid = grid_from_str_array(&["RRRG", "GRRG", "RRRR", "RRRG"]).unwrap();
        let plain = TilesProblem::new(grid.clone());
        let informed = TilesProblem::new(grid).with_heuristic(TileHeuristic::Admissible);
        let bfs = Search::new(&plain, Duration::from_secs(10))
            .breadth_first(plain.initial_state(), SearchMode::Graph);
        let a_star = Search::new(&informed, Duration::from_secs(10))
            .a_star(informed.initial_state(), SearchMode::Graph);
        assert!(bfs.is_success() && a_star.is_success());
        let a_star_goal = a_star.result().unwrap();
        assert_eq!(a_star_goal.path_cost(), bfs.depth().unwrap() as f64);
        assert!(replay(&informed, &a_star_goal.actions()).is_solved());
    }

    #[test]
    fn test_inadmissible_greedy_still_solves() {
        let grid = grid_from_str_array(&["RRRG", "GRRG", "RRRR", "RRRG"]).unwrap();
        let p = TilesProblem::new(grid).with_heuristic(TileHeuristic::Inadmissible);
        let rec = Search::new(&p, Duration::from_secs(10))
            .greedy_best_first(p.initial_state(), SearchMode::Graph);
        assert!(rec.is_success());
        assert!(p.is_goal(rec.result().unwrap().state()));
    }
}
