//! The generic tree-search driver and the [`Search`] façade.
//!
//! Every systematic strategy in this crate is the same loop run over a
//! different frontier. The strategies themselves live in
//! [`crate::uninformed`] and [`crate::informed`] as methods on [`Search`].

use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::problem::Problem;
use crate::record::SearchTerminationRecord;

/// Default wall-clock budget for a search call.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Expands nodes from `frontier` until a goal is found, the frontier runs dry,
/// or `time_limit` has elapsed.
///
/// The time check happens once per iteration and is not preemptive: a single
/// expansion is never interrupted, so the actual run time can slightly exceed
/// the limit. Timeout and exhaustion both yield a failure record; the driver
/// does not tell them apart and always reports `cutoff == false`.
///
/// # Arguments
/// * `problem`: Supplies the goal test and the transition model.
/// * `initial_state`: Wrapped into the root node.
/// * `frontier`: Decides the expansion order and which children are admitted.
/// * `time_limit`: Wall-clock budget.
pub fn tree_search<P, F>(
    problem: &P,
    initial_state: P::State,
    frontier: &mut F,
    time_limit: Duration,
) -> SearchTerminationRecord<P::State>
where
    P: Problem,
    F: Frontier<P::State> + ?Sized,
{
    let start = Instant::now();
    let mut nodes_expanded: u64 = 0;
    let mut peak_frontier_size: usize = 0;

    frontier.add(Rc::new(SearchNode::root(initial_state)));

    while !frontier.is_empty() && start.elapsed() < time_limit {
        peak_frontier_size = peak_frontier_size.max(frontier.len());
        let node = frontier.remove();
        nodes_expanded += 1;

        if problem.is_goal(node.state()) {
            let elapsed = start.elapsed();
            debug!(
                "goal at depth {} after {} expansions ({:?})",
                node.depth(),
                nodes_expanded,
                elapsed
            );
            return SearchTerminationRecord::success(
                node,
                elapsed,
                nodes_expanded,
                peak_frontier_size,
            );
        }

        let mut admitted = 0usize;
        for action in problem.actions(node.state()) {
            let step_cost = problem.step_cost(node.state(), &action);
            let child = problem.result(node.state(), &action);
            if frontier.add(Rc::new(SearchNode::child(child, &node, step_cost))) {
                admitted += 1;
            }
        }
        trace!(
            "expanded depth {} (cost {}), admitted {} children, frontier {}",
            node.depth(),
            node.path_cost(),
            admitted,
            frontier.len()
        );
    }

    let elapsed = start.elapsed();
    debug!(
        "no goal after {} expansions ({:?}, frontier {})",
        nodes_expanded,
        elapsed,
        if frontier.is_empty() { "exhausted" } else { "timed out" }
    );
    SearchTerminationRecord::failure(elapsed, nodes_expanded, peak_frontier_size, false)
}

/// Binds a problem to a time limit and exposes the search strategies.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use tiles_solver::problem::SearchMode;
/// use tiles_solver::search::Search;
/// use tiles_solver::tiles::TilesProblem;
/// use tiles_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["R"]).unwrap();
/// let problem = TilesProblem::new(grid);
/// let searcher = Search::new(&problem, Duration::from_secs(1));
/// let record = searcher.breadth_first(problem.initial_state(), SearchMode::Graph);
/// assert!(record.is_success());
/// assert_eq!(record.depth(), Some(1));
/// ```
#[derive(Debug)]
pub struct Search<'p, P> {
    pub(crate) problem: &'p P,
    pub(crate) time_limit: Duration,
}

impl<'p, P: Problem> Search<'p, P> {
    pub fn new(problem: &'p P, time_limit: Duration) -> Self {
        Search {
            problem,
            time_limit,
        }
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Runs the driver with a caller-built frontier.
    pub fn run<F>(
        &self,
        initial_state: P::State,
        frontier: &mut F,
    ) -> SearchTerminationRecord<P::State>
    where
        F: Frontier<P::State> + ?Sized,
    {
        tree_search(self.problem, initial_state, frontier, self.time_limit)
    }

    /// Runs the driver with a budget other than the configured one.
    pub(crate) fn run_within<F>(
        &self,
        initial_state: P::State,
        frontier: &mut F,
        time_limit: Duration,
    ) -> SearchTerminationRecord<P::State>
    where
        F: Frontier<P::State> + ?Sized,
    {
        tree_search(self.problem, initial_state, frontier, time_limit)
    }
}
