//! Capability traits that connect a puzzle to the search strategies.
//!
//! A problem only has to implement the capabilities a strategy asks for:
//! - [`Problem`] is enough for every uninformed strategy.
//! - [`Heuristic`] on the state type unlocks the informed strategies.
//! - [`TracedState`] lets a solution replay the actions that produced it.
//! - [`LocalProblem`] and [`LocalState`] drive the local-search family.
//!
//! The trait bounds are checked by the compiler, so asking for A* on a problem
//! whose states carry no heuristic is rejected before anything runs.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::TilesError;

/// A search problem: a transition model plus a goal test.
pub trait Problem {
    /// Immutable problem state. The driver never mutates a state it was handed.
    type State;
    /// An action that can be applied to a state.
    type Action;

    /// Returns `true` if `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerates the actions legal in `state`.
    ///
    /// The order must be deterministic: it fixes the child-expansion order and
    /// therefore every FIFO, LIFO and insertion-order tie-break.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns the state reached by applying `action` to `state`.
    ///
    /// Must be pure: the returned state shares no mutable structure with `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of a single step. Defaults to 1.
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action) -> f64 {
        1.0
    }
}

/// A state that carries a heuristic estimate of the remaining path cost.
///
/// The estimate is computed once by the problem when the state is created.
pub trait Heuristic {
    fn heuristic(&self) -> f64;
}

/// A state that remembers the action which generated it.
pub trait TracedState {
    type Action;

    /// The generating action, or `None` for the initial state.
    fn action(&self) -> Option<&Self::Action>;
}

/// A state that local search can rank.
pub trait LocalState {
    /// Returns `true` if `self` is strictly better than `other`.
    fn is_better_than(&self, other: &Self) -> bool;
    /// Returns `true` if `self` is exactly as good as `other`.
    fn is_equal_to(&self, other: &Self) -> bool;
}

/// A problem that local search can explore through whole candidate states.
///
/// All randomness comes from the caller-supplied generator so runs can be seeded.
pub trait LocalProblem {
    type State: LocalState;

    /// A random state, independent of any other state.
    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;

    /// A neighbour one step away from `state`, chosen at random.
    fn random_step<R: Rng + ?Sized>(&self, state: &Self::State, rng: &mut R) -> Self::State;

    /// The best neighbour of `state`. It does not have to be better than `state`.
    fn best_step(&self, state: &Self::State) -> Self::State;

    /// A randomly chosen strictly better neighbour, or `None` if there is none.
    fn random_better<R: Rng + ?Sized>(&self, state: &Self::State, rng: &mut R)
        -> Option<Self::State>;
}

/// Whether a search checks for repeated states along the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// No repeated-state checking.
    Tree,
    /// Discards any node whose state repeats one of its ancestors.
    Graph,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Tree => "tree",
            SearchMode::Graph => "graph",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = TilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(SearchMode::Tree),
            "graph" => Ok(SearchMode::Graph),
            _ => Err(TilesError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!("tree".parse::<SearchMode>().unwrap(), SearchMode::Tree);
        assert_eq!(" Graph ".parse::<SearchMode>().unwrap(), SearchMode::Graph);
        let err = "forest".parse::<SearchMode>().unwrap_err();
        assert!(err.to_string().contains("forest"));
    }

    #[test]
    fn test_search_mode_display_round_trips() {
        for mode in [SearchMode::Tree, SearchMode::Graph] {
            assert_eq!(mode.to_string().parse::<SearchMode>().unwrap(), mode);
        }
    }
}
