//! Informed strategies: uniform-cost, greedy best-first and A*.
//!
//! All three use a [`PriorityFrontier`]; only the key differs. Ties on the key
//! go to the node inserted first. None of them check the heuristic: an
//! inadmissible estimate still gives "lowest key first", nothing more.

use log::debug;

use crate::frontier::{GraphSearch, PriorityFrontier};
use crate::problem::{Heuristic, Problem, SearchMode};
use crate::record::SearchTerminationRecord;
use crate::search::Search;

impl<'p, P> Search<'p, P>
where
    P: Problem,
    P::State: PartialEq,
{
    /// Uniform-cost search: expands the node with the smallest path cost first.
    pub fn uniform_cost(
        &self,
        initial_state: P::State,
        mode: SearchMode,
    ) -> SearchTerminationRecord<P::State> {
        debug!("uniform-cost search ({mode})");
        match mode {
            SearchMode::Tree => self.run(initial_state, &mut PriorityFrontier::uniform_cost()),
            SearchMode::Graph => self.run(
                initial_state,
                &mut GraphSearch::new(PriorityFrontier::uniform_cost()),
            ),
        }
    }
}

impl<'p, P> Search<'p, P>
where
    P: Problem,
    P::State: PartialEq + Heuristic,
{
    /// Greedy best-first search: expands the node with the smallest heuristic estimate first.
    pub fn greedy_best_first(
        &self,
        initial_state: P::State,
        mode: SearchMode,
    ) -> SearchTerminationRecord<P::State> {
        debug!("greedy best-first search ({mode})");
        match mode {
            SearchMode::Tree => self.run(initial_state, &mut PriorityFrontier::greedy()),
            SearchMode::Graph => {
                self.run(initial_state, &mut GraphSearch::new(PriorityFrontier::greedy()))
            }
        }
    }

    /// A* search: expands the node with the smallest `path_cost + heuristic` first.
    ///
    /// With an admissible, consistent heuristic the goal found has minimum path cost.
    pub fn a_star(
        &self,
        initial_state: P::State,
        mode: SearchMode,
    ) -> SearchTerminationRecord<P::State> {
        debug!("A* search ({mode})");
        match mode {
            SearchMode::Tree => self.run(initial_state, &mut PriorityFrontier::a_star()),
            SearchMode::Graph => {
                self.run(initial_state, &mut GraphSearch::new(PriorityFrontier::a_star()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A small weighted graph. States carry a heuristic table lookup.
    ///
    /// ```text
    ///   A --1--> B --1--> D (goal)
    ///   A --4--> C --0--> D
    ///   A --5--> D
    /// ```
    struct Weighted {
        h: fn(char) -> f64,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        name: char,
        h: f64,
    }

    impl Heuristic for Node {
        fn heuristic(&self) -> f64 {
            self.h
        }
    }

    impl Weighted {
        fn state(&self, name: char) -> Node {
            Node {
                name,
                h: (self.h)(name),
            }
        }
    }

    impl Problem for Weighted {
        type State = Node;
        type Action = (char, f64);

        fn is_goal(&self, state: &Node) -> bool {
            state.name == 'D'
        }

        fn actions(&self, state: &Node) -> Vec<(char, f64)> {
            match state.name {
                'A' => vec![('D', 5.0), ('C', 4.0), ('B', 1.0)],
                'B' => vec![('D', 1.0)],
                'C' => vec![('D', 0.0)],
                _ => Vec::new(),
            }
        }

        fn result(&self, _: &Node, action: &(char, f64)) -> Node {
            self.state(action.0)
        }

        fn step_cost(&self, _: &Node, action: &(char, f64)) -> f64 {
            action.1
        }
    }

    fn zero(_: char) -> f64 {
        0.0
    }

    fn exact(name: char) -> f64 {
        match name {
            'A' => 2.0,
            'B' => 1.0,
            _ => 0.0,
        }
    }

    fn misleading(name: char) -> f64 {
        match name {
            'B' => 10.0,
            _ => 0.0,
        }
    }

    fn names(rec: &SearchTerminationRecord<Node>) -> String {
        rec.result()
            .unwrap()
            .path()
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    #[test]
    fn test_uniform_cost_finds_cheapest_path() {
        let problem = Weighted { h: zero };
        let searcher = Search::new(&problem, Duration::from_secs(5));
        for mode in [SearchMode::Tree, SearchMode::Graph] {
            let rec = searcher.uniform_cost(problem.state('A'), mode);
            assert!(rec.is_success());
            assert_eq!(rec.result().unwrap().path_cost(), 2.0);
            assert_eq!(names(&rec), "ABD");
        }
    }

    #[test]
    fn test_a_star_with_exact_heuristic() {
        let problem = Weighted { h: exact };
        let searcher = Search::new(&problem, Duration::from_secs(5));
        let rec = searcher.a_star(problem.state('A'), SearchMode::Graph);
        assert!(rec.is_success());
        assert_eq!(rec.result().unwrap().path_cost(), 2.0);
    }

    #[test]
    fn test_a_star_with_zero_heuristic_matches_uniform_cost() {
        let problem = Weighted { h: zero };
        let searcher = Search::new(&problem, Duration::from_secs(5));
        let ucs = searcher.uniform_cost(problem.state('A'), SearchMode::Tree);
        let a_star = searcher.a_star(problem.state('A'), SearchMode::Tree);
        assert_eq!(ucs.nodes_expanded(), a_star.nodes_expanded());
        assert_eq!(ucs.peak_frontier_size(), a_star.peak_frontier_size());
        assert_eq!(names(&ucs), names(&a_star));
    }

    #[test]
    fn test_greedy_follows_the_heuristic() {
        let problem = Weighted { h: misleading };
        let searcher = Search::new(&problem, Duration::from_secs(5));
        let rec = searcher.greedy_best_first(problem.state('A'), SearchMode::Tree);
        assert!(rec.is_success());
        // Ties at h = 0 between D (inserted first) and C; D wins on insertion order.
        assert_eq!(names(&rec), "AD");
        assert_eq!(rec.result().unwrap().path_cost(), 5.0);
    }
}
