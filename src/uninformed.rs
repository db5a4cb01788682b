//! Uninformed strategies: breadth-first, depth-first, depth-limited and
//! iterative deepening.
//!
//! Each one only picks a frontier (wrapped in [`GraphSearch`] for graph mode)
//! and hands it to the driver.

use std::time::Duration;

use log::debug;

use crate::frontier::{DepthLimited, Fifo, Frontier, GraphSearch, Lifo};
use crate::problem::{Problem, SearchMode};
use crate::record::SearchTerminationRecord;
use crate::search::Search;

impl<'p, P> Search<'p, P>
where
    P: Problem,
    P::State: PartialEq,
{
    /// Breadth-first search over a FIFO queue.
    ///
    /// With unit step costs the goal found is a shallowest one.
    pub fn breadth_first(
        &self,
        initial_state: P::State,
        mode: SearchMode,
    ) -> SearchTerminationRecord<P::State> {
        debug!("breadth-first search ({mode})");
        match mode {
            SearchMode::Tree => self.run(initial_state, &mut Fifo::new()),
            SearchMode::Graph => self.run(initial_state, &mut GraphSearch::new(Fifo::new())),
        }
    }

    /// Depth-first search over a LIFO stack.
    ///
    /// In tree mode on a space with cycles this only stops at the time limit.
    pub fn depth_first(
        &self,
        initial_state: P::State,
        mode: SearchMode,
    ) -> SearchTerminationRecord<P::State> {
        debug!("depth-first search ({mode})");
        match mode {
            SearchMode::Tree => self.run(initial_state, &mut Lifo::new()),
            SearchMode::Graph => self.run(initial_state, &mut GraphSearch::new(Lifo::new())),
        }
    }

    /// Depth-first search that never expands below `limit`.
    ///
    /// The returned record's `cutoff` is `true` if some node was discarded
    /// for being deeper than `limit`, and `false` if the whole space down to
    /// `limit` was explored without that happening. Nodes discarded by the
    /// graph-mode loop test never set it.
    pub fn depth_limited(
        &self,
        initial_state: P::State,
        limit: usize,
        mode: SearchMode,
    ) -> SearchTerminationRecord<P::State> {
        self.depth_limited_within(initial_state, limit, mode, self.time_limit)
    }

    fn depth_limited_within(
        &self,
        initial_state: P::State,
        limit: usize,
        mode: SearchMode,
        time_limit: Duration,
    ) -> SearchTerminationRecord<P::State> {
        debug!("depth-limited search to depth {limit} ({mode})");
        match mode {
            SearchMode::Tree => {
                let mut frontier = DepthLimited::lifo(limit);
                let record = self.run_within(initial_state, &mut frontier, time_limit);
                record.with_cutoff(frontier.cutoff())
            }
            SearchMode::Graph => {
                let mut frontier = GraphSearch::new(DepthLimited::lifo(limit));
                let record = self.run_within(initial_state, &mut frontier, time_limit);
                record.with_cutoff(frontier.cutoff())
            }
        }
    }
}

impl<'p, P> Search<'p, P>
where
    P: Problem,
    P::State: PartialEq + Clone,
{
    /// Iterative deepening: depth-limited search with limits 0, 1, 2, ...
    ///
    /// Stops early with a failure when a depth-limited pass fails without a
    /// cutoff, since the whole space has then been seen. Each pass gets the
    /// time left in the overall budget. The returned record carries the time,
    /// node count and peak frontier size summed (or maximised) over all passes.
    /// On a timeout its `cutoff` is that of the last pass.
    pub fn iterative_deepening(
        &self,
        initial_state: P::State,
        mode: SearchMode,
    ) -> SearchTerminationRecord<P::State> {
        let mut limit = 0usize;
        let mut elapsed = Duration::ZERO;
        let mut nodes = 0u64;
        let mut space = 0usize;

        while elapsed < self.time_limit {
            let remaining = self.time_limit - elapsed;
            let answer =
                self.depth_limited_within(initial_state.clone(), limit, mode, remaining);

            if answer.is_success() {
                debug!("iterative deepening succeeded at limit {limit}");
                return answer.with_prior_effort(elapsed, nodes, space);
            }

            elapsed += answer.elapsed();
            nodes += answer.nodes_expanded();
            space = space.max(answer.peak_frontier_size());

            // A pass that ran out of time says nothing about the depth of the space.
            if answer.elapsed() >= remaining {
                debug!("iterative deepening ran out of time at limit {limit}");
                return SearchTerminationRecord::failure(elapsed, nodes, space, answer.cutoff());
            }
            if !answer.cutoff() {
                debug!("iterative deepening exhausted the space at limit {limit}");
                return SearchTerminationRecord::failure(elapsed, nodes, space, false);
            }
            debug!("limit {limit} cut off after {} nodes, deepening", answer.nodes_expanded());
            limit += 1;
        }

        debug!("iterative deepening had no time left at limit {limit}");
        SearchTerminationRecord::failure(elapsed, nodes, space, false)
    }
}
