//! The value every systematic search call returns.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::node::SearchNode;

/// Elapsed times are floored at this value so rates computed from them stay finite.
pub const MIN_ELAPSED: Duration = Duration::from_micros(10);

/// The outcome of one search call.
///
/// Built once by the driver and handed back by value. A failed search is a
/// normal record with `success() == false`, never an error.
#[derive(Debug)]
pub struct SearchTerminationRecord<S> {
    success: bool,
    result: Option<Rc<SearchNode<S>>>,
    elapsed: Duration,
    nodes_expanded: u64,
    peak_frontier_size: usize,
    cutoff: bool,
}

impl<S> SearchTerminationRecord<S> {
    /// A successful search that reached `goal`.
    pub fn success(
        goal: Rc<SearchNode<S>>,
        elapsed: Duration,
        nodes_expanded: u64,
        peak_frontier_size: usize,
    ) -> Self {
        SearchTerminationRecord {
            success: true,
            result: Some(goal),
            elapsed: elapsed.max(MIN_ELAPSED),
            nodes_expanded,
            peak_frontier_size,
            cutoff: false,
        }
    }

    /// A search that ended without a goal, by exhaustion or by running out of time.
    pub fn failure(
        elapsed: Duration,
        nodes_expanded: u64,
        peak_frontier_size: usize,
        cutoff: bool,
    ) -> Self {
        SearchTerminationRecord {
            success: false,
            result: None,
            elapsed: elapsed.max(MIN_ELAPSED),
            nodes_expanded,
            peak_frontier_size,
            cutoff,
        }
    }

    /// Returns this record with its cutoff flag replaced.
    pub fn with_cutoff(mut self, cutoff: bool) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Folds the totals of earlier, failed attempts into this record.
    ///
    /// Time and node counts are added; peak frontier size is the maximum of both.
    pub fn with_prior_effort(
        mut self,
        elapsed: Duration,
        nodes_expanded: u64,
        peak_frontier_size: usize,
    ) -> Self {
        self.elapsed += elapsed;
        self.nodes_expanded += nodes_expanded;
        self.peak_frontier_size = self.peak_frontier_size.max(peak_frontier_size);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The goal node, present iff the search succeeded.
    pub fn result(&self) -> Option<&Rc<SearchNode<S>>> {
        self.result.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    /// `true` if a depth limit truncated the search.
    pub fn cutoff(&self) -> bool {
        self.cutoff
    }

    /// Depth of the goal node, if one was found.
    pub fn depth(&self) -> Option<usize> {
        self.result.as_ref().map(|node| node.depth())
    }

    pub fn nodes_per_second(&self) -> f64 {
        self.nodes_expanded as f64 / self.elapsed.as_secs_f64()
    }
}

impl<S> fmt::Display for SearchTerminationRecord<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.success { "successful" } else { "failed" };
        write!(
            f,
            "Search {} ({:.5} sec, {} nodes, {} queue)",
            outcome,
            self.elapsed.as_secs_f64(),
            self.nodes_expanded,
            self.peak_frontier_size
        )
    }
}
