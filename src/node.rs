//! Search nodes.
//!
//! A node pairs a problem state with the context in which it was discovered:
//! its parent, its depth and the cost of the path leading to it. Parents are
//! shared through `Rc`, so a whole root-to-leaf path stays alive for as long as
//! any node on it is referenced, and a node's parent is fixed when it is built.

use std::fmt;
use std::rc::Rc;

use crate::problem::TracedState;

/// A node of the search tree.
#[derive(Debug)]
pub struct SearchNode<S> {
    state: S,
    parent: Option<Rc<SearchNode<S>>>,
    depth: usize,
    path_cost: f64,
}

impl<S> SearchNode<S> {
    /// Creates a root node: depth 0, path cost 0.
    pub fn root(state: S) -> Self {
        SearchNode {
            state,
            parent: None,
            depth: 0,
            path_cost: 0.0,
        }
    }

    /// Creates a child of `parent` reached with a step of `step_cost`.
    ///
    /// # Arguments
    /// * `state`: The state produced by the step.
    /// * `parent`: The node that was expanded. It is shared, never modified.
    /// * `step_cost`: Cost of the step; the driver passes the problem's step cost (1 by default).
    pub fn child(state: S, parent: &Rc<SearchNode<S>>, step_cost: f64) -> Self {
        SearchNode {
            state,
            parent: Some(Rc::clone(parent)),
            depth: parent.depth + 1,
            path_cost: parent.path_cost + step_cost,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode<S>>> {
        self.parent.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Iterates over the ancestors of this node, nearest first. The node itself is not included.
    pub fn ancestors(&self) -> Ancestors<'_, S> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// Returns `true` if some ancestor holds a state equal to this node's state.
    ///
    /// This is the loop test used by graph search; it walks the parent chain, so it is O(depth).
    pub fn repeats_ancestor(&self) -> bool
    where
        S: PartialEq,
    {
        self.ancestors().any(|anc| anc.state == self.state)
    }

    /// Returns the states on the path from the root to this node, root first.
    pub fn path(&self) -> Vec<&S> {
        let mut states: Vec<&S> = self.ancestors().map(|n| &n.state).collect();
        states.reverse();
        states.push(&self.state);
        states
    }
}

impl<S: TracedState> SearchNode<S> {
    /// Returns the actions that lead from the root to this node, in order.
    ///
    /// States that report no generating action (the initial state) are skipped.
    pub fn actions(&self) -> Vec<&S::Action> {
        self.path().into_iter().filter_map(|s| s.action()).collect()
    }

    /// Renders the solution as a header line followed by one action per line.
    pub fn display_steps(&self) -> String
    where
        S::Action: fmt::Display,
    {
        let mut out = String::from("Solution:");
        for action in self.actions() {
            out.push('\n');
            out.push_str(&action.to_string());
        }
        out
    }
}

impl<S: fmt::Display> fmt::Display for SearchNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> {} ({})", self.depth, self.state, self.path_cost)
    }
}

// Dropping a long chain recursively would overflow the stack (a tree-mode DFS
// easily builds chains hundreds of thousands of nodes deep), so unlink it here.
impl<S> Drop for SearchNode<S> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => next = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a node's ancestors. See [`SearchNode::ancestors`].
pub struct Ancestors<'a, S> {
    next: Option<&'a SearchNode<S>>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
