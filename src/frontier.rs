//! Frontiers: the containers of nodes waiting to be expanded.
//!
//! A frontier's add/remove policy alone determines search order; the driver in
//! [`crate::search`] never looks at it. This module provides:
//! - [`Fifo`]: a queue, for breadth-first search.
//! - [`Lifo`]: a stack, for depth-first search.
//! - [`DepthLimited`]: wraps another frontier and drops nodes deeper than a limit,
//!   remembering that it did so.
//! - [`PriorityFrontier`]: removes the node with the smallest key (path cost,
//!   heuristic, or both), ties going to the earliest insertion.
//! - [`GraphSearch`]: wraps any of the above and refuses nodes whose state repeats
//!   one of their ancestors.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

use crate::node::SearchNode;
use crate::problem::Heuristic;

/// A node container with a removal policy.
pub trait Frontier<S> {
    /// Offers `node` to the frontier.
    ///
    /// # Returns
    /// `true` if the node was stored, `false` if the admission policy discarded it.
    fn add(&mut self, node: Rc<SearchNode<S>>) -> bool;

    /// Removes the next node according to the policy.
    ///
    /// # Panics
    /// Panics if the frontier is empty. Callers check [`Frontier::is_empty`] first.
    fn remove(&mut self) -> Rc<SearchNode<S>>;

    /// Number of nodes currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a node was ever discarded for exceeding a depth limit.
    /// Only depth-limited frontiers can report `true`.
    fn cutoff(&self) -> bool {
        false
    }
}

fn empty_frontier() -> ! {
    panic!("remove() called on an empty frontier")
}

/// First-in, first-out queue.
#[derive(Debug)]
pub struct Fifo<S> {
    nodes: VecDeque<Rc<SearchNode<S>>>,
}

impl<S> Fifo<S> {
    pub fn new() -> Self {
        Fifo {
            nodes: VecDeque::new(),
        }
    }
}

impl<S> Default for Fifo<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for Fifo<S> {
    fn add(&mut self, node: Rc<SearchNode<S>>) -> bool {
        self.nodes.push_back(node);
        true
    }

    fn remove(&mut self) -> Rc<SearchNode<S>> {
        self.nodes.pop_front().unwrap_or_else(|| empty_frontier())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Last-in, first-out stack.
#[derive(Debug)]
pub struct Lifo<S> {
    nodes: Vec<Rc<SearchNode<S>>>,
}

impl<S> Lifo<S> {
    pub fn new() -> Self {
        Lifo { nodes: Vec::new() }
    }
}

impl<S> Default for Lifo<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for Lifo<S> {
    fn add(&mut self, node: Rc<SearchNode<S>>) -> bool {
        self.nodes.push(node);
        true
    }

    fn remove(&mut self) -> Rc<SearchNode<S>> {
        self.nodes.pop().unwrap_or_else(|| empty_frontier())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Silently discards nodes deeper than `limit`.
///
/// The cutoff flag is set the first time a node is discarded and stays set for
/// the life of the frontier. Iterative deepening reads it to tell a truncated
/// depth layer from an exhausted search space.
#[derive(Debug)]
pub struct DepthLimited<F> {
    inner: F,
    limit: usize,
    cutoff: bool,
}

impl<F> DepthLimited<F> {
    pub fn new(inner: F, limit: usize) -> Self {
        DepthLimited {
            inner,
            limit,
            cutoff: false,
        }
    }
}

impl<S> DepthLimited<Lifo<S>> {
    /// The depth-limited stack used by depth-limited search.
    pub fn lifo(limit: usize) -> Self {
        Self::new(Lifo::new(), limit)
    }
}

impl<S, F: Frontier<S>> Frontier<S> for DepthLimited<F> {
    fn add(&mut self, node: Rc<SearchNode<S>>) -> bool {
        if node.depth() > self.limit {
            self.cutoff = true;
            return false;
        }
        self.inner.add(node)
    }

    fn remove(&mut self) -> Rc<SearchNode<S>> {
        self.inner.remove()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn cutoff(&self) -> bool {
        self.cutoff || self.inner.cutoff()
    }
}

/// Loop detection layered over any frontier.
///
/// Before a node reaches the wrapped frontier its ancestor chain is walked; if
/// any ancestor holds an equal state the node is dropped. A dropped node never
/// touches the wrapped frontier, so its size and cutoff flag are unaffected.
#[derive(Debug)]
pub struct GraphSearch<F> {
    inner: F,
}

impl<F> GraphSearch<F> {
    pub fn new(inner: F) -> Self {
        GraphSearch { inner }
    }
}

impl<S: PartialEq, F: Frontier<S>> Frontier<S> for GraphSearch<F> {
    fn add(&mut self, node: Rc<SearchNode<S>>) -> bool {
        if node.repeats_ancestor() {
            return false;
        }
        self.inner.add(node)
    }

    fn remove(&mut self) -> Rc<SearchNode<S>> {
        self.inner.remove()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn cutoff(&self) -> bool {
        self.inner.cutoff()
    }
}

/// Computes the ordering key of a node; smaller keys are removed first.
pub type KeyFn<S> = fn(&SearchNode<S>) -> f64;

struct Entry<S> {
    key: f64,
    order: u64,
    node: Rc<SearchNode<S>>,
}

// BinaryHeap is a max-heap, so the comparison is reversed: the smallest
// (key, insertion order) pair compares greatest.
impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Entry<S> {}

/// Min-priority queue over a node key.
///
/// Ties on the key are broken by insertion order, earliest first, by pairing
/// each key with a strictly increasing counter.
pub struct PriorityFrontier<S> {
    heap: BinaryHeap<Entry<S>>,
    key: KeyFn<S>,
    counter: u64,
}

impl<S> PriorityFrontier<S> {
    /// Creates a priority frontier ordered by an arbitrary key.
    pub fn with_key(key: KeyFn<S>) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            key,
            counter: 0,
        }
    }

    /// Ordered by path cost: uniform-cost search.
    pub fn uniform_cost() -> Self {
        Self::with_key(|node| node.path_cost())
    }
}

impl<S: Heuristic> PriorityFrontier<S> {
    /// Ordered by the state's heuristic estimate alone: greedy best-first search.
    pub fn greedy() -> Self {
        Self::with_key(|node| node.state().heuristic())
    }

    /// Ordered by path cost plus heuristic estimate: A*.
    pub fn a_star() -> Self {
        Self::with_key(|node| node.path_cost() + node.state().heuristic())
    }
}

impl<S> Frontier<S> for PriorityFrontier<S> {
    fn add(&mut self, node: Rc<SearchNode<S>>) -> bool {
        self.counter += 1;
        self.heap.push(Entry {
            key: (self.key)(&node),
            order: self.counter,
            node,
        });
        true
    }

    fn remove(&mut self) -> Rc<SearchNode<S>> {
        match self.heap.pop() {
            Some(entry) => entry.node,
            None => empty_frontier(),
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
