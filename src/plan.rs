//! The colored tiles puzzle as a local-search problem.
//!
//! A candidate solution is a set of touched cells. Since touching a cell twice
//! cancels out, a set describes every touch sequence up to order, and the
//! grid it produces is fixed. Neighbouring plans differ in one cell.

use std::collections::BTreeSet;
use std::fmt;

use log::trace;
use rand::seq::index;
use rand::Rng;

use crate::engine::{Grid, Touch};
use crate::problem::{LocalProblem, LocalState};

/// A set of touches and the grid they turn the starting grid into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TouchPlan {
    touches: BTreeSet<Touch>,
    grid: Grid,
}

impl TouchPlan {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The touched cells in row-major order.
    pub fn touches(&self) -> impl Iterator<Item = &Touch> {
        self.touches.iter()
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// `true` if the plan turns every tile green.
    pub fn is_solution(&self) -> bool {
        self.grid.is_solved()
    }

    /// Adds `cell` if absent, removes it if present.
    fn toggled(&self, cell: Touch) -> TouchPlan {
        let mut next = self.clone();
        if !next.touches.remove(&cell) {
            next.touches.insert(cell);
        }
        next.grid.apply(cell);
        next
    }
}

impl LocalState for TouchPlan {
    /// More green tiles wins; with equal green, fewer touches wins.
    fn is_better_than(&self, other: &Self) -> bool {
        let (mine, theirs) = (self.grid.green_count(), other.grid.green_count());
        mine > theirs || (mine == theirs && self.touches.len() < other.touches.len())
    }

    fn is_equal_to(&self, other: &Self) -> bool {
        self.grid.green_count() == other.grid.green_count()
            && self.touches.len() == other.touches.len()
    }
}

impl fmt::Display for TouchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} red, touches [", self.grid.red_count())?;
        for (i, touch) in self.touches.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{touch}")?;
        }
        write!(f, "]")
    }
}

/// Local-search view of a colored tiles puzzle.
#[derive(Clone, Debug)]
pub struct TouchPlanProblem {
    start: Grid,
    cells: Vec<Touch>,
}

impl TouchPlanProblem {
    pub fn new(start: Grid) -> Self {
        let cells = start.cells().collect();
        TouchPlanProblem { start, cells }
    }

    pub fn start(&self) -> &Grid {
        &self.start
    }

    /// The plan with no touches, leaving the starting grid as it is.
    pub fn empty_plan(&self) -> TouchPlan {
        TouchPlan {
            touches: BTreeSet::new(),
            grid: self.start.clone(),
        }
    }

    /// The value minimised by local search: red tiles left by `plan`.
    pub fn objective(&self, plan: &TouchPlan) -> usize {
        plan.grid.red_count()
    }

    /// Every plan one toggle away from `plan`, in row-major order of the toggled cell.
    pub fn neighbours<'a>(
        &'a self,
        plan: &'a TouchPlan,
    ) -> impl Iterator<Item = TouchPlan> + 'a {
        self.cells.iter().map(move |&cell| plan.toggled(cell))
    }
}

impl LocalProblem for TouchPlanProblem {
    type State = TouchPlan;

    /// Touches between one and all of the cells, chosen without repeats.
    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> TouchPlan {
        let n = self.cells.len();
        let amount = rng.gen_range(1..=n);
        index::sample(rng, n, amount)
            .into_iter()
            .fold(self.empty_plan(), |plan, i| plan.toggled(self.cells[i]))
    }

    fn random_step<R: Rng + ?Sized>(&self, state: &TouchPlan, rng: &mut R) -> TouchPlan {
        let cell = self.cells[rng.gen_range(0..self.cells.len())];
        state.toggled(cell)
    }

    /// The best neighbour, better or not. Ties go to the earliest cell.
    fn best_step(&self, state: &TouchPlan) -> TouchPlan {
        let mut neighbours = self.neighbours(state);
        let first = match neighbours.next() {
            Some(plan) => plan,
            None => return state.clone(),
        };
        neighbours.fold(first, |best, candidate| {
            if candidate.is_better_than(&best) {
                candidate
            } else {
                best
            }
        })
    }

    fn random_better<R: Rng + ?Sized>(
        &self,
        state: &TouchPlan,
        rng: &mut R,
    ) -> Option<TouchPlan> {
        let mut better: Vec<TouchPlan> = self
            .neighbours(state)
            .filter(|plan| plan.is_better_than(state))
            .collect();
        trace!("{} strictly better neighbours", better.len());
        if better.is_empty() {
            return None;
        }
        let pick = rng.gen_range(0..better.len());
        Some(better.swap_remove(pick))
    }
}
