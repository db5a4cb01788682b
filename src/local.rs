//! Local search over whole candidate states.
//!
//! These algorithms keep no frontier and no path: they ask a [`LocalProblem`]
//! for random states or neighbours and keep whichever ranks best according to
//! [`LocalState`]. They do not detect cycles and give no optimality
//! guarantee; they stop on an iteration budget or at a local optimum.

use log::{debug, trace};
use rand::Rng;

use crate::problem::{LocalProblem, LocalState};

/// Draws random states and keeps the best one seen.
///
/// The first draw is the initial best; `limit` draws are made in total, and at
/// least one even when `limit` is zero.
pub fn random_guessing<P, R>(problem: &P, limit: usize, rng: &mut R) -> P::State
where
    P: LocalProblem,
    R: Rng + ?Sized,
{
    let mut best = problem.random_state(rng);
    for draw in 1..limit {
        let guess = problem.random_state(rng);
        let improved = guess.is_better_than(&best);
        trace!("random guess {draw}: improved = {improved}");
        if improved {
            best = guess;
        }
    }
    best
}

/// Starts from a random state and tries `limit` random neighbours, moving to
/// one only when it is strictly better. There is no early stop.
pub fn random_search<P, R>(problem: &P, limit: usize, rng: &mut R) -> P::State
where
    P: LocalProblem,
    R: Rng + ?Sized,
{
    let mut current = problem.random_state(rng);
    for step in 0..limit {
        let candidate = problem.random_step(&current, rng);
        let improved = candidate.is_better_than(&current);
        trace!("random search step {step}: improved = {improved}");
        if improved {
            current = candidate;
        }
    }
    current
}

/// Steepest-ascent hill-climbing from a random start.
///
/// Each step asks for the best neighbour and stops, keeping the current state,
/// when that neighbour is no better (a local optimum or a plateau). Otherwise
/// it moves. At most `limit` steps are taken.
pub fn hill_climbing<P, R>(problem: &P, limit: usize, rng: &mut R) -> P::State
where
    P: LocalProblem,
    R: Rng + ?Sized,
{
    let start = problem.random_state(rng);
    climb(problem, start, limit)
}

/// The hill-climbing loop from a given start, without any randomness.
pub fn climb<P>(problem: &P, start: P::State, limit: usize) -> P::State
where
    P: LocalProblem,
{
    let mut current = start;
    for step in 0..limit {
        let neighbour = problem.best_step(&current);
        if current.is_better_than(&neighbour) || neighbour.is_equal_to(&current) {
            trace!("hill-climbing stopped at a local optimum after {} steps", step + 1);
            return current;
        }
        trace!("hill-climbing step {step}: moved to the best neighbour");
        current = neighbour;
    }
    current
}

/// Hill-climbing that moves to a random strictly better neighbour each step,
/// stopping when there is none or after `limit` steps.
pub fn stochastic_hill_climbing<P, R>(problem: &P, limit: usize, rng: &mut R) -> P::State
where
    P: LocalProblem,
    R: Rng + ?Sized,
{
    let mut current = problem.random_state(rng);
    for step in 0..limit {
        match problem.random_better(&current, rng) {
            Some(better) => {
                trace!("stochastic hill-climbing step {step}: moved to a better neighbour");
                current = better;
            }
            None => {
                trace!(
                    "stochastic hill-climbing found no better neighbour after {} steps",
                    step + 1
                );
                return current;
            }
        }
    }
    current
}

/// Runs hill-climbing `rstarts + 1` times from fresh random starts, each capped
/// at `limit` steps, and returns the best result.
///
/// # Arguments
/// * `rstarts`: Number of restarts after the first climb.
/// * `limit`: Step budget of each climb.
/// * `stochastic`: Use [`stochastic_hill_climbing`] instead of [`hill_climbing`].
pub fn random_restart<P, R>(
    problem: &P,
    rstarts: usize,
    limit: usize,
    stochastic: bool,
    rng: &mut R,
) -> P::State
where
    P: LocalProblem,
    R: Rng + ?Sized,
{
    let climb_once = |rng: &mut R| {
        if stochastic {
            stochastic_hill_climbing(problem, limit, rng)
        } else {
            hill_climbing(problem, limit, rng)
        }
    };

    let mut best = climb_once(&mut *rng);
    for restart in 0..rstarts {
        let candidate = climb_once(&mut *rng);
        if candidate.is_better_than(&best) {
            debug!("restart {} improved the best state", restart + 1);
            best = candidate;
        }
    }
    best
}
