//! Summary statistics for experiment runs.

/// Streaming count, mean, variance, min and max of a series of values.
///
/// Values are folded in one at a time with Welford's update, so nothing is stored.
///
/// # Examples
/// ```
/// use tiles_solver::stats::Statistics;
///
/// let mut stats = Statistics::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(x);
/// }
/// assert_eq!(stats.count(), 8);
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.var() - 4.0).abs() < 1e-12);
/// assert_eq!(stats.min(), Some(2.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    count: usize,
    mean: f64,
    sum_sq_diff: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.count += 1;
        let k = self.count as f64;
        let diff = value - self.mean;
        self.mean += diff / k;
        self.sum_sq_diff += (k - 1.0) / k * diff * diff;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the values so far; 0 when empty.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance; 0 when empty.
    pub fn var(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum_sq_diff / self.count as f64
        }
    }

    /// Sample variance; 0 with fewer than two values.
    pub fn sample_var(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.sum_sq_diff / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.var().sqrt()
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }
}

const NEWTON_EPSILON: f64 = 1e-4;
const NEWTON_MAX_ITERATIONS: usize = 100;

/// The branching factor `b` of a uniform tree of depth `depth` holding
/// `nodes + 1` nodes, i.e. the root of `1 + b + b^2 + ... + b^depth = nodes + 1`.
///
/// Solved with Newton-Raphson from `nodes^(1/depth)`, using a central
/// difference for the derivative.
///
/// # Returns
/// 0 for depth 0, where no branching factor is defined.
pub fn effective_branching_factor(nodes: u64, depth: usize) -> f64 {
    if depth == 0 {
        return 0.0;
    }
    let target = nodes as f64 + 1.0;
    let f = |b: f64| (0..=depth).map(|i| b.powi(i as i32)).sum::<f64>() - target;
    let slope =
        |b: f64| (f(b + NEWTON_EPSILON) - f(b - NEWTON_EPSILON)) / (2.0 * NEWTON_EPSILON);

    let mut guess = (nodes as f64).powf(1.0 / depth as f64);
    for _ in 0..NEWTON_MAX_ITERATIONS {
        let value = f(guess);
        if value.abs() <= NEWTON_EPSILON {
            break;
        }
        let d = slope(guess);
        if d == 0.0 || !d.is_finite() {
            break;
        }
        guess -= value / d;
    }
    guess
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics() {
        let stats = Statistics::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.var(), 0.0);
        assert_eq!(stats.sample_var(), 0.0);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
    }

    #[test]
    fn test_statistics_match_direct_formulas() {
        let values = [3.5, -1.0, 8.25, 0.0, 2.0];
        let mut stats = Statistics::new();
        values.iter().for_each(|&v| stats.add(v));

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        assert!((stats.mean() - mean).abs() < 1e-12);
        assert!((stats.var() - ss / n).abs() < 1e-9);
        assert!((stats.sample_var() - ss / (n - 1.0)).abs() < 1e-9);
        assert_eq!(stats.min(), Some(-1.0));
        assert_eq!(stats.max(), Some(8.25));
    }

    #[test]
    fn test_effective_branching_factor() {
        assert_eq!(effective_branching_factor(50, 0), 0.0);
        // 1 + 2 + 4 + 8 = 15 = N + 1
        assert!((effective_branching_factor(14, 3) - 2.0).abs() < 1e-3);
        // 1 + b = N + 1
        assert!((effective_branching_factor(7, 1) - 7.0).abs() < 1e-3);
        // Fewer nodes than depth: the root lies below 1.
        let b = effective_branching_factor(1, 4);
        assert!(b.is_finite() && b < 1.0);
    }
}
