use serde::{Deserialize, Serialize};

use crate::dynamical_systems::TrajectoryGenerator;

/// Parameters of the logistic map x_{n+1} = r * x_n * (1 - x_n).
///
/// Interesting behaviour lives in r ∈ [0, 4] with populations in [0, 1]:
/// a stable fixed point up to r = 3, period doubling after that and chaos
/// past r ≈ 3.57. Values outside those ranges are still iterated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub growth_rate: f64,
}

impl LogisticParams {
    pub fn new(growth_rate: f64) -> Self {
        Self { growth_rate }
    }

    pub fn logistic_map(&self, population: f64) -> f64 {
        logistic_map(population, self.growth_rate)
    }
}

impl TrajectoryGenerator for LogisticParams {
    type State = f64;

    fn advance(&self, population: f64) -> f64 {
        self.logistic_map(population)
    }
}

pub fn logistic_map(population: f64, growth_rate: f64) -> f64 {
    growth_rate * population * (1.0 - population)
}

/// Population sequence of `iterations + 1` values starting at
/// `initial_population`. No clamping is applied.
pub fn generate(growth_rate: f64, initial_population: f64, iterations: usize) -> Vec<f64> {
    LogisticParams::new(growth_rate).trajectory(initial_population, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations() {
        assert_eq!(generate(3.7, 0.2, 0), vec![0.2]);
        assert_eq!(generate(-12.0, 42.0, 0), vec![42.0]);
    }

    #[test]
    fn test_length_is_iterations_plus_one() {
        for n in [1, 2, 17, 150] {
            assert_eq!(generate(3.9, 0.2, n).len(), n + 1);
        }
    }

    #[test]
    fn test_fixed_point_at_half() {
        assert_eq!(generate(2.0, 0.5, 1), vec![0.5, 0.5]);
        assert!(generate(2.0, 0.5, 50).iter().all(|&p| p == 0.5));
    }

    #[test]
    fn test_recurrence_values() {
        let population = generate(3.0, 0.2, 2);
        // 3 * 0.2 * 0.8 = 0.48, 3 * 0.48 * 0.52 = 0.7488
        assert!((population[1] - 0.48).abs() < 1e-12);
        assert!((population[2] - 0.7488).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let first = generate(3.99, 0.123, 500);
        let second = generate(3.99, 0.123, 500);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_divergence_is_not_clamped() {
        let population = generate(4.5, 0.5, 40);
        assert_eq!(population.len(), 41);
        // 4.5 * 0.5 * 0.5 = 1.125 leaves the unit interval and runs off to -inf
        assert!(population[1] > 1.0);
        assert!(population.iter().any(|p| !p.is_finite() || p.abs() > 1e6));
    }

    #[test]
    fn test_zero_growth_rate_collapses() {
        let population = generate(0.0, 0.2, 3);
        assert_eq!(population, vec![0.2, 0.0, 0.0, 0.0]);
    }
}
