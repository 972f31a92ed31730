use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::dynamical_systems::TrajectoryGenerator;

/// Parameters of the Hénon map. The strange attractor appears for the
/// classic choice a = 1.4, b = 0.3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HenonParams {
    pub a: f64,
    pub b: f64,
}

impl Default for HenonParams {
    fn default() -> Self {
        Self { a: 1.4, b: 0.3 }
    }
}

impl HenonParams {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn henon_map(&self, pos: &Vector2<f64>) -> Vector2<f64> {
        let (x_new, y_new) = henon_map(pos.x, pos.y, self.a, self.b);
        Vector2::new(x_new, y_new)
    }
}

impl TrajectoryGenerator for HenonParams {
    type State = Vector2<f64>;

    fn advance(&self, pos: Vector2<f64>) -> Vector2<f64> {
        self.henon_map(&pos)
    }
}

/// x_{n+1} = y_n + 1 - a x_n², y_{n+1} = b x_n
///
/// Both components read the previous x.
pub fn henon_map(x: f64, y: f64, a: f64, b: f64) -> (f64, f64) {
    let x_new = y + 1.0 - a * x * x;
    let y_new = b * x;
    (x_new, y_new)
}

/// Coordinate sequences of one Hénon orbit, ready for an x-vs-y plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HenonTrajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl HenonTrajectory {
    pub fn from_points(points: &[Vector2<f64>]) -> Self {
        Self {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<Vector2<f64>> {
        Some(Vector2::new(*self.x.get(index)?, *self.y.get(index)?))
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

/// x and y sequences, each of length `iterations + 1`, for the orbit of
/// (x0, y0).
pub fn generate(a: f64, b: f64, x0: f64, y0: f64, iterations: usize) -> (Vec<f64>, Vec<f64>) {
    let points = HenonParams::new(a, b).trajectory(Vector2::new(x0, y0), iterations);
    HenonTrajectory::from_points(&points).into_parts()
}

/// Independent orbits sharing (a, b), one per initial point, in input order.
pub fn generate_many(
    params: &HenonParams,
    initial_points: &[Vector2<f64>],
    iterations: usize,
) -> Vec<HenonTrajectory> {
    params
        .trajectories(initial_points, iterations)
        .iter()
        .map(|points| HenonTrajectory::from_points(points))
        .collect()
}

/// Euclidean distance between two orbits at each shared iteration.
pub fn separation(first: &HenonTrajectory, second: &HenonTrajectory) -> Vec<f64> {
    (0..first.len().min(second.len()))
        .filter_map(|i| Some((first.point(i)? - second.point(i)?).norm()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_iterate_from_origin() {
        let (x, y) = generate(1.4, 0.3, 0.0, 0.0, 1);
        assert_eq!(x, vec![0.0, 1.0]);
        assert_eq!(y, vec![0.0, 0.0]);
    }

    #[test]
    fn test_y_uses_previous_x() {
        let (x, y) = generate(1.4, 0.3, 0.5, 0.2, 1);
        // x1 = 0.2 + 1 - 1.4 * 0.25 = 0.85, y1 = 0.3 * 0.5 = 0.15
        assert!((x[1] - 0.85).abs() < 1e-12);
        assert!((y[1] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_lengths() {
        for n in [0, 1, 10, 1000] {
            let (x, y) = generate(1.4, 0.3, 0.63, 0.19, n);
            assert_eq!(x.len(), n + 1);
            assert_eq!(y.len(), n + 1);
        }
    }

    #[test]
    fn test_matches_struct_map() {
        let params = HenonParams::default();
        let pos = Vector2::new(0.3, -0.1);
        let mapped = params.henon_map(&pos);
        let (x, y) = henon_map(pos.x, pos.y, params.a, params.b);
        assert_eq!(mapped, Vector2::new(x, y));
    }

    #[test]
    fn test_identical_points_identical_orbits() {
        let params = HenonParams::default();
        let start = Vector2::new(0.1, 0.2);
        let orbits = generate_many(&params, &[start, start], 2000);

        assert_eq!(orbits.len(), 2);
        assert_eq!(orbits[0], orbits[1]);
        assert!(separation(&orbits[0], &orbits[1]).iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_many_matches_single_calls() {
        let params = HenonParams::new(1.2, 0.25);
        let starts = [Vector2::new(0.1, 0.2), Vector2::new(0.11, 0.21), Vector2::new(-0.3, 0.0)];
        let orbits = generate_many(&params, &starts, 300);

        for (orbit, start) in orbits.iter().zip(starts.iter()) {
            let (x, y) = generate(params.a, params.b, start.x, start.y, 300);
            assert_eq!(orbit.x, x);
            assert_eq!(orbit.y, y);
        }
    }

    #[test]
    fn test_nearby_points_separate() {
        let params = HenonParams::default();
        let orbits = generate_many(
            &params,
            &[Vector2::new(0.0, 0.0), Vector2::new(1e-8, 0.0)],
            200,
        );
        let distances = separation(&orbits[0], &orbits[1]);

        assert_eq!(distances.len(), 201);
        assert!(distances[1] < 1e-6);
        assert!(distances[100..].iter().any(|&d| d > 1e-2));
        assert!(orbits.iter().all(|o| o.x.iter().all(|v| v.is_finite())));
    }

    #[test]
    fn test_divergent_orbit_is_returned() {
        let (x, _) = generate(1.4, 0.3, 5.0, 5.0, 30);
        assert_eq!(x.len(), 31);
        assert!(x.iter().any(|v| !v.is_finite() || v.abs() > 1e10));
    }

    #[test]
    fn test_point_access() {
        let trajectory = HenonTrajectory::from_points(&[Vector2::new(1.0, 2.0)]);
        assert_eq!(trajectory.point(0), Some(Vector2::new(1.0, 2.0)));
        assert_eq!(trajectory.point(1), None);
        assert!(!trajectory.is_empty());
    }
}
