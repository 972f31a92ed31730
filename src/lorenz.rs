use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::integrator::EulerIntegrator;

/// Integration step used when the caller does not pick one.
pub const DEFAULT_DT: f64 = 0.01;

/// Parameters for the Lorenz system
///
/// Mathematical Background:
/// - σ (sigma): Prandtl number, ratio of momentum diffusivity to thermal diffusivity
/// - ρ (rho): Rayleigh number, ratio of buoyancy to viscous forces
/// - β (beta): geometric factor related to domain aspect ratio
///
/// Classical chaos occurs at σ=10, ρ=28, β=8/3
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParameters {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for LorenzParameters {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl LorenzParameters {
    pub fn new(sigma: f64, rho: f64, beta: f64) -> Self {
        Self { sigma, rho, beta }
    }
}

/// Position (x, y, z) in Lorenz phase space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LorenzPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean norm of the position vector
    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: &LorenzPoint) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vector3<f64>> for LorenzPoint {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Compute the Lorenz system derivatives
///
/// dx/dt = σ(y - x)
/// dy/dt = ρx - y - xz
/// dz/dt = xy - βz
///
/// For the classical parameters the divergence -σ - 1 - β is negative, so
/// phase-space volumes contract onto the attractor.
pub fn lorenz_derivatives(point: &LorenzPoint, params: &LorenzParameters) -> LorenzPoint {
    LorenzPoint {
        x: params.sigma * (point.y - point.x),
        y: params.rho * point.x - point.y - point.x * point.z,
        z: point.x * point.y - params.beta * point.z,
    }
}

/// Calculate fixed points of the Lorenz system
///
/// For ρ > 1 there are three:
/// 1. Origin: (0, 0, 0)
/// 2. C+: (√(β(ρ-1)), √(β(ρ-1)), ρ-1)
/// 3. C-: (-√(β(ρ-1)), -√(β(ρ-1)), ρ-1)
///
/// C± only exist as real points when β(ρ-1) ≥ 0, otherwise only the origin
/// is returned.
pub fn fixed_points(params: &LorenzParameters) -> Vec<LorenzPoint> {
    let origin = LorenzPoint::new(0.0, 0.0, 0.0);
    let c_squared = params.beta * (params.rho - 1.0);

    if params.rho <= 1.0 || c_squared < 0.0 {
        vec![origin]
    } else {
        let c = c_squared.sqrt();
        vec![
            origin,
            LorenzPoint::new(c, c, params.rho - 1.0),
            LorenzPoint::new(-c, -c, params.rho - 1.0),
        ]
    }
}

/// Trajectory of `steps + 1` points from (x0, y0, z0) using forward Euler
/// with step `dt`.
#[allow(clippy::too_many_arguments)]
pub fn generate(
    x0: f64,
    y0: f64,
    z0: f64,
    sigma: f64,
    rho: f64,
    beta: f64,
    steps: usize,
    dt: f64,
) -> Vec<LorenzPoint> {
    EulerIntegrator::new(LorenzParameters::new(sigma, rho, beta), dt)
        .integrate(LorenzPoint::new(x0, y0, z0), steps)
}

/// Two independent trajectories under the same parameters. Same result as
/// two calls to [`generate`].
pub fn generate_pair(
    first: LorenzPoint,
    second: LorenzPoint,
    params: LorenzParameters,
    steps: usize,
    dt: f64,
) -> (Vec<LorenzPoint>, Vec<LorenzPoint>) {
    let integrator = EulerIntegrator::new(params, dt);
    rayon::join(
        || integrator.integrate(first, steps),
        || integrator.integrate(second, steps),
    )
}

/// Distance between two trajectories at each shared step.
pub fn separation(first: &[LorenzPoint], second: &[LorenzPoint]) -> Vec<f64> {
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| a.distance(b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_origin() {
        let params = LorenzParameters::default();
        let origin = LorenzPoint::new(0.0, 0.0, 0.0);
        let derivatives = lorenz_derivatives(&origin, &params);

        assert!((derivatives.x).abs() < 1e-10);
        assert!((derivatives.y).abs() < 1e-10);
        assert!((derivatives.z).abs() < 1e-10);
    }

    #[test]
    fn test_fixed_points_are_stationary() {
        let params = LorenzParameters::default();
        for fp in fixed_points(&params) {
            let d = lorenz_derivatives(&fp, &params);
            assert!(d.norm() < 1e-9, "derivative at {:?} was {:?}", fp, d);
        }
    }

    #[test]
    fn test_fixed_points_symmetry() {
        let params = LorenzParameters::default();
        let fps = fixed_points(&params);

        assert_eq!(fps.len(), 3);

        // C+ and C- should be symmetric
        assert!((fps[1].x + fps[2].x).abs() < 1e-10);
        assert!((fps[1].y + fps[2].y).abs() < 1e-10);
        assert!((fps[1].z - fps[2].z).abs() < 1e-10);
    }

    #[test]
    fn test_only_origin_below_rho_one() {
        let params = LorenzParameters::new(10.0, 0.5, 8.0 / 3.0);
        assert_eq!(fixed_points(&params), vec![LorenzPoint::new(0.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_derivatives_reference_point() {
        let params = LorenzParameters::new(10.0, 28.0, 2.667);
        let d = lorenz_derivatives(&LorenzPoint::new(0.0, 1.0, 1.05), &params);

        assert!((d.x - 10.0).abs() < 1e-12);
        assert!((d.y + 1.0).abs() < 1e-12);
        assert!((d.z + 2.80035).abs() < 1e-12);
    }

    #[test]
    fn test_generate_single_step() {
        let trajectory = generate(0.0, 1.0, 1.05, 10.0, 28.0, 2.667, 1, DEFAULT_DT);

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory[0], LorenzPoint::new(0.0, 1.0, 1.05));
        assert!((trajectory[1].x - 0.1).abs() < 1e-9);
        assert!((trajectory[1].y - 0.99).abs() < 1e-9);
        assert!((trajectory[1].z - 1.0219965).abs() < 1e-9);
    }

    #[test]
    fn test_generate_lengths() {
        for steps in [0, 1, 2000, 3000] {
            let trajectory = generate(0.01, 0.01, 0.01, 10.0, 28.0, 2.667, steps, DEFAULT_DT);
            assert_eq!(trajectory.len(), steps + 1);
        }
    }

    #[test]
    fn test_generate_is_pure() {
        let first = generate(0.01, 0.01, 0.01, 10.0, 28.0, 2.667, 2000, DEFAULT_DT);
        let second = generate(0.01, 0.01, 0.01, 10.0, 28.0, 2.667, 2000, DEFAULT_DT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pair_matches_single_calls() {
        let params = LorenzParameters::new(10.0, 28.0, 2.667);
        let a = LorenzPoint::new(0.0, 1.0, 1.05);
        let b = LorenzPoint::new(0.001, 1.001, 1.051);
        let (first, second) = generate_pair(a, b, params, 500, DEFAULT_DT);

        assert_eq!(first, generate(a.x, a.y, a.z, 10.0, 28.0, 2.667, 500, DEFAULT_DT));
        assert_eq!(second, generate(b.x, b.y, b.z, 10.0, 28.0, 2.667, 500, DEFAULT_DT));
    }

    #[test]
    fn test_identical_pair_is_identical() {
        let params = LorenzParameters::new(10.0, 28.0, 2.667);
        let start = LorenzPoint::new(0.0, 1.0, 1.05);
        let (first, second) = generate_pair(start, start, params, 2000, DEFAULT_DT);

        assert_eq!(first.len(), 2001);
        assert_eq!(first, second);
        assert!(separation(&first, &second).iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_sensitive_dependence() {
        let params = LorenzParameters::new(10.0, 28.0, 2.667);
        let (first, second) = generate_pair(
            LorenzPoint::new(0.0, 1.0, 1.05),
            LorenzPoint::new(0.001, 1.001, 1.051),
            params,
            2000,
            DEFAULT_DT,
        );
        let distances = separation(&first, &second);

        assert_eq!(distances.len(), 2001);
        assert!((distances[0] - 0.001 * 3f64.sqrt()).abs() < 1e-12);
        assert!(distances[..=10].iter().all(|&d| d < 0.05));

        let late_max = distances[1500..].iter().cloned().fold(0.0, f64::max);
        assert!(late_max > 1.0, "late separation only reached {}", late_max);
        assert!(late_max > 100.0 * distances[10]);
        assert!(first.iter().chain(second.iter()).all(|p| p.is_finite()));
    }

    #[test]
    fn test_unusual_parameters_are_accepted() {
        let trajectory = generate(1.0, 1.0, 1.0, 0.0, -5.0, 0.0, 100, DEFAULT_DT);
        assert_eq!(trajectory.len(), 101);
    }

    #[test]
    fn test_distance_and_norm() {
        let a = LorenzPoint::new(1.0, 2.0, 2.0);
        let b = LorenzPoint::new(1.0, 2.0, -1.0);
        assert!((a.norm() - 3.0).abs() < 1e-12);
        assert!((a.distance(&b) - 3.0).abs() < 1e-12);
        assert_eq!(LorenzPoint::from(a.to_vector()), a);
    }
}
