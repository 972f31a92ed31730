use crate::dynamical_systems::TrajectoryGenerator;
use crate::lorenz::{lorenz_derivatives, LorenzParameters, LorenzPoint, DEFAULT_DT};

/// Fixed-step forward Euler integrator for the Lorenz system
///
/// Given the state x_n at time t_n:
///
/// x_{n+1} = x_n + dt * f(x_n)
///
/// First order and not step-size adaptive. Every step reads only the
/// point's own previous state, so several points can share one integrator
/// without interacting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerIntegrator {
    pub params: LorenzParameters,
    pub dt: f64,
}

impl EulerIntegrator {
    /// Any `dt` is accepted. A negative step integrates backwards in time.
    pub fn new(params: LorenzParameters, dt: f64) -> Self {
        Self { params, dt }
    }

    pub fn with_default_step(params: LorenzParameters) -> Self {
        Self::new(params, DEFAULT_DT)
    }

    /// Perform one Euler step
    pub fn step(&self, point: &LorenzPoint) -> LorenzPoint {
        let dt = self.dt;
        let d = lorenz_derivatives(point, &self.params);

        LorenzPoint {
            x: point.x + d.x * dt,
            y: point.y + d.y * dt,
            z: point.z + d.z * dt,
        }
    }

    /// Integrate from `initial` for `n_steps`, keeping every point.
    ///
    /// Returns `n_steps + 1` points with `initial` first. Divergent runs are
    /// not cut short.
    pub fn integrate(&self, initial: LorenzPoint, n_steps: usize) -> Vec<LorenzPoint> {
        self.trajectory(initial, n_steps)
    }

    /// Integrate each initial point independently, in input order.
    pub fn integrate_many(&self, initials: &[LorenzPoint], n_steps: usize) -> Vec<Vec<LorenzPoint>> {
        self.trajectories(initials, n_steps)
    }
}

impl TrajectoryGenerator for EulerIntegrator {
    type State = LorenzPoint;

    fn advance(&self, point: LorenzPoint) -> LorenzPoint {
        self.step(&point)
    }
}
