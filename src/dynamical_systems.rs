use rayon::prelude::*;

/// A deterministic update rule that can be iterated into a trajectory.
///
/// Maps apply the rule once per iteration; flows apply one fixed integration
/// step. Implementors only provide `advance`; the accumulate loop and the
/// multi-point variant are shared.
pub trait TrajectoryGenerator: Send + Sync {
    type State: Copy + Send + Sync;

    /// Applies the update rule once.
    fn advance(&self, state: Self::State) -> Self::State;

    /// Iterates `advance` from `initial`, keeping every state.
    ///
    /// The result always holds `iterations + 1` states, `initial` first.
    /// There is no divergence check: non-finite states are kept as they are.
    fn trajectory(&self, initial: Self::State, iterations: usize) -> Vec<Self::State> {
        let mut trajectory = Vec::with_capacity(iterations.saturating_add(1));
        let mut current = initial;
        trajectory.push(current);

        for _ in 0..iterations {
            current = self.advance(current);
            trajectory.push(current);
        }

        trajectory
    }

    /// One independent trajectory per initial state, in input order.
    ///
    /// Points share the parameters of `self` and nothing else.
    fn trajectories(&self, initials: &[Self::State], iterations: usize) -> Vec<Vec<Self::State>> {
        initials
            .par_iter()
            .map(|&initial| self.trajectory(initial, iterations))
            .collect()
    }
}
