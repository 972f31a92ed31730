/// Cursor over trajectories that were computed up front.
///
/// A front-end that wants to animate a run advances the cursor and draws
/// the prefix up to it. Nothing is recomputed while stepping.
#[derive(Debug, Clone)]
pub struct Playback<S: Copy> {
    trajectories: Vec<Vec<S>>,
    current_iteration: usize,
}

impl<S: Copy> Playback<S> {
    pub fn new(trajectories: Vec<Vec<S>>) -> Self {
        Self {
            trajectories,
            current_iteration: 0,
        }
    }

    pub fn trajectories(&self) -> &[Vec<S>] {
        &self.trajectories
    }

    pub fn trajectory_count(&self) -> usize {
        self.trajectories.len()
    }

    /// Length of the shortest trajectory; every cursor position below it is
    /// valid for all of them.
    pub fn total_iterations(&self) -> usize {
        self.trajectories.iter().map(Vec::len).min().unwrap_or(0)
    }

    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    /// Moves to the next iteration. Returns false once the end is reached.
    pub fn step(&mut self) -> bool {
        if self.current_iteration + 1 < self.total_iterations() {
            self.current_iteration += 1;
            true
        } else {
            false
        }
    }

    /// Jumps ahead by up to `count` iterations and returns how many were taken.
    pub fn advance(&mut self, count: usize) -> usize {
        let last = self.total_iterations().saturating_sub(1);
        let target = self.current_iteration.saturating_add(count).min(last);
        let taken = target.saturating_sub(self.current_iteration);
        self.current_iteration = self.current_iteration.max(target);
        taken
    }

    pub fn reset(&mut self) {
        self.current_iteration = 0;
    }

    /// State of every trajectory at the cursor.
    pub fn current_states(&self) -> Vec<S> {
        self.trajectories
            .iter()
            .filter_map(|t| t.get(self.current_iteration).copied())
            .collect()
    }

    /// Slice `[start, end)` of one trajectory, with both ends clamped.
    pub fn window(&self, index: usize, start: usize, end: usize) -> Result<&[S], String> {
        let trajectory = self
            .trajectories
            .get(index)
            .ok_or_else(|| format!("No trajectory at index {}", index))?;
        let end = end.min(trajectory.len());
        let start = start.min(end);
        Ok(&trajectory[start..end])
    }
}
