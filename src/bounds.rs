use serde::{Deserialize, Serialize};

use crate::henon::HenonTrajectory;
use crate::lorenz::LorenzPoint;

/// Closed interval along one plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest range covering every finite value. `None` when there are no
    /// finite values at all.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<AxisRange>, v| match acc {
                None => Some(AxisRange::new(v, v)),
                Some(r) => Some(AxisRange::new(r.min.min(v), r.max.max(v))),
            })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn union(&self, other: &AxisRange) -> AxisRange {
        AxisRange::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Widens both ends by `fraction` of the span. Degenerate ranges get a
    /// unit margin so a constant series still renders.
    pub fn padded(&self, fraction: f64) -> AxisRange {
        let span = self.span();
        let margin = if span > 0.0 { span * fraction } else { 1.0 };
        AxisRange::new(self.min - margin, self.max + margin)
    }
}

/// Per-axis extent of one or more trajectories, used to auto-scale plots
/// when a run leaves the usual display window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryBounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: Option<AxisRange>,
}

impl TrajectoryBounds {
    pub fn of_lorenz(trajectories: &[Vec<LorenzPoint>]) -> Option<Self> {
        let points = || trajectories.iter().flatten();
        Some(Self {
            x: AxisRange::from_values(points().map(|p| p.x))?,
            y: AxisRange::from_values(points().map(|p| p.y))?,
            z: Some(AxisRange::from_values(points().map(|p| p.z))?),
        })
    }

    pub fn of_henon(trajectories: &[HenonTrajectory]) -> Option<Self> {
        Some(Self {
            x: AxisRange::from_values(trajectories.iter().flat_map(|t| t.x.iter().copied()))?,
            y: AxisRange::from_values(trajectories.iter().flat_map(|t| t.y.iter().copied()))?,
            z: None,
        })
    }

    /// Population range of a logistic run, with the iteration index on x.
    pub fn of_logistic(population: &[f64]) -> Option<Self> {
        let last_index = population.len().checked_sub(1)?;
        Some(Self {
            x: AxisRange::new(0.0, last_index as f64),
            y: AxisRange::from_values(population.iter().copied())?,
            z: None,
        })
    }
}
