//! Display defaults for the dashboard views.
//!
//! None of these values constrain the generators. They describe the slider
//! ranges, starting points and fixed axis windows a front-end uses to drive
//! them, so every view renders consistently across parameter changes.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::bounds::AxisRange;
use crate::henon::HenonParams;
use crate::lorenz::{LorenzParameters, LorenzPoint, DEFAULT_DT};

/// Slider over a real parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self { min, max, default, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the slider range. NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.max(self.min).min(self.max)
    }
}

/// Slider over an iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize, default: usize) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: usize) -> usize {
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticView {
    pub growth_rate: ParamRange,
    pub initial_population: ParamRange,
    pub iterations: CountRange,
}

impl Default for LogisticView {
    fn default() -> Self {
        Self {
            growth_rate: ParamRange::new(0.0, 4.0, 0.0, 0.01),
            initial_population: ParamRange::new(0.0, 1.0, 0.2, 0.01),
            iterations: CountRange::new(0, 150, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HenonView {
    pub params: HenonParams,
    pub initial_points: Vec<Vector2<f64>>,
    pub coordinate: ParamRange,
    pub iterations: CountRange,
}

impl HenonView {
    pub fn single_point() -> Self {
        Self {
            params: HenonParams::default(),
            initial_points: vec![Vector2::new(0.63, 0.19)],
            coordinate: ParamRange::new(-2.0, 2.0, 0.63, 0.001),
            iterations: CountRange::new(0, 50_000, 1),
        }
    }

    pub fn two_points() -> Self {
        Self {
            params: HenonParams::default(),
            initial_points: vec![Vector2::new(0.1, 0.2), Vector2::new(0.11, 0.21)],
            coordinate: ParamRange::new(-2.0, 2.0, 0.1, 0.1),
            iterations: CountRange::new(0, 50_000, 1),
        }
    }
}

/// Fixed 3D window used for Lorenz plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzAxes {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl Default for LorenzAxes {
    fn default() -> Self {
        Self {
            x: AxisRange::new(-25.0, 25.0),
            y: AxisRange::new(-35.0, 35.0),
            z: AxisRange::new(5.0, 55.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LorenzView {
    pub initial_points: Vec<LorenzPoint>,
    /// Present when the view lets the user move the starting point.
    pub initial_coordinate: Option<ParamRange>,
    pub sigma: ParamRange,
    pub rho: ParamRange,
    pub beta: ParamRange,
    pub dt: f64,
    pub steps: usize,
    pub axes: LorenzAxes,
}

impl LorenzView {
    fn with_points(initial_points: Vec<LorenzPoint>, steps: usize) -> Self {
        Self {
            initial_points,
            initial_coordinate: None,
            sigma: ParamRange::new(0.0, 30.0, 10.0, 0.1),
            rho: ParamRange::new(0.0, 50.0, 28.0, 0.1),
            beta: ParamRange::new(0.0, 10.0, 2.667, 0.1),
            dt: DEFAULT_DT,
            steps,
            axes: LorenzAxes::default(),
        }
    }

    pub fn single_point() -> Self {
        Self {
            initial_coordinate: Some(ParamRange::new(-20.0, 30.0, 0.01, 0.1)),
            ..Self::with_points(vec![LorenzPoint::new(0.01, 0.01, 0.01)], 2000)
        }
    }

    pub fn two_points() -> Self {
        Self::with_points(
            vec![
                LorenzPoint::new(0.0, 1.0, 1.05),
                LorenzPoint::new(0.001, 1.001, 1.051),
            ],
            2000,
        )
    }

    /// Three well separated starting points followed for 30 time units.
    pub fn three_points() -> Self {
        Self::with_points(
            vec![
                LorenzPoint::new(0.0, 1.0, 1.05),
                LorenzPoint::new(1.0, 2.0, 2.05),
                LorenzPoint::new(2.0, 3.0, 0.05),
            ],
            steps_for_duration(30.0, DEFAULT_DT),
        )
    }

    /// Parameters at the slider defaults.
    pub fn default_params(&self) -> LorenzParameters {
        LorenzParameters::new(self.sigma.default, self.rho.default, self.beta.default)
    }
}

/// Every dashboard view, as sent to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPresets {
    pub logistic: LogisticView,
    pub henon_single: HenonView,
    pub henon_pair: HenonView,
    pub lorenz_single: LorenzView,
    pub lorenz_pair: LorenzView,
    pub lorenz_triple: LorenzView,
}

impl Default for DisplayPresets {
    fn default() -> Self {
        Self {
            logistic: LogisticView::default(),
            henon_single: HenonView::single_point(),
            henon_pair: HenonView::two_points(),
            lorenz_single: LorenzView::single_point(),
            lorenz_pair: LorenzView::two_points(),
            lorenz_triple: LorenzView::three_points(),
        }
    }
}

/// Number of fixed steps of size `dt` needed to cover `duration`.
pub fn steps_for_duration(duration: f64, dt: f64) -> usize {
    let steps = (duration / dt).round();
    if steps.is_finite() && steps > 0.0 {
        steps as usize
    } else {
        0
    }
}
