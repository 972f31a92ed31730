use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::bounds::TrajectoryBounds;
use crate::dynamical_systems::TrajectoryGenerator;
use crate::henon::{self, HenonParams, HenonTrajectory};
use crate::integrator::EulerIntegrator;
use crate::logging::{console_log, get_time_secs};
use crate::logistic;
use crate::lorenz::{LorenzParameters, LorenzPoint};
use crate::playback::Playback;
use crate::presets::DisplayPresets;

/// Column layout for 3D line plots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LorenzSeriesJS {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl From<&[LorenzPoint]> for LorenzSeriesJS {
    fn from(points: &[LorenzPoint]) -> Self {
        Self {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
        }
    }
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_henon_points(value: JsValue) -> Result<Vec<Vector2<f64>>, JsValue> {
    let points: Vec<[f64; 2]> = from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid initial points: {}", e)))?;
    Ok(points.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

fn parse_lorenz_points(value: JsValue) -> Result<Vec<LorenzPoint>, JsValue> {
    let points: Vec<[f64; 3]> = from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid initial points: {}", e)))?;
    Ok(points
        .into_iter()
        .map(|[x, y, z]| LorenzPoint::new(x, y, z))
        .collect())
}

#[wasm_bindgen(js_name = generateLogistic)]
pub fn generate_logistic(growth_rate: f64, initial_population: f64, iterations: usize) -> Vec<f64> {
    console_error_panic_hook::set_once();
    logistic::generate(growth_rate, initial_population, iterations)
}

/// Axis extent of a logistic run, or `null` when nothing is finite.
#[wasm_bindgen(js_name = getLogisticBounds)]
pub fn get_logistic_bounds(population: &[f64]) -> Result<JsValue, JsValue> {
    match TrajectoryBounds::of_logistic(population) {
        Some(bounds) => serialize(&bounds),
        None => Ok(JsValue::NULL),
    }
}

/// Returns `{ x: number[], y: number[] }`.
#[wasm_bindgen(js_name = generateHenon)]
pub fn generate_henon(a: f64, b: f64, x0: f64, y0: f64, iterations: usize) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let (x, y) = henon::generate(a, b, x0, y0, iterations);
    serialize(&HenonTrajectory { x, y })
}

/// `initial_points` is an array of `[x, y]` pairs. Returns one
/// `{ x, y }` object per pair.
#[wasm_bindgen(js_name = generateHenonMany)]
pub fn generate_henon_many(
    a: f64,
    b: f64,
    initial_points: JsValue,
    iterations: usize,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let starts = parse_henon_points(initial_points)?;
    let start_time = get_time_secs();
    let orbits = henon::generate_many(&HenonParams::new(a, b), &starts, iterations);

    console_log!(
        "Henon: {} orbits x {} iterations in {:.3}s",
        orbits.len(),
        iterations,
        get_time_secs() - start_time
    );

    serialize(&orbits)
}

/// Returns `{ x, y, z }` columns of length `steps + 1`.
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen(js_name = generateLorenz)]
pub fn generate_lorenz(
    x0: f64,
    y0: f64,
    z0: f64,
    sigma: f64,
    rho: f64,
    beta: f64,
    steps: usize,
    dt: f64,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let points = crate::lorenz::generate(x0, y0, z0, sigma, rho, beta, steps, dt);
    serialize(&LorenzSeriesJS::from(points.as_slice()))
}

/// `initial_points` is an array of `[x, y, z]` triples.
#[wasm_bindgen(js_name = generateLorenzMany)]
pub fn generate_lorenz_many(
    initial_points: JsValue,
    sigma: f64,
    rho: f64,
    beta: f64,
    steps: usize,
    dt: f64,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let starts = parse_lorenz_points(initial_points)?;
    let integrator = EulerIntegrator::new(LorenzParameters::new(sigma, rho, beta), dt);

    let start_time = get_time_secs();
    let trajectories = integrator.integrate_many(&starts, steps);
    console_log!(
        "Lorenz: {} trajectories x {} steps (dt = {}) in {:.3}s",
        trajectories.len(),
        steps,
        dt,
        get_time_secs() - start_time
    );

    let series: Vec<LorenzSeriesJS> = trajectories
        .iter()
        .map(|t| LorenzSeriesJS::from(t.as_slice()))
        .collect();
    serialize(&series)
}

#[wasm_bindgen(js_name = getDisplayPresets)]
pub fn get_display_presets() -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    DisplayPresets::default()
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub struct LorenzPlaybackWasm {
    playback: Playback<LorenzPoint>,
}

#[wasm_bindgen]
impl LorenzPlaybackWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(
        initial_points: JsValue,
        sigma: f64,
        rho: f64,
        beta: f64,
        steps: usize,
        dt: f64,
    ) -> Result<LorenzPlaybackWasm, JsValue> {
        console_error_panic_hook::set_once();

        let starts = parse_lorenz_points(initial_points)?;
        let integrator = EulerIntegrator::new(LorenzParameters::new(sigma, rho, beta), dt);
        let playback = Playback::new(integrator.integrate_many(&starts, steps));

        console_log!(
            "Lorenz playback ready: {} trajectories, {} frames",
            playback.trajectory_count(),
            playback.total_iterations()
        );

        Ok(Self { playback })
    }

    /// `[x, y, z]` of every trajectory at the cursor.
    #[wasm_bindgen(js_name = getCurrentPoints)]
    pub fn get_current_points(&self) -> Result<JsValue, JsValue> {
        let points: Vec<[f64; 3]> = self
            .playback
            .current_states()
            .iter()
            .map(|p| [p.x, p.y, p.z])
            .collect();
        serialize(&points)
    }

    #[wasm_bindgen(js_name = getTrajectory)]
    pub fn get_trajectory(&self, index: usize, start: usize, end: usize) -> Result<JsValue, JsValue> {
        let window = self
            .playback
            .window(index, start, end)
            .map_err(|e| JsValue::from_str(&e))?;
        serialize(&LorenzSeriesJS::from(window))
    }

    #[wasm_bindgen(js_name = getBounds)]
    pub fn get_bounds(&self) -> Result<JsValue, JsValue> {
        match TrajectoryBounds::of_lorenz(self.playback.trajectories()) {
            Some(bounds) => serialize(&bounds),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn step(&mut self) -> bool {
        self.playback.step()
    }

    #[wasm_bindgen]
    pub fn advance(&mut self, count: usize) -> usize {
        self.playback.advance(count)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.playback.reset();
    }

    #[wasm_bindgen(js_name = getTotalIterations)]
    pub fn get_total_iterations(&self) -> usize {
        self.playback.total_iterations()
    }

    #[wasm_bindgen(js_name = getCurrentIteration)]
    pub fn get_current_iteration(&self) -> usize {
        self.playback.current_iteration()
    }

    #[wasm_bindgen(js_name = getTrajectoryCount)]
    pub fn get_trajectory_count(&self) -> usize {
        self.playback.trajectory_count()
    }
}

#[wasm_bindgen]
pub struct HenonPlaybackWasm {
    playback: Playback<Vector2<f64>>,
}

#[wasm_bindgen]
impl HenonPlaybackWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(
        a: f64,
        b: f64,
        initial_points: JsValue,
        iterations: usize,
    ) -> Result<HenonPlaybackWasm, JsValue> {
        console_error_panic_hook::set_once();

        let starts = parse_henon_points(initial_points)?;
        let params = HenonParams::new(a, b);
        let playback = Playback::new(params.trajectories(&starts, iterations));

        console_log!(
            "Henon playback ready: {} orbits, {} frames",
            playback.trajectory_count(),
            playback.total_iterations()
        );

        Ok(Self { playback })
    }

    #[wasm_bindgen(js_name = getCurrentPoints)]
    pub fn get_current_points(&self) -> Result<JsValue, JsValue> {
        let points: Vec<[f64; 2]> = self
            .playback
            .current_states()
            .iter()
            .map(|p| [p.x, p.y])
            .collect();
        serialize(&points)
    }

    #[wasm_bindgen(js_name = getTrajectory)]
    pub fn get_trajectory(&self, index: usize, start: usize, end: usize) -> Result<JsValue, JsValue> {
        let window = self
            .playback
            .window(index, start, end)
            .map_err(|e| JsValue::from_str(&e))?;
        serialize(&HenonTrajectory::from_points(window))
    }

    #[wasm_bindgen(js_name = getBounds)]
    pub fn get_bounds(&self) -> Result<JsValue, JsValue> {
        let orbits: Vec<HenonTrajectory> = self
            .playback
            .trajectories()
            .iter()
            .map(|points| HenonTrajectory::from_points(points))
            .collect();
        match TrajectoryBounds::of_henon(&orbits) {
            Some(bounds) => serialize(&bounds),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn step(&mut self) -> bool {
        self.playback.step()
    }

    #[wasm_bindgen]
    pub fn advance(&mut self, count: usize) -> usize {
        self.playback.advance(count)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.playback.reset();
    }

    #[wasm_bindgen(js_name = getTotalIterations)]
    pub fn get_total_iterations(&self) -> usize {
        self.playback.total_iterations()
    }

    #[wasm_bindgen(js_name = getCurrentIteration)]
    pub fn get_current_iteration(&self) -> usize {
        self.playback.current_iteration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lorenz_series_columns() {
        let points = [LorenzPoint::new(1.0, 2.0, 3.0), LorenzPoint::new(4.0, 5.0, 6.0)];
        let series = LorenzSeriesJS::from(&points[..]);
        assert_eq!(series.x, vec![1.0, 4.0]);
        assert_eq!(series.y, vec![2.0, 5.0]);
        assert_eq!(series.z, vec![3.0, 6.0]);
    }
}
