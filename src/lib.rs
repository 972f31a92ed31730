mod logging;
pub use logging::{get_time_secs, log_message};

mod dynamical_systems;
pub use dynamical_systems::*;

pub mod logistic;
pub use logistic::LogisticParams;

pub mod henon;
pub use henon::{henon_map, HenonParams, HenonTrajectory};

pub mod lorenz;
pub use lorenz::{fixed_points, lorenz_derivatives, LorenzParameters, LorenzPoint, DEFAULT_DT};

mod integrator;
pub use integrator::*;

mod bounds;
pub use bounds::*;

mod presets;
pub use presets::*;

mod playback;
pub use playback::*;

mod bindings;
pub use bindings::*;
