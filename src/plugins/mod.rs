mod aircraft;
mod cockpit;
mod environment;

pub use aircraft::{PointMassAircraftPlugin, PointMassPhysicsSet};
pub use cockpit::{CockpitConfig, CockpitPlugin, CockpitSet};
pub use environment::EnvironmentPlugin;
