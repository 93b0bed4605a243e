mod environment;
mod physics;

pub use environment::{AtmosphereConfig, AtmosphereType, EnvironmentModel};
pub use physics::{PhysicsConfig, SimClock};
