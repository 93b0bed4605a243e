mod aero;
mod loader;
mod point_mass;
mod propulsion;
mod start;

pub use aero::{AeroConfig, LiftCurve};
pub use loader::{ConfigError, RawPointMassConfig};
pub use point_mass::PointMassConfig;
pub use propulsion::{PropulsionConfig, ThrustModel};
pub use start::StartConfig;
