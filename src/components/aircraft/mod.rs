mod config;
mod state;

pub use config::{
    AeroConfig, ConfigError, LiftCurve, PointMassConfig, PropulsionConfig, RawPointMassConfig,
    StartConfig, ThrustModel,
};
pub use state::{AircraftState, FlightData};
