pub mod aircraft;

pub use aircraft::{
    AeroConfig, AircraftState, ConfigError, FlightData, LiftCurve, PointMassConfig,
    PropulsionConfig, RawPointMassConfig, StartConfig, ThrustModel,
};
