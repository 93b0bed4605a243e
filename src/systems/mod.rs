mod aerodynamics;
mod air_data;
pub mod cockpit;
mod integrator;
mod propulsion;

pub use aerodynamics::aero_force_system;
pub use air_data::{air_data_system, AirDataValues};
pub use cockpit::{
    instrument_failure_system, instrument_refresh_system, stall_warning_system,
    terrain_warning_system, InstrumentPanel, SensorFailureState, StallReason, StallWarning,
    TerrainWarning,
};
pub use integrator::{advance_sim_clock, integrate_state, physics_integrator_system};
pub use propulsion::propulsion_system;
