mod alarms;
mod instruments;

pub use alarms::{stall_warning_system, terrain_warning_system, StallReason, StallWarning, TerrainWarning};
pub use instruments::{
    instrument_failure_system, instrument_refresh_system, InstrumentPanel, SensorFailureState,
};
