use bevy::prelude::*;

use crate::components::{AircraftState, FlightData, PointMassConfig};
use crate::plugins::CockpitConfig;
use crate::systems::cockpit::InstrumentPanel;

/// Why the stall annunciator fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallReason {
    /// Angle of attack beyond the stall angle.
    AngleOfAttack,
    /// Pitch or bank attitude outside limits.
    Attitude,
    /// Airspeed below the warning floor.
    LowSpeed,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct StallWarning {
    pub reason: StallReason,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct TerrainWarning {
    /// Displayed altitude when the warning fired (ft).
    pub indicated_altitude_ft: f64,
}

/// Thresholds the true state; a stall condition is a physics fact, not a
/// sensor reading, so corrupted instruments do not mask it.
pub fn stall_warning_system(
    query: Query<(&AircraftState, &FlightData, &PointMassConfig)>,
    config: Res<CockpitConfig>,
    mut events: EventWriter<StallWarning>,
) {
    for (state, data, aircraft) in query.iter() {
        if data.alpha.abs() > aircraft.aero.stall_angle() {
            events.send(StallWarning {
                reason: StallReason::AngleOfAttack,
            });
        } else if state.pitch.abs() > config.max_pitch || state.roll.abs() > config.max_roll {
            events.send(StallWarning {
                reason: StallReason::Attitude,
            });
        } else if data.speed < config.min_speed {
            events.send(StallWarning {
                reason: StallReason::LowSpeed,
            });
        }
    }
}

/// Thresholds the *displayed* altitude, as the terrain callout on the real
/// flight deck does; once the sensors lie, so does this warning.
pub fn terrain_warning_system(
    panel: Res<InstrumentPanel>,
    config: Res<CockpitConfig>,
    mut events: EventWriter<TerrainWarning>,
) {
    if panel.indicated_altitude_ft < config.terrain_floor_ft {
        events.send(TerrainWarning {
            indicated_altitude_ft: panel.indicated_altitude_ft,
        });
    }
}
