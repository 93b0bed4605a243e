use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::systems::{
    instrument_failure_system, instrument_refresh_system, stall_warning_system,
    terrain_warning_system, InstrumentPanel, SensorFailureState, StallWarning, TerrainWarning,
};
use crate::utils::deg_to_rad;

/// Stages of the cockpit layer, chained after the physics step:
/// refresh the panel, inject the sensor failure, then evaluate alarms
/// against whatever the panel (and the true state) now say.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum CockpitSet {
    Instruments,
    Failure,
    Alarms,
}

/// Alarm thresholds and failure-injection settings.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CockpitConfig {
    /// Pitch attitude limit before the stall annunciator fires (rad).
    pub max_pitch: f64,
    /// Bank angle limit before the stall annunciator fires (rad).
    pub max_roll: f64,
    /// Airspeed warning floor (m/s).
    pub min_speed: f64,
    /// Terrain callout floor on the displayed altitude (ft).
    pub terrain_floor_ft: f64,
    /// Simulation time at which the sensor failure latches, if any (s).
    pub failure_onset: Option<f64>,
    /// Seed for the failure drift.
    pub failure_seed: u64,
}

impl Default for CockpitConfig {
    fn default() -> Self {
        Self {
            max_pitch: deg_to_rad(15.0),
            max_roll: deg_to_rad(45.0),
            min_speed: 50.0,
            terrain_floor_ft: 500.0,
            failure_onset: None,
            failure_seed: 0,
        }
    }
}

/// Plugin for the instrument panel and alarm layer. Strictly a consumer of
/// the physics pipeline's outputs.
pub struct CockpitPlugin {
    config: CockpitConfig,
}

impl CockpitPlugin {
    pub fn new(config: CockpitConfig) -> Self {
        Self { config }
    }
}

impl Default for CockpitPlugin {
    fn default() -> Self {
        Self::new(CockpitConfig::default())
    }
}

impl Plugin for CockpitPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StallWarning>()
            .add_event::<TerrainWarning>()
            .insert_resource(InstrumentPanel::default())
            .insert_resource(SensorFailureState::from_seed(self.config.failure_seed))
            .insert_resource(self.config.clone());

        app.configure_sets(
            Update,
            (
                CockpitSet::Instruments,
                CockpitSet::Failure,
                CockpitSet::Alarms,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                instrument_refresh_system.in_set(CockpitSet::Instruments),
                instrument_failure_system.in_set(CockpitSet::Failure),
                (stall_warning_system, terrain_warning_system).in_set(CockpitSet::Alarms),
            ),
        );
    }
}
