use bevy::prelude::*;

use crate::components::{AircraftState, FlightData, LiftCurve, PointMassConfig, StartConfig};
use crate::resources::{PhysicsConfig, SimClock};
use crate::systems::{
    advance_sim_clock, aero_force_system, air_data_system, physics_integrator_system,
    propulsion_system,
};

/// Stages of the per-step physics pipeline, chained in order. The ordering
/// is enforced by the schedule; no stage may rely on call-order convention.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PointMassPhysicsSet {
    AirData,
    Aerodynamics,
    Propulsion,
    Integration,
}

/// Plugin for the point-mass flight dynamics pipeline.
///
/// Spawns one aircraft entity from the supplied configuration and start
/// conditions and registers the fixed-step pipeline:
/// AirData -> Aerodynamics -> Propulsion -> Integration.
pub struct PointMassAircraftPlugin {
    config: PointMassConfig,
    start: StartConfig,
}

impl PointMassAircraftPlugin {
    pub fn new(config: PointMassConfig, start: StartConfig) -> Self {
        Self { config, start }
    }

    fn setup_aircraft(mut commands: Commands, config: PointMassConfig, start: StartConfig) {
        let curve = LiftCurve::new(&config.aero);
        let name = Name::new(config.name.clone());
        commands.spawn((
            config,
            curve,
            AircraftState::from_start(&start),
            FlightData::default(),
            name,
        ));
    }
}

impl Default for PointMassAircraftPlugin {
    fn default() -> Self {
        Self::new(PointMassConfig::default(), StartConfig::default())
    }
}

impl Plugin for PointMassAircraftPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let start = self.start;

        app.init_resource::<SimClock>();
        if app.world().get_resource::<PhysicsConfig>().is_none() {
            app.insert_resource(PhysicsConfig::default());
        }
        let timestep = app.world().resource::<PhysicsConfig>().timestep;
        app.insert_resource(Time::<Fixed>::from_seconds(timestep));

        app.configure_sets(
            FixedUpdate,
            (
                PointMassPhysicsSet::AirData,
                PointMassPhysicsSet::Aerodynamics,
                PointMassPhysicsSet::Propulsion,
                PointMassPhysicsSet::Integration,
            )
                .chain(),
        );

        app.add_systems(
            Startup,
            move |commands: Commands| Self::setup_aircraft(commands, config.clone(), start),
        );

        app.add_systems(
            FixedUpdate,
            (
                air_data_system.in_set(PointMassPhysicsSet::AirData),
                aero_force_system.in_set(PointMassPhysicsSet::Aerodynamics),
                propulsion_system.in_set(PointMassPhysicsSet::Propulsion),
                (physics_integrator_system, advance_sim_clock)
                    .chain()
                    .in_set(PointMassPhysicsSet::Integration),
            ),
        );
    }
}
