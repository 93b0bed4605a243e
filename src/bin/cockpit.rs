use bevy::prelude::*;

use glidepath::components::{AircraftState, PointMassConfig, StartConfig};
use glidepath::plugins::{
    CockpitConfig, CockpitPlugin, CockpitSet, EnvironmentPlugin, PointMassAircraftPlugin,
    PointMassPhysicsSet,
};
use glidepath::resources::{PhysicsConfig, SimClock};
use glidepath::systems::{InstrumentPanel, StallWarning, TerrainWarning};
use glidepath::utils::deg_to_rad;

/// Total scripted flight time (s).
const SIM_DURATION: f64 = 300.0;

/// Simulation time at which the pressure-sensor failure latches (s).
const FAILURE_ONSET: f64 = 120.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // An aircraft YAML may be passed as the first argument; the generic
    // transport is the default.
    let config = match std::env::args().nth(1) {
        Some(path) => PointMassConfig::from_file(path)?,
        None => PointMassConfig::default(),
    };

    let start = StartConfig {
        pitch: deg_to_rad(5.0),
        altitude: 1000.0,
        horizontal_speed: 100.0,
        throttle: 0.5,
        ..Default::default()
    };

    let cockpit = CockpitConfig {
        failure_onset: Some(FAILURE_ONSET),
        failure_seed: 17,
        ..Default::default()
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::log::LogPlugin::default())
        .add_plugins(EnvironmentPlugin::new())
        .add_plugins(PointMassAircraftPlugin::new(config, start))
        .add_plugins(CockpitPlugin::new(cockpit))
        .add_systems(
            FixedUpdate,
            control_script_system.before(PointMassPhysicsSet::AirData),
        )
        .add_systems(Update, readout_system.after(CockpitSet::Alarms));

    app.finish();
    app.cleanup();

    // First update runs the startup schedules and spawns the aircraft.
    app.update();

    let timestep = app.world().resource::<PhysicsConfig>().timestep;
    let steps = (SIM_DURATION / timestep).round() as u64;
    for _ in 0..steps {
        app.world_mut().run_schedule(FixedUpdate);
        app.world_mut().run_schedule(Update);
        // Driving schedules by hand bypasses the event maintenance that
        // normally runs in First, so age the buffers here.
        app.world_mut()
            .resource_mut::<Events<StallWarning>>()
            .update();
        app.world_mut()
            .resource_mut::<Events<TerrainWarning>>()
            .update();
    }

    Ok(())
}

/// Scripted pilot: a shallow cruise-climb, then a steeper climb, then a
/// banked turn held until the end of the flight.
fn control_script_system(clock: Res<SimClock>, mut query: Query<&mut AircraftState>) {
    for mut state in query.iter_mut() {
        if clock.elapsed < 30.0 {
            state.pitch = deg_to_rad(3.0);
            state.roll = 0.0;
            state.throttle = 0.7;
        } else if clock.elapsed < 60.0 {
            state.pitch = deg_to_rad(5.0);
            state.throttle = 0.85;
        } else {
            state.pitch = deg_to_rad(2.0);
            state.roll = deg_to_rad(15.0);
            state.throttle = 0.75;
        }
    }
}

/// Logs the panel once per simulated second and relays alarm events.
fn readout_system(
    clock: Res<SimClock>,
    panel: Res<InstrumentPanel>,
    physics: Res<PhysicsConfig>,
    query: Query<&AircraftState>,
    mut stall_events: EventReader<StallWarning>,
    mut terrain_events: EventReader<TerrainWarning>,
    mut next_log: Local<f64>,
) {
    for warning in stall_events.read() {
        warn!("STALL ({:?}) at t = {:.1} s", warning.reason, clock.elapsed);
    }
    for warning in terrain_events.read() {
        warn!(
            "TOO LOW TERRAIN, PULL UP! indicated {:.0} ft at t = {:.1} s",
            warning.indicated_altitude_ft, clock.elapsed
        );
    }

    if clock.elapsed + physics.timestep / 2.0 < *next_log {
        return;
    }
    *next_log = clock.elapsed + 1.0;

    for state in query.iter() {
        info!(
            "t = {:>5.1} s | alt {:7.1} m (ind {:7.0} ft{}) | ias {:5.1} m/s | hdg {:6.1} deg | vs {:+6.2} m/s",
            clock.elapsed,
            state.altitude,
            panel.indicated_altitude_ft,
            if panel.failed { ", FAILED" } else { "" },
            panel.indicated_airspeed,
            panel.indicated_heading_deg,
            state.vertical_speed,
        );
    }
}
