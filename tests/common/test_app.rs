use bevy::prelude::*;

use glidepath::components::{AircraftState, FlightData, PointMassConfig, StartConfig};
use glidepath::plugins::{CockpitConfig, CockpitPlugin, EnvironmentPlugin, PointMassAircraftPlugin};
use glidepath::resources::{AtmosphereConfig, PhysicsConfig};
use glidepath::systems::{InstrumentPanel, StallWarning, TerrainWarning};

/// Builder for a deterministic test application. Physics steps are driven
/// by running the `FixedUpdate` schedule directly, so one call is exactly
/// one timestep regardless of wall time; the cockpit layer is run the same
/// way through `Update`.
pub struct TestAppBuilder {
    aircraft_config: PointMassConfig,
    start: StartConfig,
    physics: PhysicsConfig,
    atmosphere: Option<AtmosphereConfig>,
    cockpit: Option<CockpitConfig>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft_config: PointMassConfig::default(),
            start: StartConfig::default(),
            physics: PhysicsConfig::default(),
            atmosphere: None,
            cockpit: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: PointMassConfig) -> Self {
        self.aircraft_config = config;
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.start = start;
        self
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn with_atmosphere(mut self, atmosphere: AtmosphereConfig) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }

    pub fn with_cockpit(mut self, cockpit: CockpitConfig) -> Self {
        self.cockpit = Some(cockpit);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(self.physics);

        let environment = match self.atmosphere {
            Some(config) => EnvironmentPlugin::with_config(config),
            None => EnvironmentPlugin::new(),
        };
        app.add_plugins(environment);
        app.add_plugins(PointMassAircraftPlugin::new(self.aircraft_config, self.start));

        if let Some(cockpit) = self.cockpit {
            app.add_plugins(CockpitPlugin::new(cockpit));
        }

        app.finish();
        app.cleanup();
        // First update runs the startup schedules and spawns the aircraft.
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs `steps` physics timesteps.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Runs one pass of the cockpit layer.
    pub fn run_cockpit(&mut self) {
        self.app.world_mut().run_schedule(Update);
    }

    pub fn state(&mut self) -> AircraftState {
        let mut query = self.app.world_mut().query::<&AircraftState>();
        *query.get_single(self.app.world()).expect("aircraft not spawned")
    }

    pub fn flight_data(&mut self) -> FlightData {
        let mut query = self.app.world_mut().query::<&FlightData>();
        *query.get_single(self.app.world()).expect("aircraft not spawned")
    }

    pub fn edit_state(&mut self, edit: impl FnOnce(&mut AircraftState)) {
        let mut query = self.app.world_mut().query::<&mut AircraftState>();
        let mut state = query
            .get_single_mut(self.app.world_mut())
            .expect("aircraft not spawned");
        edit(&mut state);
    }

    pub fn panel(&self) -> InstrumentPanel {
        self.app.world().resource::<InstrumentPanel>().clone()
    }

    pub fn stall_warnings(&self) -> Vec<StallWarning> {
        let events = self.app.world().resource::<Events<StallWarning>>();
        events.get_cursor().read(events).copied().collect()
    }

    pub fn terrain_warnings(&self) -> Vec<TerrainWarning> {
        let events = self.app.world().resource::<Events<TerrainWarning>>();
        events.get_cursor().read(events).copied().collect()
    }

    pub fn clear_warnings(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<Events<StallWarning>>()
            .clear();
        self.app
            .world_mut()
            .resource_mut::<Events<TerrainWarning>>()
            .clear();
    }
}
