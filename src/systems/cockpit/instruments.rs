use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::components::{AircraftState, FlightData};
use crate::plugins::CockpitConfig;
use crate::resources::SimClock;
use crate::utils::constants::FEET_PER_METER;
use crate::utils::rad_to_deg;

/// What the flight deck displays and what the alarm layer thresholds
/// against. Normally mirrors the true state; once the sensor failure is
/// injected it decouples and drifts.
///
/// This is strictly a consumer of the integrator's outputs; nothing here
/// ever feeds back into the physics pipeline.
#[derive(Resource, Debug, Clone, Default)]
pub struct InstrumentPanel {
    /// Displayed altitude (ft).
    pub indicated_altitude_ft: f64,
    /// Displayed airspeed (m/s).
    pub indicated_airspeed: f64,
    /// Displayed heading (degrees).
    pub indicated_heading_deg: f64,
    /// True (uncorrupted) angle of attack, for annunciator logic (rad).
    pub alpha: f64,
    /// Displays are no longer tracking the true state.
    pub failed: bool,
}

/// Seeded drift source for the failure injection, deterministic per seed.
#[derive(Resource, Debug, Clone)]
pub struct SensorFailureState {
    rng: ChaCha8Rng,
    initiated: bool,
}

impl SensorFailureState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            initiated: false,
        }
    }
}

/// Mirrors the true state onto the panel. Skipped once the failure has
/// latched: from then on the panel belongs to the drift system.
pub fn instrument_refresh_system(
    query: Query<(&AircraftState, &FlightData)>,
    mut panel: ResMut<InstrumentPanel>,
) {
    if panel.failed {
        return;
    }
    for (state, data) in query.iter() {
        panel.indicated_altitude_ft = state.altitude * FEET_PER_METER;
        panel.indicated_airspeed = data.speed;
        panel.indicated_heading_deg = rad_to_deg(state.heading);
        panel.alpha = data.alpha;
    }
}

/// Injects the pressure-sensor failure after the configured onset time:
/// the displayed altitude and airspeed snap to plausible-but-wrong values,
/// then drift upward every update. The true state is never touched.
pub fn instrument_failure_system(
    clock: Res<SimClock>,
    config: Res<CockpitConfig>,
    mut panel: ResMut<InstrumentPanel>,
    mut failure: ResMut<SensorFailureState>,
) {
    let Some(onset) = config.failure_onset else {
        return;
    };
    if clock.elapsed < onset {
        return;
    }

    if !failure.initiated {
        failure.initiated = true;
        panel.failed = true;
        panel.indicated_altitude_ft = 2500.0;
        panel.indicated_airspeed = 400.0;
        warn!("instrument failure injected at t = {:.1} s", clock.elapsed);
    }

    panel.indicated_altitude_ft += failure.rng.gen_range(10.0..40.0);
    panel.indicated_airspeed += failure.rng.gen_range(10.0..20.0);
}
