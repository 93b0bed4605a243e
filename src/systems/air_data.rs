use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{AircraftState, FlightData};
use crate::resources::EnvironmentModel;

const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6;

/// Air data derived from the kinematic state, the pipeline's first stage.
#[derive(Debug, Clone, Copy)]
pub struct AirDataValues {
    pub density: f64,
    pub speed: f64,
    pub alpha: f64,
    pub alpha_clamped: bool,
    pub slope: f64,
    pub dynamic_pressure: f64,
}

impl AirDataValues {
    /// Computes density, speed, angle of attack, and flight path angle for
    /// the current state. Pure: identical inputs give identical outputs.
    pub fn calculate(state: &AircraftState, density: f64) -> Self {
        let velocity = Vector2::new(state.horizontal_speed, state.vertical_speed);
        let speed = velocity.norm();

        let (alpha, alpha_clamped) = Self::calculate_alpha(state, speed);
        let slope = state.pitch - alpha;
        let dynamic_pressure = 0.5 * density * speed * speed;

        Self {
            density,
            speed,
            alpha,
            alpha_clamped,
            slope,
            dynamic_pressure,
        }
    }

    /// Angle of attack with the two domain corrections applied:
    /// below the airspeed threshold the velocity direction is undefined and
    /// alpha degenerates to the pitch attitude; otherwise the asin ratio is
    /// clamped into [-1, 1] so an inconsistent state (vertical speed
    /// magnitude exceeding total speed) yields a finite angle instead of
    /// NaN.
    fn calculate_alpha(state: &AircraftState, speed: f64) -> (f64, bool) {
        if speed < MIN_AIRSPEED_THRESHOLD {
            return (state.pitch, false);
        }
        alpha_from_ratio(state.pitch, state.vertical_speed / speed)
    }
}

/// Alpha from the raw climb ratio, clamping out-of-domain inputs. Returns
/// the angle and whether the clamp fired.
fn alpha_from_ratio(pitch: f64, ratio: f64) -> (f64, bool) {
    let clamped = !(-1.0..=1.0).contains(&ratio);
    (pitch - ratio.clamp(-1.0, 1.0).asin(), clamped)
}

/// First stage of the physics pipeline: refreshes [`FlightData`] with the
/// quantities every later stage reads.
pub fn air_data_system(
    mut query: Query<(&AircraftState, &mut FlightData)>,
    environment: Res<EnvironmentModel>,
) {
    for (state, mut data) in query.iter_mut() {
        let values = AirDataValues::calculate(state, environment.density(state.altitude));

        if values.alpha_clamped {
            warn!(
                "angle-of-attack ratio out of [-1, 1] (vz = {}, speed = {}), clamped",
                state.vertical_speed, values.speed
            );
        }

        data.density = values.density;
        data.speed = values.speed;
        data.alpha = values.alpha;
        data.alpha_clamped = values.alpha_clamped;
        data.slope = values.slope;
        data.dynamic_pressure = values.dynamic_pressure;
    }
}
