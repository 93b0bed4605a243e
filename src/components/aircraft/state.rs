use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::StartConfig;

/// Kinematic and attitude state of a point-mass aircraft.
///
/// `pitch`, `roll`, and `throttle` are commanded externally (cockpit,
/// scripted controller, test) and are read-only to the physics pipeline.
/// `heading`, `altitude`, `vertical_speed`, and `horizontal_speed` are
/// written only by the integrator. Altitude is not clamped here; ground
/// collision is a collaborator concern.
///
/// Throttle is expected in [0, 1] but is not validated: out-of-range
/// commands propagate into whatever numeric result follows.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AircraftState {
    /// Commanded pitch attitude (rad).
    pub pitch: f64,
    /// Bank angle (rad).
    pub roll: f64,
    /// Accumulated yaw angle (rad).
    pub heading: f64,
    /// Altitude above sea level (m).
    pub altitude: f64,
    /// Vertical speed (m/s, positive up).
    pub vertical_speed: f64,
    /// Horizontal speed (m/s).
    pub horizontal_speed: f64,
    /// Throttle setting, nominally in [0, 1].
    pub throttle: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::from_start(&StartConfig::default())
    }
}

impl AircraftState {
    /// Creates the initial state from caller-supplied initial conditions.
    pub fn from_start(start: &StartConfig) -> Self {
        Self {
            pitch: start.pitch,
            roll: start.roll,
            heading: start.heading,
            altitude: start.altitude,
            vertical_speed: start.vertical_speed,
            horizontal_speed: start.horizontal_speed,
            throttle: start.throttle,
        }
    }
}

/// Quantities derived from [`AircraftState`] during one pipeline pass.
///
/// Every field is recomputed fresh each step by the air-data, aerodynamics,
/// propulsion, and integration stages; nothing here carries meaning across
/// steps and stale values must never be trusted.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlightData {
    /// Air density at the current altitude (kg/m^3).
    pub density: f64,
    /// Total speed, the Euclidean norm of the velocity components (m/s).
    pub speed: f64,
    /// Angle of attack (rad).
    pub alpha: f64,
    /// Set when the asin ratio had to be clamped into [-1, 1] this step.
    pub alpha_clamped: bool,
    /// Flight path angle, pitch minus angle of attack (rad).
    pub slope: f64,
    /// Dynamic pressure (Pa).
    pub dynamic_pressure: f64,
    /// Lift coefficient.
    pub cl: f64,
    /// Drag coefficient.
    pub cd: f64,
    /// Lift force (N).
    pub lift: f64,
    /// Drag force (N).
    pub drag: f64,
    /// Thrust force (N).
    pub thrust: f64,
    /// Weight force (N).
    pub weight: f64,
}
