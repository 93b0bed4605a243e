use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::constants::GRAVITY;

/// Fixed-timestep physics configuration.
///
/// Explicit Euler is only stable and accurate for small steps; the caller
/// chooses `timestep` and owns numerical stability at large values. The
/// pipeline never sub-steps or adapts internally.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Integration timestep (s).
    pub timestep: f64,
    /// Gravitational acceleration (m/s^2).
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 0.01,
            gravity: GRAVITY,
        }
    }
}

/// Accumulated simulation time, advanced once per physics step.
///
/// The physics pipeline itself never reads a clock; this resource exists for
/// the cockpit layer (alarm onsets, failure timers), which keys off
/// simulation time rather than wall time.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimClock {
    /// Elapsed simulation time (s).
    pub elapsed: f64,
}
