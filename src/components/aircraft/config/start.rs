use serde::{Deserialize, Serialize};

/// Caller-supplied initial conditions for a simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StartConfig {
    /// Initial pitch attitude (rad).
    pub pitch: f64,
    /// Initial bank angle (rad).
    pub roll: f64,
    /// Initial heading (rad).
    pub heading: f64,
    /// Initial altitude (m).
    pub altitude: f64,
    /// Initial vertical speed (m/s).
    pub vertical_speed: f64,
    /// Initial horizontal speed (m/s).
    pub horizontal_speed: f64,
    /// Initial throttle setting in [0, 1].
    pub throttle: f64,
}

impl Default for StartConfig {
    /// Level cruise entry at 1000 m and 100 m/s, mid throttle.
    fn default() -> Self {
        Self {
            pitch: 0.0,
            roll: 0.0,
            heading: 0.0,
            altitude: 1000.0,
            vertical_speed: 0.0,
            horizontal_speed: 100.0,
            throttle: 0.5,
        }
    }
}
