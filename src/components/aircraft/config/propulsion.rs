use serde::{Deserialize, Serialize};

/// How rated thrust responds to air density.
///
/// Reference sources disagree on whether thrust derates with altitude, so
/// both variants are exposed as configuration rather than guessing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustModel {
    /// Thrust scales with the density ratio to sea level.
    DensityScaled,
    /// Thrust is independent of altitude.
    Constant,
}

/// Engine configuration for the point-mass model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PropulsionConfig {
    /// Number of engines.
    pub engine_count: u32,
    /// Rated thrust per engine at sea level (N).
    pub rated_thrust: f64,
    /// Density response of the installed thrust.
    pub thrust_model: ThrustModel,
}

impl Default for PropulsionConfig {
    fn default() -> Self {
        Self {
            engine_count: 2,
            rated_thrust: 180_000.0,
            thrust_model: ThrustModel::DensityScaled,
        }
    }
}

impl PropulsionConfig {
    /// Total thrust for the given throttle setting and air densities.
    ///
    /// Thrust is linear in throttle. For [`ThrustModel::DensityScaled`] it
    /// is additionally multiplied by `density / sea_level_density`, which is
    /// exactly 1 at sea level.
    pub fn thrust(&self, throttle: f64, density: f64, sea_level_density: f64) -> f64 {
        let rated = f64::from(self.engine_count) * throttle * self.rated_thrust;
        match self.thrust_model {
            ThrustModel::DensityScaled => rated * density / sea_level_density,
            ThrustModel::Constant => rated,
        }
    }
}
