use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{DENSITY_MODEL_CEILING, ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_TEMP};

// Closed-form barometric approximation, troposphere-fitted.
const DENSITY_SCALE: f64 = 352.995;
const ALTITUDE_FACTOR: f64 = 0.000_022_557_7;
const DENSITY_EXPONENT: f64 = 5.25516;
const LAPSE_RATE: f64 = 0.0065; // K/m

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AtmosphereType {
    /// Fixed density regardless of altitude.
    Constant,
    /// Closed-form barometric density-altitude model.
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
        }
    }
}

/// Atmosphere model shared by the aerodynamic and propulsion stages.
///
/// Referentially transparent: density depends only on the altitude argument
/// and the immutable configuration.
#[derive(Resource, Debug, Clone)]
pub struct EnvironmentModel {
    config: AtmosphereConfig,
}

impl EnvironmentModel {
    pub fn new(config: &AtmosphereConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Air density (kg/m^3) at the given altitude (m).
    ///
    /// For the standard model, altitude is clamped to the model ceiling
    /// before evaluation so the fractional power never sees a negative
    /// base; the result is always a finite real number.
    pub fn density(&self, altitude: f64) -> f64 {
        match self.config.model_type {
            AtmosphereType::Constant => self.config.sea_level_density,
            AtmosphereType::Standard => {
                let altitude = altitude.min(DENSITY_MODEL_CEILING);
                DENSITY_SCALE * (1.0 - ALTITUDE_FACTOR * altitude).powf(DENSITY_EXPONENT)
                    / (ISA_SEA_LEVEL_TEMP - LAPSE_RATE * altitude)
            }
        }
    }

    /// Sea-level density of this atmosphere.
    pub fn sea_level_density(&self) -> f64 {
        self.density(0.0)
    }
}

impl Default for EnvironmentModel {
    fn default() -> Self {
        Self::new(&AtmosphereConfig::default())
    }
}
