use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::aircraft::config::loader::{ConfigError, RawPointMassConfig};
use crate::components::aircraft::config::{AeroConfig, PropulsionConfig, ThrustModel};

/// Immutable physical configuration of a point-mass aircraft.
///
/// Constructed once and treated as process-wide constants; none of these
/// values change during a simulation.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PointMassConfig {
    /// Name of the aircraft.
    pub name: String,
    /// Total mass (kg).
    pub mass: f64,
    /// Wing reference area (m^2).
    pub wing_area: f64,
    /// Lateral restoring-moment arm used by the heading heuristic (m).
    pub static_margin: f64,
    /// Engine configuration.
    pub propulsion: PropulsionConfig,
    /// Aerodynamic coefficient configuration.
    pub aero: AeroConfig,
}

impl Default for PointMassConfig {
    /// A generic twin-engine transport, the reference configuration.
    fn default() -> Self {
        Self {
            name: "GenericTransport".to_string(),
            mass: 100_000.0,
            wing_area: 180.0,
            static_margin: 0.25,
            propulsion: PropulsionConfig::default(),
            aero: AeroConfig::default(),
        }
    }
}

impl PointMassConfig {
    /// Loads a configuration from a flat YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let raw: RawPointMassConfig = serde_yaml::from_str(&contents)?;
        Self::from_raw_config(raw)
    }

    /// Converts the flat raw layout into the structured configuration,
    /// validating the physical parameters.
    pub fn from_raw_config(raw: RawPointMassConfig) -> Result<Self, ConfigError> {
        if raw.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive, got {}",
                raw.mass
            )));
        }
        if raw.wing_area <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "wing area must be positive, got {}",
                raw.wing_area
            )));
        }
        if !(raw.stall_angle_deg > 0.0 && raw.stall_angle_deg < 90.0) {
            return Err(ConfigError::ValidationError(format!(
                "stall angle must lie in (0, 90) degrees, got {}",
                raw.stall_angle_deg
            )));
        }
        if raw.engine_count == 0 {
            return Err(ConfigError::ValidationError(
                "at least one engine is required".to_string(),
            ));
        }

        let thrust_model = if raw.density_scaled_thrust {
            ThrustModel::DensityScaled
        } else {
            ThrustModel::Constant
        };

        Ok(Self {
            name: raw.name,
            mass: raw.mass,
            wing_area: raw.wing_area,
            static_margin: raw.static_margin,
            propulsion: PropulsionConfig {
                engine_count: raw.engine_count,
                rated_thrust: raw.rated_thrust,
                thrust_model,
            },
            aero: AeroConfig {
                stall_angle_deg: raw.stall_angle_deg,
                cl_max: raw.cl_max,
                cd_zero: raw.cd_zero,
                induced_drag_factor: raw.induced_drag_factor,
            },
        })
    }
}
