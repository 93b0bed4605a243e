use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat YAML layout for an aircraft configuration file.
#[derive(Debug, Deserialize)]
pub struct RawPointMassConfig {
    /// Aircraft identification
    pub name: String,

    /// Mass and geometry
    pub mass: f64,
    pub wing_area: f64,
    pub static_margin: f64,

    /// Propulsion
    pub engine_count: u32,
    pub rated_thrust: f64,
    #[serde(default = "default_density_scaled")]
    pub density_scaled_thrust: bool,

    /// Aerodynamics
    pub stall_angle_deg: f64,
    pub cl_max: f64,
    pub cd_zero: f64,
    pub induced_drag_factor: f64,
}

fn default_density_scaled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::aircraft::config::{PointMassConfig, ThrustModel};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    const AIRLINER_YAML: &str = r#"
name: Airliner
mass: 100000.0
wing_area: 180.0
static_margin: 0.25
engine_count: 2
rated_thrust: 180000.0
stall_angle_deg: 15.0
cl_max: 1.3
cd_zero: 0.02
induced_drag_factor: 0.06
"#;

    #[test]
    fn test_parse_flat_yaml() {
        let raw: RawPointMassConfig = serde_yaml::from_str(AIRLINER_YAML).unwrap();
        let config = PointMassConfig::from_raw_config(raw).unwrap();

        assert_eq!(config.name, "Airliner");
        assert_relative_eq!(config.mass, 100_000.0);
        assert_relative_eq!(config.wing_area, 180.0);
        assert_eq!(config.propulsion.engine_count, 2);
        // density_scaled_thrust defaults to true when omitted
        assert_eq!(config.propulsion.thrust_model, ThrustModel::DensityScaled);
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        let yaml = AIRLINER_YAML.replace("mass: 100000.0", "mass: -5.0");
        let raw: RawPointMassConfig = serde_yaml::from_str(&yaml).unwrap();
        let err = PointMassConfig::from_raw_config(raw).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_out_of_range_stall_angle() {
        let yaml = AIRLINER_YAML.replace("stall_angle_deg: 15.0", "stall_angle_deg: 95.0");
        let raw: RawPointMassConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(PointMassConfig::from_raw_config(raw).is_err());
    }
}
