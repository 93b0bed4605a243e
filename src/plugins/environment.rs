use bevy::prelude::*;

use crate::resources::{AtmosphereConfig, EnvironmentModel};

/// Installs the atmosphere model the aerodynamic and propulsion stages
/// read density from.
pub struct EnvironmentPlugin {
    config: Option<AtmosphereConfig>,
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: AtmosphereConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_default();
        app.insert_resource(EnvironmentModel::new(&config));
        app.insert_resource(config);
    }
}
