use bevy::prelude::*;

use crate::components::{AircraftState, FlightData, PointMassConfig};
use crate::resources::EnvironmentModel;

/// Third stage of the physics pipeline: installed thrust from the throttle
/// command and the current air density.
pub fn propulsion_system(
    mut query: Query<(&AircraftState, &PointMassConfig, &mut FlightData)>,
    environment: Res<EnvironmentModel>,
) {
    let sea_level_density = environment.sea_level_density();
    for (state, config, mut data) in query.iter_mut() {
        data.thrust = config
            .propulsion
            .thrust(state.throttle, data.density, sea_level_density);
    }
}
