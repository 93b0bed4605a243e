use bevy::prelude::*;

use crate::components::{AircraftState, FlightData, PointMassConfig};
use crate::resources::{PhysicsConfig, SimClock};

/// Advances the kinematic state one timestep from the forces computed by
/// the earlier pipeline stages. Explicit Euler: every state variable is
/// advanced with the derivative current at entry, so altitude moves by the
/// pre-update vertical speed.
///
/// The heading update is a simplified lateral-coupling heuristic (bank
/// tilts the lift vector, scaled by the static margin), not a true
/// yaw-moment equation.
pub fn integrate_state(
    state: &mut AircraftState,
    data: &FlightData,
    mass: f64,
    static_margin: f64,
    dt: f64,
) {
    let FlightData {
        lift,
        drag,
        thrust,
        weight,
        slope,
        ..
    } = *data;

    state.altitude += state.vertical_speed * dt;

    let vertical_force = (lift * slope.cos() - drag * slope.sin()) * state.roll.cos()
        + thrust * state.pitch.sin()
        - weight;
    state.vertical_speed += vertical_force * dt / mass;

    let horizontal_force = -lift * slope.sin() - drag * slope.cos() + thrust * state.pitch.cos();
    state.horizontal_speed += horizontal_force * dt / mass;

    state.heading += dt * static_margin * state.roll.sin() * lift;
}

/// Final stage of the physics pipeline: completes the force set with the
/// weight term and mutates the aircraft state in place.
pub fn physics_integrator_system(
    mut query: Query<(&mut AircraftState, &PointMassConfig, &mut FlightData)>,
    physics: Res<PhysicsConfig>,
) {
    for (mut state, config, mut data) in query.iter_mut() {
        data.weight = config.mass * physics.gravity;
        integrate_state(
            &mut state,
            &data,
            config.mass,
            config.static_margin,
            physics.timestep,
        );
    }
}

/// Advances the simulation clock by one timestep, after integration.
pub fn advance_sim_clock(mut clock: ResMut<SimClock>, physics: Res<PhysicsConfig>) {
    clock.elapsed += physics.timestep;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MASS: f64 = 100_000.0;
    const STATIC_MARGIN: f64 = 0.25;
    const DT: f64 = 0.01;

    fn level_state() -> AircraftState {
        AircraftState {
            pitch: 0.0,
            roll: 0.0,
            heading: 0.0,
            altitude: 1000.0,
            vertical_speed: 0.0,
            horizontal_speed: 100.0,
            throttle: 1.0,
        }
    }

    fn balanced_forces(weight: f64, drag: f64) -> FlightData {
        FlightData {
            lift: weight,
            drag,
            thrust: drag,
            weight,
            slope: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_steady_state_stays_steady() {
        // Level unaccelerated flight: lift balances weight, thrust balances
        // drag. One step must leave both speeds unchanged.
        let mut state = level_state();
        let data = balanced_forces(MASS * 9.81, 50_000.0);

        integrate_state(&mut state, &data, MASS, STATIC_MARGIN, DT);

        assert_relative_eq!(state.vertical_speed, 0.0);
        assert_relative_eq!(state.horizontal_speed, 100.0);
        assert_relative_eq!(state.heading, 0.0);
    }

    #[test]
    fn test_altitude_uses_pre_update_vertical_speed() {
        // Strong net vertical force, but starting from zero vertical speed:
        // altitude must not move on the first step.
        let mut state = level_state();
        let data = FlightData {
            lift: 2.0 * MASS * 9.81,
            weight: MASS * 9.81,
            ..Default::default()
        };

        integrate_state(&mut state, &data, MASS, STATIC_MARGIN, DT);

        assert_relative_eq!(state.altitude, 1000.0);
        assert!(state.vertical_speed > 0.0);

        // The second step moves altitude by the speed gained in the first.
        let climb_rate = state.vertical_speed;
        integrate_state(&mut state, &data, MASS, STATIC_MARGIN, DT);
        assert_relative_eq!(state.altitude, 1000.0 + climb_rate * DT);
    }

    #[test]
    fn test_unbalanced_drag_decelerates() {
        let mut state = level_state();
        let weight = MASS * 9.81;
        let data = FlightData {
            lift: weight,
            drag: 80_000.0,
            thrust: 20_000.0,
            weight,
            slope: 0.0,
            ..Default::default()
        };

        integrate_state(&mut state, &data, MASS, STATIC_MARGIN, DT);

        assert!(state.horizontal_speed < 100.0);
        assert_relative_eq!(
            state.horizontal_speed,
            100.0 + (20_000.0 - 80_000.0) * DT / MASS
        );
    }

    #[test]
    fn test_bank_turns_heading_toward_roll_sign() {
        let weight = MASS * 9.81;
        let data = balanced_forces(weight, 50_000.0);

        let mut right = level_state();
        right.roll = 0.2;
        integrate_state(&mut right, &data, MASS, STATIC_MARGIN, DT);
        assert!(right.heading > 0.0);

        let mut left = level_state();
        left.roll = -0.2;
        integrate_state(&mut left, &data, MASS, STATIC_MARGIN, DT);
        assert!(left.heading < 0.0);
    }

    #[test]
    fn test_wings_level_holds_heading() {
        let mut state = level_state();
        let data = balanced_forces(MASS * 9.81, 40_000.0);
        integrate_state(&mut state, &data, MASS, STATIC_MARGIN, DT);
        assert_relative_eq!(state.heading, 0.0);
    }

    #[test]
    fn test_thrust_pitched_up_gains_vertical_speed() {
        let mut state = level_state();
        state.pitch = 0.3;
        let weight = MASS * 9.81;
        let data = FlightData {
            lift: weight,
            drag: 0.0,
            thrust: 300_000.0,
            weight,
            slope: 0.0,
            ..Default::default()
        };

        integrate_state(&mut state, &data, MASS, STATIC_MARGIN, DT);

        assert!(state.vertical_speed > 0.0);
        assert_relative_eq!(
            state.vertical_speed,
            300_000.0 * 0.3f64.sin() * DT / MASS,
            epsilon = 1e-12
        );
    }
}
