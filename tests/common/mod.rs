#![allow(dead_code)]

pub mod test_app;

pub use test_app::{TestApp, TestAppBuilder};

use glidepath::components::AircraftState;

/// Every kinematic quantity must stay a finite number; the core never
/// produces NaN or infinity for any input it accepts.
pub fn assert_state_finite(state: &AircraftState) {
    assert!(state.altitude.is_finite(), "altitude is not finite");
    assert!(state.vertical_speed.is_finite(), "vertical speed is not finite");
    assert!(
        state.horizontal_speed.is_finite(),
        "horizontal speed is not finite"
    );
    assert!(state.heading.is_finite(), "heading is not finite");
}
