//! A reduced point-mass flight dynamics simulation.
//!
//! The numerical core advances a single aircraft's vertical speed, altitude,
//! horizontal speed, and heading one fixed timestep at a time from commanded
//! pitch, bank, and throttle. Forces come from a density-altitude model, a
//! piecewise lift curve with stall behavior, and a two-regime drag polar.
//! A separate cockpit layer consumes the integrator's outputs for instrument
//! display and alarm thresholds; it never feeds back into the model except
//! through the commanded inputs.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
