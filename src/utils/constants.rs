pub const GRAVITY: f64 = 9.81; // m/s^2
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

pub const FEET_PER_METER: f64 = 3.28084;

/// Altitude ceiling for the barometric density model. Above ~44330 m the
/// base of the fractional power goes negative and the closed form is
/// undefined in real arithmetic; inputs are clamped below that boundary.
pub const DENSITY_MODEL_CEILING: f64 = 44_000.0; // m
