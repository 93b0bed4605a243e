use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::utils::{deg_to_rad, lerp};

/// Aerodynamic coefficient configuration for the point-mass model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AeroConfig {
    /// Stall angle (degrees).
    pub stall_angle_deg: f64,
    /// Maximum lift coefficient, reached at the stall angle.
    pub cl_max: f64,
    /// Zero-lift drag coefficient of the polar.
    pub cd_zero: f64,
    /// Induced drag factor `k` of the polar `cd = cd0 + k*cl^2`. Reference
    /// sources use 0.05 or 0.06 depending on configuration; this is a
    /// tunable constant, not a universal physical law.
    pub induced_drag_factor: f64,
}

impl Default for AeroConfig {
    fn default() -> Self {
        Self {
            stall_angle_deg: 15.0,
            cl_max: 1.3,
            cd_zero: 0.02,
            induced_drag_factor: 0.06,
        }
    }
}

impl AeroConfig {
    /// Stall angle in radians.
    pub fn stall_angle(&self) -> f64 {
        deg_to_rad(self.stall_angle_deg)
    }

    /// Drag coefficient at the given angle of attack and lift coefficient.
    ///
    /// Below the stall angle magnitude this is the quadratic polar; at and
    /// above it, a linear ramp from the polar's value at `cl_max` up to 1.5
    /// at 90 degrees. Both branches agree at the stall boundary.
    pub fn drag_coefficient(&self, alpha: f64, cl: f64) -> f64 {
        let stall = self.stall_angle();
        if alpha.abs() < stall {
            return self.polar(cl);
        }
        let cd_at_stall = self.polar(self.cl_max);
        (1.5 - cd_at_stall) / (FRAC_PI_2 - stall) * (alpha.abs() - stall) + cd_at_stall
    }

    fn polar(&self, cl: f64) -> f64 {
        self.cd_zero + self.induced_drag_factor * cl * cl
    }
}

/// Piecewise-linear lift curve, precomputed once from [`AeroConfig`].
///
/// The breakpoint table is built in radians at construction and treated as
/// immutable afterwards, so lookups are read-only and safe to share.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct LiftCurve {
    /// Ordered (angle_rad, coefficient) breakpoints for non-negative alpha.
    breakpoints: Vec<(f64, f64)>,
}

impl LiftCurve {
    /// Builds the breakpoint table from the aerodynamic configuration.
    pub fn new(aero: &AeroConfig) -> Self {
        let stall = aero.stall_angle_deg;
        let points_deg = [
            (0.0, 0.0),
            (stall, aero.cl_max),
            (1.2 * stall, 0.8),
            (40.0, 0.8),
            (90.0, 0.0),
        ];
        Self {
            breakpoints: points_deg
                .iter()
                .map(|&(angle, cl)| (deg_to_rad(angle), cl))
                .collect(),
        }
    }

    /// Lift coefficient at the given angle of attack (rad).
    ///
    /// Odd in alpha: evaluated on the magnitude and multiplied by the sign,
    /// so `cl(-a) == -cl(a)` exactly. `signum` rather than a comparison so
    /// the identity holds bitwise at negative zero too.
    pub fn coefficient(&self, alpha: f64) -> f64 {
        alpha.signum() * self.lookup(alpha.abs())
    }

    /// Linear interpolation between the first breakpoint pair whose upper
    /// angle strictly exceeds the input. At and beyond the last breakpoint
    /// the curve is flat zero; the final segment's slope is never
    /// extrapolated.
    fn lookup(&self, alpha: f64) -> f64 {
        for pair in self.breakpoints.windows(2) {
            let (a0, c0) = pair[0];
            let (a1, c1) = pair[1];
            if alpha < a1 {
                return lerp(c0, c1, (alpha - a0) / (a1 - a0));
            }
        }
        0.0
    }
}
