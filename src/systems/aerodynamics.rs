use bevy::prelude::*;

use crate::components::{FlightData, LiftCurve, PointMassConfig};

/// Second stage of the physics pipeline: lift and drag coefficients from
/// the precomputed curve and polar, then the corresponding forces from
/// dynamic pressure and wing area.
///
/// Everything here is recomputed fresh from the current air data; forces
/// are never incrementally updated.
pub fn aero_force_system(mut query: Query<(&PointMassConfig, &LiftCurve, &mut FlightData)>) {
    for (config, curve, mut data) in query.iter_mut() {
        let cl = curve.coefficient(data.alpha);
        let cd = config.aero.drag_coefficient(data.alpha, cl);
        let qbar_area = data.dynamic_pressure * config.wing_area;

        data.cl = cl;
        data.cd = cd;
        data.lift = qbar_area * cl;
        data.drag = qbar_area * cd;
    }
}
