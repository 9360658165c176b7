//! Default gravity-field settings per body
//!
//! Opinionated defaults for simulation setup: Earth gets a low-degree
//! spherical-harmonic field, every other body an ephemeris-backed point
//! mass. Callers wanting higher fidelity build their own settings.

use nalgebra::DMatrix;

use super::settings::GravityFieldSettings;

/// EGM96 gravitational parameter (m³/s²)
const EARTH_MU: f64 = 3.986004415e14;

/// EGM96 reference radius (m)
const EARTH_REFERENCE_RADIUS: f64 = 6378136.3;

/// Default settings for a body's gravity field
///
/// Earth (matched case-insensitively) gets a degree-and-order-2 EGM96
/// spherical-harmonic field in the IAU_Earth frame; any other body gets
/// point-mass settings resolved from the ephemeris source at model
/// construction time.
pub fn default_gravity_field_settings(body: &str) -> GravityFieldSettings {
    if body.eq_ignore_ascii_case("earth") {
        // EGM96 geodesy-normalized coefficients, degree and order 2
        let mut cosine = DMatrix::zeros(3, 3);
        cosine[(0, 0)] = 1.0;
        cosine[(2, 0)] = -4.84165371736e-4;
        cosine[(2, 2)] = 2.43914352398e-6;

        let mut sine = DMatrix::zeros(3, 3);
        sine[(2, 2)] = -1.40016683654e-6;

        GravityFieldSettings::spherical_harmonic(
            EARTH_MU,
            EARTH_REFERENCE_RADIUS,
            cosine,
            sine,
            "IAU_Earth",
        )
    } else {
        GravityFieldSettings::central_from_ephemeris()
    }
}
