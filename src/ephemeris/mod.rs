//! Gravitational-parameter sources
//!
//! The ephemeris-backed settings variant needs a name-to-parameter lookup at
//! model construction time. That lookup is expressed as the
//! [`GravitationalParameterSource`] trait so the factory stays testable with
//! a fake source and the data dependency stays explicit.
//!
//! # Implemented Sources
//!
//! - **ConstantsEphemeris**: built-in IAU/JPL gravitational parameters for
//!   the Sun, planets, Moon, and Pluto
//! - **TableEphemeris**: user-supplied name→μ table, loadable from JSON

mod loader;

pub use loader::{load_parameter_table, TableEphemeris};

/// Ephemeris lookup error types
#[derive(Debug, Clone)]
pub enum EphemerisError {
    /// The source has no entry for the requested body
    UnknownBody { body: String },

    /// The source itself could not be queried
    Unavailable { message: String },
}

impl std::fmt::Display for EphemerisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBody { body } => {
                write!(f, "No gravitational parameter known for body {}", body)
            }
            Self::Unavailable { message } => {
                write!(f, "Ephemeris source unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for EphemerisError {}

/// Trait for gravitational-parameter lookup by body name
///
/// Implementations must be thread-safe (Send + Sync); the factory may be
/// called concurrently for different bodies. A lookup may block on I/O if
/// the source is remote; no timeout is imposed here.
pub trait GravitationalParameterSource: Send + Sync {
    /// Gravitational parameter of `body` in m³/s²
    ///
    /// Fails with [`EphemerisError::UnknownBody`] when the source has no
    /// entry; implementations must not substitute a default value.
    fn gravitational_parameter(&self, body: &str) -> Result<f64, EphemerisError>;
}

/// Gravitational parameters of the major solar-system bodies (m³/s²)
///
/// Values are the IAU/JPL ephemeris constants; lookup is case-insensitive
/// on the body name.
const SOLAR_SYSTEM_MU: &[(&str, f64)] = &[
    ("sun", 1.32712440018e20),
    ("mercury", 2.2032e13),
    ("venus", 3.24859e14),
    ("earth", 3.986004418e14),
    ("moon", 4.9048695e12),
    ("mars", 4.282837e13),
    ("jupiter", 1.26686534e17),
    ("saturn", 3.7931187e16),
    ("uranus", 5.793939e15),
    ("neptune", 6.836529e15),
    ("pluto", 8.71e11),
];

/// Built-in constants source covering the major solar-system bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantsEphemeris;

impl ConstantsEphemeris {
    /// Create the built-in constants source
    pub fn new() -> Self {
        Self
    }

    /// Names of all bodies this source knows
    pub fn known_bodies(&self) -> impl Iterator<Item = &'static str> {
        SOLAR_SYSTEM_MU.iter().map(|(name, _)| *name)
    }
}

impl GravitationalParameterSource for ConstantsEphemeris {
    fn gravitational_parameter(&self, body: &str) -> Result<f64, EphemerisError> {
        let key = body.to_ascii_lowercase();
        SOLAR_SYSTEM_MU
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, mu)| *mu)
            .ok_or_else(|| EphemerisError::UnknownBody {
                body: body.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bodies() {
        let ephemeris = ConstantsEphemeris::new();

        let mu_earth = ephemeris.gravitational_parameter("Earth").unwrap();
        assert_eq!(mu_earth, 3.986004418e14);

        // Case-insensitive
        assert_eq!(
            ephemeris.gravitational_parameter("EARTH").unwrap(),
            mu_earth
        );

        let mu_sun = ephemeris.gravitational_parameter("Sun").unwrap();
        assert!(mu_sun > 1e20);
    }

    #[test]
    fn test_unknown_body() {
        let err = ConstantsEphemeris::new()
            .gravitational_parameter("Melancholia")
            .unwrap_err();

        match err {
            EphemerisError::UnknownBody { body } => assert_eq!(body, "Melancholia"),
            other => panic!("expected UnknownBody, got {:?}", other),
        }
    }

    #[test]
    fn test_every_listed_body_resolves() {
        let ephemeris = ConstantsEphemeris::new();
        for body in ephemeris.known_bodies() {
            let mu = ephemeris.gravitational_parameter(body).unwrap();
            assert!(mu > 0.0, "non-positive parameter for {}", body);
        }
    }
}
