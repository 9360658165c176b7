//! Declarative settings for gravity-field model creation

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Gravity field representations available for automatic model setup
///
/// Acts as the discriminant of the settings family; settings variants not
/// covered by this enum cannot be turned into a model by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GravityFieldType {
    /// Point-mass field with a caller-supplied gravitational parameter
    Central,

    /// Point-mass field whose gravitational parameter is resolved at
    /// construction time from an ephemeris/constants source, keyed by the
    /// body name
    CentralFromEphemeris,

    /// Spherical-harmonic expansion about a reference radius
    SphericalHarmonic,
}

impl GravityFieldType {
    /// Display name for the field type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Central => "Central (Point Mass)",
            Self::CentralFromEphemeris => "Central (Ephemeris)",
            Self::SphericalHarmonic => "Spherical Harmonics",
        }
    }
}

/// Settings for a gravity-field model, one variant per representation
///
/// Construct through the dedicated constructors; every variant fixes its own
/// [`GravityFieldType`], so the tag can never disagree with the payload.
/// Instances are read-only configuration: reconfiguring a body means
/// building a new settings value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GravityFieldSettings {
    /// Point mass with an explicit gravitational parameter (m³/s²)
    Central { gravitational_parameter: f64 },

    /// Point mass, gravitational parameter looked up by body name
    CentralFromEphemeris,

    /// Spherical-harmonic field expansion
    SphericalHarmonic(SphericalHarmonicsSettings),
}

impl GravityFieldSettings {
    /// Settings for a point-mass field with gravitational parameter `mu`
    pub fn central(mu: f64) -> Self {
        Self::Central {
            gravitational_parameter: mu,
        }
    }

    /// Settings for a point-mass field resolved from the ephemeris source
    pub fn central_from_ephemeris() -> Self {
        Self::CentralFromEphemeris
    }

    /// Settings for a spherical-harmonic field
    ///
    /// Coefficient matrices are indexed `[degree][order]` and geodesy
    /// normalized; they are stored as supplied, no renormalization happens
    /// here or in the factory.
    pub fn spherical_harmonic(
        gravitational_parameter: f64,
        reference_radius: f64,
        cosine_coefficients: DMatrix<f64>,
        sine_coefficients: DMatrix<f64>,
        associated_reference_frame: impl Into<String>,
    ) -> Self {
        Self::SphericalHarmonic(SphericalHarmonicsSettings {
            gravitational_parameter,
            reference_radius,
            cosine_coefficients,
            sine_coefficients,
            associated_reference_frame: associated_reference_frame.into(),
        })
    }

    /// The discriminant describing which model this settings value produces
    pub fn field_type(&self) -> GravityFieldType {
        match self {
            Self::Central { .. } => GravityFieldType::Central,
            Self::CentralFromEphemeris => GravityFieldType::CentralFromEphemeris,
            Self::SphericalHarmonic(_) => GravityFieldType::SphericalHarmonic,
        }
    }
}

/// Data for a spherical-harmonic gravity field expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphericalHarmonicsSettings {
    /// Gravitational parameter of the field (m³/s²)
    pub gravitational_parameter: f64,

    /// Reference radius of the expansion (m), must be positive
    pub reference_radius: f64,

    /// Cosine coefficients, geodesy normalized, indexed `[degree][order]`
    pub cosine_coefficients: DMatrix<f64>,

    /// Sine coefficients, same dimensions as the cosine matrix
    pub sine_coefficients: DMatrix<f64>,

    /// Body-fixed frame the coefficients are expressed in (e.g. "IAU_EARTH")
    pub associated_reference_frame: String,
}

impl SphericalHarmonicsSettings {
    /// Maximum degree of the expansion (rows minus one)
    pub fn maximum_degree(&self) -> usize {
        self.cosine_coefficients.nrows().saturating_sub(1)
    }

    /// Maximum order of the expansion (columns minus one)
    pub fn maximum_order(&self) -> usize {
        self.cosine_coefficients.ncols().saturating_sub(1)
    }
}
