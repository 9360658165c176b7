//! Runtime gravity-field model objects
//!
//! Models are pure data from this crate's perspective: they hold the values
//! a propagation environment needs to evaluate gravitational accelerations,
//! but the evaluation itself lives with the propagation code. The factory
//! hands them out as `Arc<GravityFieldModel>` so the environment, the
//! propagator, and any analysis code can share one instance without copying
//! coefficient matrices.

use nalgebra::DMatrix;

/// A constructed gravity-field model, ready to attach to a body
#[derive(Debug, Clone)]
pub enum GravityFieldModel {
    /// Point-mass field
    PointMass(PointMassGravityField),

    /// Spherical-harmonic field
    SphericalHarmonics(SphericalHarmonicsGravityField),
}

impl GravityFieldModel {
    /// Gravitational parameter of the field (m³/s²)
    pub fn gravitational_parameter(&self) -> f64 {
        match self {
            Self::PointMass(field) => field.gravitational_parameter(),
            Self::SphericalHarmonics(field) => field.gravitational_parameter(),
        }
    }

    /// Model name for debugging and logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointMass(_) => "Point Mass Gravity Field",
            Self::SphericalHarmonics(_) => "Spherical Harmonics Gravity Field",
        }
    }
}

/// Point-mass gravity field: the entire mass concentrated at the origin
#[derive(Debug, Clone, Copy)]
pub struct PointMassGravityField {
    gravitational_parameter: f64,
}

impl PointMassGravityField {
    /// Create a point-mass field with gravitational parameter `mu`
    pub fn new(mu: f64) -> Self {
        Self {
            gravitational_parameter: mu,
        }
    }

    /// Gravitational parameter (m³/s²)
    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }
}

/// Spherical-harmonic gravity field expansion
///
/// Stores the geodesy-normalized coefficients exactly as configured; the
/// central `(0,0)` cosine term is conventionally 1 but that is not enforced.
#[derive(Debug, Clone)]
pub struct SphericalHarmonicsGravityField {
    gravitational_parameter: f64,
    reference_radius: f64,
    cosine_coefficients: DMatrix<f64>,
    sine_coefficients: DMatrix<f64>,
    fixed_reference_frame: String,
}

impl SphericalHarmonicsGravityField {
    /// Create a field from its expansion data
    ///
    /// The coefficient matrices must already have matching dimensions; the
    /// factory validates this before construction.
    pub fn new(
        gravitational_parameter: f64,
        reference_radius: f64,
        cosine_coefficients: DMatrix<f64>,
        sine_coefficients: DMatrix<f64>,
        fixed_reference_frame: impl Into<String>,
    ) -> Self {
        Self {
            gravitational_parameter,
            reference_radius,
            cosine_coefficients,
            sine_coefficients,
            fixed_reference_frame: fixed_reference_frame.into(),
        }
    }

    /// Gravitational parameter (m³/s²)
    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    /// Reference radius of the expansion (m)
    pub fn reference_radius(&self) -> f64 {
        self.reference_radius
    }

    /// Geodesy-normalized cosine coefficients, indexed `[degree][order]`
    pub fn cosine_coefficients(&self) -> &DMatrix<f64> {
        &self.cosine_coefficients
    }

    /// Geodesy-normalized sine coefficients, indexed `[degree][order]`
    pub fn sine_coefficients(&self) -> &DMatrix<f64> {
        &self.sine_coefficients
    }

    /// Body-fixed frame the coefficients are referred to
    pub fn fixed_reference_frame(&self) -> &str {
        &self.fixed_reference_frame
    }

    /// Maximum degree of the expansion
    pub fn maximum_degree(&self) -> usize {
        self.cosine_coefficients.nrows().saturating_sub(1)
    }

    /// Maximum order of the expansion
    pub fn maximum_order(&self) -> usize {
        self.cosine_coefficients.ncols().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_mass_parameter() {
        let field = PointMassGravityField::new(3.986004418e14);
        assert_eq!(field.gravitational_parameter(), 3.986004418e14);

        let model = GravityFieldModel::PointMass(field);
        assert_eq!(model.gravitational_parameter(), 3.986004418e14);
        assert_eq!(model.name(), "Point Mass Gravity Field");
    }

    #[test]
    fn test_spherical_harmonics_accessors() {
        let cosine = DMatrix::from_element(4, 4, 0.5);
        let sine = DMatrix::from_element(4, 4, -0.5);
        let field = SphericalHarmonicsGravityField::new(
            4.9048695e12,
            1737400.0,
            cosine.clone(),
            sine.clone(),
            "IAU_MOON",
        );

        assert_eq!(field.gravitational_parameter(), 4.9048695e12);
        assert_eq!(field.reference_radius(), 1737400.0);
        assert_eq!(field.cosine_coefficients(), &cosine);
        assert_eq!(field.sine_coefficients(), &sine);
        assert_eq!(field.fixed_reference_frame(), "IAU_MOON");
        assert_eq!(field.maximum_degree(), 3);
        assert_eq!(field.maximum_order(), 3);
    }
}
