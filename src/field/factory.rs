//! Settings-to-model factory for gravity fields
//!
//! The single authoritative translation from a settings variant plus a body
//! name into a runtime model. Dispatch is an exhaustive match over the
//! settings sum type, so a newly added representation fails to compile until
//! every arm here is written.

use std::sync::Arc;

use crate::ephemeris::GravitationalParameterSource;

use super::model::{GravityFieldModel, PointMassGravityField, SphericalHarmonicsGravityField};
use super::settings::{GravityFieldSettings, GravityFieldType};

/// Gravity-field construction error types
#[derive(Debug, Clone)]
pub enum GravityFieldError {
    /// Settings are internally inconsistent (mismatched coefficient
    /// dimensions, non-positive reference radius, non-finite parameter)
    Configuration { body: String, message: String },

    /// The ephemeris/constants source could not supply a gravitational
    /// parameter for the body
    DataUnavailable { body: String, message: String },

    /// Settings variant not handled by the dispatching code
    ///
    /// Unreachable from [`create_gravity_field_model`] itself, whose match
    /// is exhaustive; kept for callers that layer their own dispatch over
    /// an extended settings set.
    UnsupportedSettings {
        body: String,
        field_type: GravityFieldType,
    },
}

impl std::fmt::Display for GravityFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { body, message } => {
                write!(f, "Invalid gravity field settings for body {}: {}", body, message)
            }
            Self::DataUnavailable { body, message } => {
                write!(
                    f,
                    "Gravitational parameter unavailable for body {}: {}",
                    body, message
                )
            }
            Self::UnsupportedSettings { body, field_type } => {
                write!(
                    f,
                    "Unsupported gravity field settings for body {}: {}",
                    body,
                    field_type.name()
                )
            }
        }
    }
}

impl std::error::Error for GravityFieldError {}

/// Create a gravity-field model from settings
///
/// # Arguments
///
/// * `settings` - Settings describing the field representation
/// * `body` - Name of the body the field belongs to, used diagnostically
///   and as the lookup key for the ephemeris-backed variant
/// * `ephemeris` - Gravitational-parameter source, consulted only by the
///   [`GravityFieldSettings::CentralFromEphemeris`] variant
///
/// # Returns
///
/// A shared handle to the constructed model. The settings are only read;
/// on success the handle is always usable, a failed construction leaves the
/// body without a model rather than substituting a default field.
pub fn create_gravity_field_model(
    settings: &GravityFieldSettings,
    body: &str,
    ephemeris: &dyn GravitationalParameterSource,
) -> Result<Arc<GravityFieldModel>, GravityFieldError> {
    let model = match settings {
        GravityFieldSettings::Central {
            gravitational_parameter,
        } => {
            if !gravitational_parameter.is_finite() {
                return Err(GravityFieldError::Configuration {
                    body: body.to_string(),
                    message: format!(
                        "gravitational parameter is not finite ({})",
                        gravitational_parameter
                    ),
                });
            }
            GravityFieldModel::PointMass(PointMassGravityField::new(*gravitational_parameter))
        }

        GravityFieldSettings::CentralFromEphemeris => {
            let mu = ephemeris.gravitational_parameter(body).map_err(|err| {
                GravityFieldError::DataUnavailable {
                    body: body.to_string(),
                    message: err.to_string(),
                }
            })?;
            GravityFieldModel::PointMass(PointMassGravityField::new(mu))
        }

        GravityFieldSettings::SphericalHarmonic(sh) => {
            let cosine = &sh.cosine_coefficients;
            let sine = &sh.sine_coefficients;

            if cosine.shape() != sine.shape() {
                return Err(GravityFieldError::Configuration {
                    body: body.to_string(),
                    message: format!(
                        "cosine coefficients are {}x{} but sine coefficients are {}x{}",
                        cosine.nrows(),
                        cosine.ncols(),
                        sine.nrows(),
                        sine.ncols()
                    ),
                });
            }

            if !(sh.reference_radius > 0.0) {
                return Err(GravityFieldError::Configuration {
                    body: body.to_string(),
                    message: format!(
                        "reference radius must be positive, got {}",
                        sh.reference_radius
                    ),
                });
            }

            if !sh.gravitational_parameter.is_finite() {
                return Err(GravityFieldError::Configuration {
                    body: body.to_string(),
                    message: format!(
                        "gravitational parameter is not finite ({})",
                        sh.gravitational_parameter
                    ),
                });
            }

            GravityFieldModel::SphericalHarmonics(SphericalHarmonicsGravityField::new(
                sh.gravitational_parameter,
                sh.reference_radius,
                cosine.clone(),
                sine.clone(),
                sh.associated_reference_frame.clone(),
            ))
        }
    };

    log::debug!(
        "Created {} for body {} ({})",
        model.name(),
        body,
        settings.field_type().name()
    );

    Ok(Arc::new(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{ConstantsEphemeris, EphemerisError};
    use nalgebra::DMatrix;

    struct EmptyEphemeris;

    impl GravitationalParameterSource for EmptyEphemeris {
        fn gravitational_parameter(&self, body: &str) -> Result<f64, EphemerisError> {
            Err(EphemerisError::UnknownBody {
                body: body.to_string(),
            })
        }
    }

    fn earth_sh_settings(sine_rows: usize) -> GravityFieldSettings {
        let mut cosine = DMatrix::zeros(3, 3);
        cosine[(0, 0)] = 1.0;
        cosine[(2, 0)] = -4.84165e-4;
        let sine = DMatrix::zeros(sine_rows, 3);

        GravityFieldSettings::spherical_harmonic(3.986e14, 6378137.0, cosine, sine, "IAU_EARTH")
    }

    #[test]
    fn test_central_point_mass() {
        let settings = GravityFieldSettings::central(3.986e14);
        let model = create_gravity_field_model(&settings, "Earth", &EmptyEphemeris).unwrap();

        assert!(matches!(*model, GravityFieldModel::PointMass(_)));
        assert_eq!(model.gravitational_parameter(), 3.986e14);
    }

    #[test]
    fn test_central_rejects_non_finite_parameter() {
        let settings = GravityFieldSettings::central(f64::NAN);
        let err = create_gravity_field_model(&settings, "Earth", &EmptyEphemeris).unwrap_err();
        assert!(matches!(err, GravityFieldError::Configuration { .. }));
    }

    #[test]
    fn test_central_from_ephemeris() {
        let settings = GravityFieldSettings::central_from_ephemeris();
        let ephemeris = ConstantsEphemeris::new();
        let model = create_gravity_field_model(&settings, "Earth", &ephemeris).unwrap();

        let mu = model.gravitational_parameter();
        assert!((mu - 3.986004418e14).abs() / mu < 1e-9);
    }

    #[test]
    fn test_central_from_ephemeris_unknown_body() {
        let settings = GravityFieldSettings::central_from_ephemeris();
        let err =
            create_gravity_field_model(&settings, "Xenu Prime", &ConstantsEphemeris::new())
                .unwrap_err();

        match err {
            GravityFieldError::DataUnavailable { body, .. } => assert_eq!(body, "Xenu Prime"),
            other => panic!("expected DataUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_spherical_harmonic_model() {
        let settings = earth_sh_settings(3);
        let model = create_gravity_field_model(&settings, "Earth", &EmptyEphemeris).unwrap();

        let GravityFieldModel::SphericalHarmonics(ref field) = *model else {
            panic!("expected spherical-harmonics model");
        };
        assert_eq!(field.gravitational_parameter(), 3.986e14);
        assert_eq!(field.reference_radius(), 6378137.0);
        assert_eq!(field.cosine_coefficients()[(0, 0)], 1.0);
        assert_eq!(field.cosine_coefficients()[(2, 0)], -4.84165e-4);
        assert_eq!(field.sine_coefficients().shape(), (3, 3));
        assert_eq!(field.fixed_reference_frame(), "IAU_EARTH");
    }

    #[test]
    fn test_mismatched_coefficient_dimensions() {
        let settings = earth_sh_settings(2);
        let err = create_gravity_field_model(&settings, "Earth", &EmptyEphemeris).unwrap_err();

        match err {
            GravityFieldError::Configuration { body, message } => {
                assert_eq!(body, "Earth");
                assert!(message.contains("3x3"));
                assert!(message.contains("2x3"));
            }
            other => panic!("expected Configuration, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_reference_radius() {
        for radius in [0.0, -6378137.0, f64::NAN] {
            let settings = GravityFieldSettings::spherical_harmonic(
                3.986e14,
                radius,
                DMatrix::zeros(3, 3),
                DMatrix::zeros(3, 3),
                "IAU_EARTH",
            );
            let err =
                create_gravity_field_model(&settings, "Earth", &EmptyEphemeris).unwrap_err();
            assert!(matches!(err, GravityFieldError::Configuration { .. }));
        }
    }

    #[test]
    fn test_shared_handle() {
        let settings = GravityFieldSettings::central(3.986e14);
        let model = create_gravity_field_model(&settings, "Earth", &EmptyEphemeris).unwrap();
        let second = Arc::clone(&model);

        assert_eq!(
            second.gravitational_parameter(),
            model.gravitational_parameter()
        );
        assert_eq!(Arc::strong_count(&model), 2);
    }

    #[test]
    fn test_error_display_names_body() {
        let err = GravityFieldError::DataUnavailable {
            body: "Vesta".to_string(),
            message: "no ephemeris entry".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("Vesta"));
        assert!(text.contains("no ephemeris entry"));
    }
}
