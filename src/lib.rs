//! Gravity-field model setup for orbital simulation environments
//!
//! This crate translates declarative gravity-field settings into concrete
//! runtime models that a propagation environment can attach to its bodies.
//! Settings describe *what* field a body should have (point mass, point mass
//! resolved from an ephemeris table, spherical harmonics); the factory in
//! [`field`] validates them and produces a shared model handle.
//!
//! # Example
//!
//! ```
//! use gravfield::ephemeris::ConstantsEphemeris;
//! use gravfield::field::{create_gravity_field_model, GravityFieldSettings};
//!
//! let settings = GravityFieldSettings::central(3.986004418e14);
//! let ephemeris = ConstantsEphemeris::new();
//!
//! let model = create_gravity_field_model(&settings, "Earth", &ephemeris).unwrap();
//! assert_eq!(model.gravitational_parameter(), 3.986004418e14);
//! ```

pub mod ephemeris;
pub mod field;

pub use ephemeris::{
    ConstantsEphemeris, EphemerisError, GravitationalParameterSource, TableEphemeris,
};
pub use field::{
    create_gravity_field_model, GravityFieldError, GravityFieldModel, GravityFieldSettings,
    GravityFieldType,
};
