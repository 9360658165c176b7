//! Gravity-field settings and model construction
//!
//! This module is organized around a settings-to-model factory:
//!
//! - **GravityFieldSettings**: declarative description of the field a body
//!   should have, built once by whoever assembles the simulation
//!   configuration and immutable afterwards.
//! - **GravityFieldModel**: the runtime object handed to the environment,
//!   shared between consumers via `Arc`.
//! - **create_gravity_field_model**: the single dispatch point that
//!   validates a settings variant and constructs the matching model.
//!
//! # Example
//!
//! ```
//! use gravfield::ephemeris::ConstantsEphemeris;
//! use gravfield::field::{create_gravity_field_model, GravityFieldSettings};
//!
//! let settings = GravityFieldSettings::central_from_ephemeris();
//! let model = create_gravity_field_model(&settings, "Moon", &ConstantsEphemeris::new()).unwrap();
//! assert!(model.gravitational_parameter() > 0.0);
//! ```

mod defaults;
mod factory;
mod model;
mod settings;

pub use defaults::default_gravity_field_settings;
pub use factory::{create_gravity_field_model, GravityFieldError};
pub use model::{GravityFieldModel, PointMassGravityField, SphericalHarmonicsGravityField};
pub use settings::{GravityFieldSettings, GravityFieldType, SphericalHarmonicsSettings};
