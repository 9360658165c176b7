//! Loading gravitational-parameter tables from JSON files

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use super::{EphemerisError, GravitationalParameterSource};

/// Gravitational-parameter source backed by a user-supplied table
///
/// Useful for simulations of bodies outside the built-in constants (small
/// bodies, exoplanets) or for overriding a constant with a mission-specific
/// value. Keys are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct TableEphemeris {
    parameters: HashMap<String, f64>,
}

impl TableEphemeris {
    /// Build a source from a name→μ map (μ in m³/s²)
    pub fn from_map(parameters: HashMap<String, f64>) -> Self {
        let parameters = parameters
            .into_iter()
            .map(|(name, mu)| (name.to_ascii_lowercase(), mu))
            .collect();
        Self { parameters }
    }

    /// Number of bodies in the table
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl GravitationalParameterSource for TableEphemeris {
    fn gravitational_parameter(&self, body: &str) -> Result<f64, EphemerisError> {
        self.parameters
            .get(&body.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| EphemerisError::UnknownBody {
                body: body.to_string(),
            })
    }
}

/// Load a gravitational-parameter table from a JSON file
///
/// The file is a flat object mapping body names to parameters in m³/s²:
///
/// ```json
/// { "Ceres": 6.26325e10, "Vesta": 1.72883e10 }
/// ```
pub fn load_parameter_table(path: impl AsRef<Path>) -> Result<TableEphemeris> {
    let path = path.as_ref();
    log::info!("Loading gravitational parameters from {:?}", path);

    let file = File::open(path)
        .with_context(|| format!("Failed to open parameter table: {:?}", path))?;

    let reader = BufReader::new(file);
    let raw: HashMap<String, f64> =
        serde_json::from_reader(reader).with_context(|| "Failed to parse parameter table JSON")?;

    log::info!("Loaded gravitational parameters for {} bodies", raw.len());
    Ok(TableEphemeris::from_map(raw))
}
