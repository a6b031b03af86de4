use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat on-disk layout of an aircraft data file.
///
/// The induced drag factor is not stored; it is derived from the aspect
/// ratio when the file is converted into `AircraftProperties`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAircraftProperties {
    /// Aircraft identification
    pub name: String,

    /// Mass and geometry
    pub empty_mass: f64,
    pub max_fuel: f64,
    pub wing_area: f64,
    pub wing_span: f64,

    /// Propulsion
    pub max_thrust: f64,
    #[serde(default)]
    pub thrust_military: f64,
    pub thrust_sfc: f64,

    /// Aerodynamic coefficients
    #[serde(default)]
    pub cl0: f64,
    pub cl_alpha: f64,
    pub cd0: f64,
    pub cl_max: f64,

    /// Control effectiveness
    pub aileron_effect: f64,
    pub elevator_effect: f64,
    pub rudder_effect: f64,

    /// Flight envelope
    pub critical_aoa_positive: f64,
    pub critical_aoa_negative: f64,
    pub min_maneuverable_speed: f64,
    pub max_speed: f64,
}

impl RawAircraftProperties {
    /// Checks the physical sanity of the raw values before they are used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(&[
            ("empty_mass", self.empty_mass),
            ("wing_area", self.wing_area),
            ("wing_span", self.wing_span),
            ("max_speed", self.max_speed),
            ("cl_max", self.cl_max),
        ])?;
        require_non_negative(&[
            ("max_fuel", self.max_fuel),
            ("max_thrust", self.max_thrust),
            ("thrust_military", self.thrust_military),
            ("thrust_sfc", self.thrust_sfc),
            ("cd0", self.cd0),
            ("min_maneuverable_speed", self.min_maneuverable_speed),
        ])?;
        require_aoa_range(self.critical_aoa_negative, self.critical_aoa_positive)
    }
}

pub(crate) fn require_positive(values: &[(&str, f64)]) -> Result<(), ConfigError> {
    for &(name, value) in values {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

pub(crate) fn require_non_negative(values: &[(&str, f64)]) -> Result<(), ConfigError> {
    for &(name, value) in values {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be non-negative, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

/// The stall clamp needs `negative < 0 < positive`; NaN fails both comparisons.
pub(crate) fn require_aoa_range(negative: f64, positive: f64) -> Result<(), ConfigError> {
    if negative < 0.0 && positive > 0.0 && negative.is_finite() && positive.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "critical AOA range [{}, {}] must straddle zero",
            negative, positive
        )))
    }
}
