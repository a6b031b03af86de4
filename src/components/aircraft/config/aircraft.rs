use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::components::aircraft::config::loader::{
    require_aoa_range, require_non_negative, require_positive,
};
use crate::components::aircraft::config::{ConfigError, RawAircraftProperties};
use crate::utils::{SimError, OSWALD_EFFICIENCY};

/// Static, per-type description of an aircraft. Read every step, replaced
/// only through the engine's explicit setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProperties {
    /// Display name of the aircraft.
    pub name: String,

    /// Structural mass without fuel (kg).
    pub empty_mass: f64,
    /// Fuel capacity (kg).
    pub max_fuel: f64,
    /// Reference wing area (m²).
    pub wing_area: f64,
    /// Wing span (m).
    pub wing_span: f64,

    /// Maximum thrust, with afterburner where fitted (N).
    pub max_thrust: f64,
    /// Thrust at military power (N). Carried for consumers, not used by the step.
    pub thrust_military: f64,
    /// Specific fuel consumption (kg fuel per N·s).
    pub thrust_sfc: f64,

    /// Lift coefficient at zero angle of attack.
    pub cl0: f64,
    /// Lift curve slope (per radian).
    pub cl_alpha: f64,
    /// Parasitic drag coefficient.
    pub cd0: f64,
    /// Induced drag factor.
    pub k: f64,
    /// Maximum lift coefficient magnitude.
    pub cl_max: f64,

    pub aileron_effect: f64,
    pub elevator_effect: f64,
    pub rudder_effect: f64,

    /// Critical angle of attack, positive side (rad).
    pub critical_aoa_positive: f64,
    /// Critical angle of attack, negative side (rad).
    pub critical_aoa_negative: f64,
    /// Minimum maneuverable speed (m/s).
    pub min_maneuverable_speed: f64,
    /// Never-exceed speed used by the high-speed drag and pitch terms (m/s).
    pub max_speed: f64,
}

impl Default for AircraftProperties {
    /// The F-16 is the only built-in type and therefore the default.
    fn default() -> Self {
        Self::f16()
    }
}

impl AircraftProperties {
    /// Creates properties from a given source.
    ///
    /// # Arguments
    /// * `source` - A preset type or the path of a YAML aircraft data file.
    ///
    /// # Returns
    /// A `Result` containing the properties or an error if the file fails to load.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Preset(aircraft_type) => Ok(Self::from_preset(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    pub fn from_preset(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::F16 => Self::f16(),
        }
    }

    pub fn f16() -> Self {
        Self {
            name: "F-16 Fighting Falcon".to_string(),
            empty_mass: 8570.0,
            max_fuel: 3175.0,
            wing_area: 27.87,
            wing_span: 9.96,
            max_thrust: 127000.0,
            thrust_military: 76000.0,
            thrust_sfc: 0.00008,
            cl0: 0.0,
            cl_alpha: 5.5,
            cd0: 0.02,
            k: 0.042,
            cl_max: 1.4,
            aileron_effect: 0.5,
            elevator_effect: 0.4,
            rudder_effect: 0.3,
            critical_aoa_positive: 0.384,  // ~22 degrees
            critical_aoa_negative: -0.262, // ~-15 degrees
            min_maneuverable_speed: 20.0,
            max_speed: 686.0, // ~Mach 2 at sea level
        }
    }

    /// Reads aircraft data from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        let raw: RawAircraftProperties = serde_yaml::from_str(&file_contents)?;
        Self::from_raw(raw)
    }

    /// Converts validated raw data, deriving the induced drag factor.
    pub fn from_raw(raw: RawAircraftProperties) -> Result<Self, ConfigError> {
        raw.validate()?;
        let mut props = Self {
            name: raw.name,
            empty_mass: raw.empty_mass,
            max_fuel: raw.max_fuel,
            wing_area: raw.wing_area,
            wing_span: raw.wing_span,
            max_thrust: raw.max_thrust,
            thrust_military: raw.thrust_military,
            thrust_sfc: raw.thrust_sfc,
            cl0: raw.cl0,
            cl_alpha: raw.cl_alpha,
            cd0: raw.cd0,
            k: 0.0,
            cl_max: raw.cl_max,
            aileron_effect: raw.aileron_effect,
            elevator_effect: raw.elevator_effect,
            rudder_effect: raw.rudder_effect,
            critical_aoa_positive: raw.critical_aoa_positive,
            critical_aoa_negative: raw.critical_aoa_negative,
            min_maneuverable_speed: raw.min_maneuverable_speed,
            max_speed: raw.max_speed,
        };
        props.recompute_induced_drag();
        Ok(props)
    }

    /// AR = b² / S
    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span * self.wing_span / self.wing_area
    }

    /// c = S / b
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        self.wing_area / self.wing_span
    }

    /// K = 1 / (π·e·AR) with e fixed at the Oswald efficiency.
    pub fn recompute_induced_drag(&mut self) {
        self.k = 1.0 / (PI * OSWALD_EFFICIENCY * self.aspect_ratio());
    }

    /// Applies a field-by-field override and refreshes the derived drag factor.
    ///
    /// Overrides that fail [`PropertyOverrides::validate`] leave `self` untouched.
    pub fn apply_overrides(&mut self, overrides: &PropertyOverrides) -> Result<(), ConfigError> {
        overrides.validate()?;
        self.empty_mass = overrides.empty_mass;
        self.max_fuel = overrides.max_fuel;
        self.wing_area = overrides.wing_area;
        self.max_thrust = overrides.max_thrust;
        self.thrust_military = overrides.thrust_military;
        self.critical_aoa_positive = overrides.critical_aoa_positive;
        self.critical_aoa_negative = overrides.critical_aoa_negative;
        self.min_maneuverable_speed = overrides.min_maneuverable_speed;
        self.max_speed = overrides.max_speed;
        self.recompute_induced_drag();
        Ok(())
    }
}

/// The nine values a host supplies when aircraft data comes from a loaded
/// model rather than a named preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyOverrides {
    pub empty_mass: f64,
    pub max_fuel: f64,
    pub wing_area: f64,
    pub max_thrust: f64,
    pub thrust_military: f64,
    pub critical_aoa_positive: f64,
    pub critical_aoa_negative: f64,
    pub min_maneuverable_speed: f64,
    pub max_speed: f64,
}

impl PropertyOverrides {
    /// Same bounds as an aircraft data file, restricted to the nine fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(&[
            ("empty_mass", self.empty_mass),
            ("wing_area", self.wing_area),
            ("max_speed", self.max_speed),
        ])?;
        require_non_negative(&[
            ("max_fuel", self.max_fuel),
            ("max_thrust", self.max_thrust),
            ("thrust_military", self.thrust_military),
            ("min_maneuverable_speed", self.min_maneuverable_speed),
        ])?;
        require_aoa_range(self.critical_aoa_negative, self.critical_aoa_positive)
    }
}

impl From<&AircraftProperties> for PropertyOverrides {
    fn from(props: &AircraftProperties) -> Self {
        Self {
            empty_mass: props.empty_mass,
            max_fuel: props.max_fuel,
            wing_area: props.wing_area,
            max_thrust: props.max_thrust,
            thrust_military: props.thrust_military,
            critical_aoa_positive: props.critical_aoa_positive,
            critical_aoa_negative: props.critical_aoa_negative,
            min_maneuverable_speed: props.min_maneuverable_speed,
            max_speed: props.max_speed,
        }
    }
}

/// Source for aircraft properties.
/// Can either be a built-in preset or loaded from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AircraftSource {
    Preset(AircraftType),
    File(PathBuf),
}

/// Closed set of built-in aircraft types.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    F16,
}

impl AircraftType {
    pub const ALL: [AircraftType; 1] = [AircraftType::F16];

    pub fn name(&self) -> &'static str {
        match self {
            AircraftType::F16 => "F-16",
        }
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AircraftType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "F-16" | "F16" => Ok(AircraftType::F16),
            _ => Err(SimError::UnknownAircraftType(s.to_string())),
        }
    }
}
