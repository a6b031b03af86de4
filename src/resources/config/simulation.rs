use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::physics::PhysicsConfig;
use crate::components::{AircraftProperties, AircraftSource, AircraftType, ConfigError};
use crate::vehicles::FlightDynamicsEngine;

/// Top-level settings for one simulated aircraft.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Preset name (e.g. "F-16") or path to an aircraft YAML file.
    pub aircraft: String,
    pub initial_position: Vector3<f64>,
    #[serde(default)]
    pub initial_heading: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            aircraft: AircraftType::F16.name().to_string(),
            initial_position: Vector3::new(0.0, 1000.0, 0.0),
            initial_heading: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Known preset names resolve to presets; anything else is a file path.
    pub fn aircraft_source(&self) -> AircraftSource {
        match self.aircraft.parse::<AircraftType>() {
            Ok(aircraft_type) => AircraftSource::Preset(aircraft_type),
            Err(_) => AircraftSource::File(PathBuf::from(&self.aircraft)),
        }
    }

    /// Builds an engine with the configured aircraft, initialized at the
    /// configured position and heading.
    pub fn build_engine(&self) -> Result<FlightDynamicsEngine, ConfigError> {
        let properties = AircraftProperties::new(self.aircraft_source())?;
        let mut engine = FlightDynamicsEngine::with_properties(properties);
        engine.initialize(self.initial_position, self.initial_heading);
        Ok(engine)
    }
}
