use bevy::prelude::*;
use nalgebra::Vector3;
use serde_json::Value;

use super::structures::{BuildInfo, Command, Response};
use crate::components::AircraftType;
use crate::resources::{PhysicsConfig, SimulationConfig};
use crate::utils::Result;
use crate::vehicles::FlightDynamicsEngine;

/// Package version of this crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: version().to_string(),
        aircraft_types: AircraftType::ALL
            .iter()
            .map(|t| t.name().to_string())
            .collect(),
    }
}

/// Host-owned handle around one engine.
///
/// Each host (a server connection, a game loop) creates its own handle and
/// passes it where it is needed; there is no process-wide instance.
#[derive(Resource, Debug, Clone, Default)]
pub struct FlightSimulation {
    engine: FlightDynamicsEngine,
    physics: PhysicsConfig,
}

impl FlightSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configured aircraft and initializes it at the configured
    /// start point.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Ok(Self {
            engine: config.build_engine()?,
            physics: config.physics.clone(),
        })
    }

    pub fn engine(&self) -> &FlightDynamicsEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut FlightDynamicsEngine {
        &mut self.engine
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    /// Executes a command, turning any failure into an error response.
    pub fn handle_command(&mut self, command: Command) -> Response {
        match self.execute(command) {
            Ok(Some(data)) => Response::with_data(data),
            Ok(None) => Response::ok(),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Option<Value>> {
        debug!("Executing {:?}", command);

        match command {
            Command::Initialize { x, y, z, heading } => {
                self.engine.initialize(Vector3::new(x, y, z), heading);
                Ok(None)
            }
            Command::SetAircraftType { name } => {
                self.engine.set_aircraft_type(&name)?;
                Ok(None)
            }
            Command::SetAircraftProperties(overrides) => {
                self.engine.set_aircraft_properties(&overrides)?;
                Ok(None)
            }
            Command::SetThrottle { value } => {
                self.engine.set_throttle(value);
                Ok(None)
            }
            Command::SetControlSurfaces {
                aileron,
                elevator,
                rudder,
            } => {
                self.engine.set_control_surfaces(aileron, elevator, rudder);
                Ok(None)
            }
            Command::Update { delta_time } => {
                self.engine.update(delta_time)?;
                Ok(None)
            }
            Command::Advance { frame_time } => {
                let steps = self.engine.advance(frame_time, &self.physics)?;
                Ok(Some(serde_json::json!({ "steps": steps })))
            }
            Command::GetState => Ok(Some(serde_json::to_value(self.engine.snapshot())?)),
            Command::GetProperties => Ok(Some(serde_json::to_value(self.engine.properties())?)),
            Command::Reset => {
                self.engine.reset();
                Ok(None)
            }
            Command::Version => Ok(Some(serde_json::to_value(build_info())?)),
            Command::Close => Ok(None),
        }
    }
}
