use serde::{Deserialize, Serialize};

use crate::components::PropertyOverrides;

/// Enum representing commands sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Place the aircraft and start the simulation.
    Initialize { x: f64, y: f64, z: f64, heading: f64 },
    /// Switch to a named aircraft preset.
    SetAircraftType { name: String },
    /// Override the host-supplied aircraft properties.
    SetAircraftProperties(PropertyOverrides),
    SetThrottle { value: f64 },
    SetControlSurfaces {
        aileron: f64,
        elevator: f64,
        rudder: f64,
    },
    /// Single step of `delta_time` seconds.
    Update { delta_time: f64 },
    /// Fixed-step advance over a frame of `frame_time` seconds.
    Advance { frame_time: f64 },
    GetState,
    GetProperties,
    Reset,
    Version,
    /// Close the server connection.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Reply to a single [`Command`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            data: None,
            error: None,
        }
    }

    pub fn with_data(data: serde_json::Value) -> Self {
        Self {
            status: Status::Ok,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Crate identity reported by the `Version` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub name: String,
    pub version: String,
    pub aircraft_types: Vec<String>,
}
