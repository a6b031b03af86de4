use std::io;
use thiserror::Error;

use crate::components::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine has not been initialized")]
    Uninitialized,

    #[error("Invalid timestep: {0} (must be finite and positive)")]
    InvalidTimestep(f64),

    #[error("Unknown aircraft type: {0}")]
    UnknownAircraftType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
