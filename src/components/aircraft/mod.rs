pub mod config;
pub mod state;

pub use config::{
    AircraftProperties, AircraftSource, AircraftType, ConfigError, PropertyOverrides,
    RawAircraftProperties,
};
pub use state::{AircraftSnapshot, AircraftState};
