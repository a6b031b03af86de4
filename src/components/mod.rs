pub mod aircraft;

pub use aircraft::{
    AircraftProperties, AircraftSnapshot, AircraftSource, AircraftState, AircraftType,
    ConfigError, PropertyOverrides, RawAircraftProperties,
};
