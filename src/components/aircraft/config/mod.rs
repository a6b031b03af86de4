mod aircraft;
mod loader;

pub use aircraft::{AircraftProperties, AircraftSource, AircraftType, PropertyOverrides};
pub use loader::{ConfigError, RawAircraftProperties};
