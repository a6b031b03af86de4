mod simulation;
mod structures;

pub use simulation::{build_info, version, FlightSimulation};
pub use structures::{BuildInfo, Command, Response, Status};
