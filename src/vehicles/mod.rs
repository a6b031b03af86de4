pub mod fleet;
mod flight_dynamics;

pub use fleet::{advance_all, step_all};
pub use flight_dynamics::{EnginePhase, FlightDynamicsEngine};
