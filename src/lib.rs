pub mod components;
pub mod plugins;
pub mod resources;
pub mod server;
pub mod systems;
pub mod utils;
pub mod vehicles;

pub use components::{AircraftProperties, AircraftSnapshot, AircraftState, AircraftType};
pub use plugins::FlightDynamicsPlugin;
pub use resources::{PhysicsConfig, SimulationConfig};
pub use server::FlightSimulation;
pub use utils::{Result, SimError};
pub use vehicles::{EnginePhase, FlightDynamicsEngine};
