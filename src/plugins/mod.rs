mod physics;

pub use physics::{
    attach_snapshot_system, flight_dynamics_system, sync_snapshot_system, FlightDynamicsPlugin,
    FlightDynamicsSet,
};
