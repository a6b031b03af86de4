pub mod aerodynamics;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{aerodynamic_forces, air_density, dynamic_pressure, moments, AirDataValues};
pub use physics::{
    integrate_attitude, integrate_rates, integrate_translation, weight, InertiaApproximation,
};
pub use propulsion::{calculate_engine_outputs, EngineOutputs};
