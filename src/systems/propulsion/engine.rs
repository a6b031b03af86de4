use nalgebra::Vector3;

use crate::components::{AircraftProperties, AircraftState};

/// Thrust scales linearly with the power lever. Fuel state does not enter:
/// a dry aircraft keeps producing thrust.
pub fn thrust_from_throttle(throttle: f64, props: &AircraftProperties) -> f64 {
    throttle * props.max_thrust
}

/// Remaining fuel after burning at `thrust` for `dt`, floored at zero.
pub fn burn_fuel(fuel: f64, thrust: f64, props: &AircraftProperties, dt: f64) -> f64 {
    if thrust > 0.0 && fuel > 0.0 {
        let fuel_flow = thrust * props.thrust_sfc * dt;
        (fuel - fuel_flow).max(0.0)
    } else {
        fuel
    }
}

/// World-frame thrust along the pitch/heading-derived longitudinal axis.
pub fn thrust_vector(thrust: f64, pitch: f64, heading: f64) -> Vector3<f64> {
    let (sin_p, cos_p) = pitch.sin_cos();
    let (sin_h, cos_h) = heading.sin_cos();
    Vector3::new(thrust * cos_p * cos_h, thrust * sin_p, thrust * cos_p * sin_h)
}

/// Outputs of one propulsion update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOutputs {
    /// Thrust magnitude (N).
    pub thrust: f64,
    /// Fuel left after this step (kg).
    pub fuel: f64,
    /// Thrust force in the world frame (N).
    pub force: Vector3<f64>,
}

/// Calculates thrust, fuel burn and the thrust force for one step.
pub fn calculate_engine_outputs(
    state: &AircraftState,
    props: &AircraftProperties,
    fuel: f64,
    dt: f64,
) -> EngineOutputs {
    let thrust = thrust_from_throttle(state.throttle, props);
    EngineOutputs {
        thrust,
        fuel: burn_fuel(fuel, thrust, props, dt),
        force: thrust_vector(thrust, state.pitch, state.heading),
    }
}
