use nalgebra::Vector3;

use crate::components::{AircraftProperties, AircraftState};
use crate::utils::{
    horizontal_speed, DENSITY_SCALE_HEIGHT, MIN_VELOCITY_THRESHOLD, SEA_LEVEL_DENSITY,
};

/// Exponential atmosphere: ρ = ρ0 · e^(-h / 8000).
///
/// No bounds are applied, so negative altitudes give densities above sea level.
pub fn air_density(altitude: f64) -> f64 {
    SEA_LEVEL_DENSITY * (-altitude / DENSITY_SCALE_HEIGHT).exp()
}

/// q = ½ · ρ · V²
pub fn dynamic_pressure(density: f64, airspeed: f64) -> f64 {
    0.5 * density * airspeed * airspeed
}

/// Angle between the flight path and the longitudinal axis, before any
/// envelope clamp. Zero while the horizontal speed is below the threshold.
pub fn angle_of_attack(velocity: &Vector3<f64>, pitch: f64) -> f64 {
    let horizontal = horizontal_speed(velocity);
    if horizontal > MIN_VELOCITY_THRESHOLD {
        (-velocity.y).atan2(horizontal) + pitch
    } else {
        0.0
    }
}

/// Holds alpha inside the critical range so the coefficients cannot run away.
/// Stall is handled separately by the lift curve.
pub fn clamp_angle_of_attack(alpha: f64, props: &AircraftProperties) -> f64 {
    alpha.clamp(props.critical_aoa_negative, props.critical_aoa_positive)
}

/// Air data derived from the current state, shared by the force and moment models.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AirDataValues {
    /// Air density at the current altitude (kg/m³).
    pub density: f64,
    /// Dynamic pressure (Pa).
    pub dynamic_pressure: f64,
    /// Speed used for q (m/s).
    pub airspeed: f64,
    /// Clamped angle of attack (rad).
    pub alpha: f64,
}

impl AirDataValues {
    pub fn calculate(state: &AircraftState, props: &AircraftProperties) -> Self {
        let density = air_density(state.altitude);
        let alpha = clamp_angle_of_attack(angle_of_attack(&state.velocity, state.pitch), props);

        Self {
            density,
            dynamic_pressure: dynamic_pressure(density, state.airspeed),
            airspeed: state.airspeed,
            alpha,
        }
    }
}
