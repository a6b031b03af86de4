use nalgebra::Vector3;

use crate::components::AircraftState;
use crate::utils::{
    wrap_angle, MAX_PITCH_RATE, MAX_ROLL_RATE, MAX_YAW_RATE, PITCH_INERTIA_FACTOR, PITCH_LIMIT,
    ROLL_INERTIA_FACTOR, YAW_INERTIA_FACTOR,
};

/// Principal moments of inertia approximated from mass and span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaApproximation {
    /// Roll inertia (kg·m²).
    pub ixx: f64,
    /// Pitch inertia (kg·m²).
    pub iyy: f64,
    /// Yaw inertia (kg·m²).
    pub izz: f64,
}

impl InertiaApproximation {
    pub fn new(mass: f64, wing_span: f64) -> Self {
        let base = mass * wing_span * wing_span;
        Self {
            ixx: base * ROLL_INERTIA_FACTOR,
            iyy: base * PITCH_INERTIA_FACTOR,
            izz: base * YAW_INERTIA_FACTOR,
        }
    }

    /// Angular accelerations (roll, pitch, yaw) produced by `moments`.
    pub fn angular_acceleration(&self, moments: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(moments.x / self.ixx, moments.y / self.iyy, moments.z / self.izz)
    }
}

/// Weight vector in the world frame (y up).
pub fn weight(mass: f64, gravity: f64) -> Vector3<f64> {
    Vector3::new(0.0, -mass * gravity, 0.0)
}

/// Semi-implicit Euler: velocity first, then position from the new velocity.
/// Refreshes the derived altitude and airspeed.
pub fn integrate_translation(state: &mut AircraftState, acceleration: &Vector3<f64>, dt: f64) {
    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;

    state.altitude = state.position.y;
    state.airspeed = state.velocity.norm();
}

/// Euler step of the body rates followed by the per-axis rate limits.
pub fn integrate_rates(state: &mut AircraftState, angular_acceleration: &Vector3<f64>, dt: f64) {
    state.roll_rate += angular_acceleration.x * dt;
    state.pitch_rate += angular_acceleration.y * dt;
    state.heading_rate += angular_acceleration.z * dt;

    apply_rate_limits(state);
}

/// Clamps roll, pitch and yaw rates to ±5, ±3 and ±2 rad/s.
pub fn apply_rate_limits(state: &mut AircraftState) {
    state.roll_rate = state.roll_rate.clamp(-MAX_ROLL_RATE, MAX_ROLL_RATE);
    state.pitch_rate = state.pitch_rate.clamp(-MAX_PITCH_RATE, MAX_PITCH_RATE);
    state.heading_rate = state.heading_rate.clamp(-MAX_YAW_RATE, MAX_YAW_RATE);
}

/// Euler step of the attitude angles. Roll and heading wrap into (-π, π];
/// pitch is clamped to ±0.45π.
pub fn integrate_attitude(state: &mut AircraftState, dt: f64) {
    state.roll = wrap_angle(state.roll + state.roll_rate * dt);
    state.pitch = (state.pitch + state.pitch_rate * dt).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    state.heading = wrap_angle(state.heading + state.heading_rate * dt);
}
