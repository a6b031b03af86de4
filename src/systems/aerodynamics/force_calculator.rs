use nalgebra::Vector3;

use crate::components::{AircraftProperties, AircraftState};
use crate::systems::aerodynamics::AirDataValues;
use crate::utils::{MIN_VELOCITY_THRESHOLD, MOMENT_SCALE};

// --- Coefficients ---

/// Lift coefficient with post-stall degradation.
///
/// Above 80% of the positive critical AOA the linear lift is scaled down
/// towards 30% at the critical angle. The result is held inside ±ClMax.
pub fn lift_coefficient(alpha: f64, props: &AircraftProperties) -> f64 {
    let mut cl = props.cl0 + props.cl_alpha * alpha;

    let stall_onset = props.critical_aoa_positive * 0.8;
    if alpha > stall_onset {
        let stall_factor = 1.0 - (alpha - stall_onset) / (props.critical_aoa_positive * 0.2);
        cl *= stall_factor.max(0.3);
    }

    cl.clamp(-props.cl_max, props.cl_max)
}

/// Cd = Cd0 + K·Cl², plus a linear penalty above 80% of max speed that
/// reaches +0.1 at max speed.
pub fn drag_coefficient(cl: f64, airspeed: f64, props: &AircraftProperties) -> f64 {
    let mut cd = props.cd0 + props.k * cl * cl;

    let penalty_onset = props.max_speed * 0.8;
    if airspeed > penalty_onset {
        let speed_factor = (airspeed - penalty_onset) / (props.max_speed * 0.2);
        cd += speed_factor * 0.1;
    }

    cd
}

// --- Forces ---

/// Scalar force magnitudes before they are given a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AeroForceMagnitudes {
    pub lift: f64,
    pub drag: f64,
    pub side: f64,
}

impl AeroForceMagnitudes {
    pub fn calculate(
        air: &AirDataValues,
        state: &AircraftState,
        props: &AircraftProperties,
    ) -> Self {
        let qs = air.dynamic_pressure * props.wing_area;
        let cl = lift_coefficient(air.alpha, props);
        let cd = drag_coefficient(cl, air.airspeed, props);

        Self {
            lift: qs * cl,
            drag: qs * cd,
            side: qs * state.rudder * props.rudder_effect * 0.2,
        }
    }
}

/// Sum of lift, drag and rudder side force in the world frame (N).
///
/// Lift is perpendicular to the velocity in the pitch/heading plane, drag
/// opposes the velocity, and side force acts laterally to the heading.
/// All three vanish when the speed is at or below the velocity threshold.
pub fn aerodynamic_forces(state: &AircraftState, props: &AircraftProperties) -> Vector3<f64> {
    let speed = state.velocity.norm();
    if speed <= MIN_VELOCITY_THRESHOLD {
        return Vector3::zeros();
    }

    let air = AirDataValues::calculate(state, props);
    let magnitudes = AeroForceMagnitudes::calculate(&air, state, props);

    let velocity_dir = state.velocity / speed;
    let (sin_h, cos_h) = state.heading.sin_cos();

    let lift_dir = Vector3::new(
        -velocity_dir.y * cos_h,
        velocity_dir.x * cos_h + velocity_dir.z * sin_h,
        -velocity_dir.y * sin_h,
    );
    // Degenerate when the flight path is orthogonal to the heading plane
    let lift_vector = match lift_dir.try_normalize(f64::EPSILON) {
        Some(dir) => dir * magnitudes.lift,
        None => Vector3::zeros(),
    };

    let drag_vector = velocity_dir * -magnitudes.drag;
    let side_vector = Vector3::new(-magnitudes.side * sin_h, 0.0, magnitudes.side * cos_h);

    lift_vector + drag_vector + side_vector
}

// --- Moments ---

/// Roll, pitch and yaw moments (x, y, z), already multiplied by the moment scale.
pub fn moments(state: &AircraftState, props: &AircraftProperties) -> Vector3<f64> {
    let air = AirDataValues::calculate(state, props);
    let q = air.dynamic_pressure;
    let s = props.wing_area;
    let b = props.wing_span;
    let c = props.mean_aerodynamic_chord();

    // Roll: aileron authority less rate damping
    let roll_moment = q * s * b * state.aileron * props.aileron_effect
        - q * s * b * b * state.roll_rate * 0.1;

    let adverse_yaw = -state.aileron * props.aileron_effect * 0.2;

    // Pitch: elevator authority less rate damping
    let mut pitch_moment = q * s * c * state.elevator * props.elevator_effect
        - q * s * c * c * state.pitch_rate * 0.2;

    // Nose-down tendency at high speed
    let tuck_onset = props.max_speed * 0.7;
    if state.airspeed > tuck_onset {
        let speed_factor = (state.airspeed - tuck_onset) / (props.max_speed * 0.3);
        pitch_moment -= q * s * c * speed_factor * 0.1;
    }

    // Yaw: rudder authority less rate damping, plus aileron adverse yaw
    let yaw_moment = q * s * b * state.rudder * props.rudder_effect
        - q * s * b * b * state.heading_rate * 0.15
        + q * s * b * adverse_yaw;

    Vector3::new(roll_moment, pitch_moment, yaw_moment) * MOMENT_SCALE
}
