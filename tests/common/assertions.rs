use approx::assert_relative_eq;
use nalgebra::Vector3;
use std::f64::consts::PI;
use webflight::{utils::PITCH_LIMIT, AircraftState};

/// Assert that every numeric field of the state is finite
#[track_caller]
pub fn assert_state_finite(state: &AircraftState) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position contains non-finite values: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity contains non-finite values: {:?}",
        state.velocity
    );
    assert!(state.altitude.is_finite(), "Altitude is not finite");
    assert!(state.airspeed.is_finite(), "Airspeed is not finite");
    assert!(state.mass.is_finite() && state.mass > 0.0, "Mass must be positive");
}

/// Roll and heading wrapped into (-π, π], pitch inside the pitch limit
#[track_caller]
pub fn assert_attitude_in_range(state: &AircraftState) {
    assert!(
        state.roll > -PI && state.roll <= PI,
        "Roll {} outside (-π, π]",
        state.roll
    );
    assert!(
        state.heading > -PI && state.heading <= PI,
        "Heading {} outside (-π, π]",
        state.heading
    );
    assert!(
        state.pitch >= -PITCH_LIMIT && state.pitch <= PITCH_LIMIT,
        "Pitch {} outside ±{}",
        state.pitch,
        PITCH_LIMIT
    );
}

/// Throttle in [0, 1], each surface in [-1, 1]
#[track_caller]
pub fn assert_controls_in_range(state: &AircraftState) {
    assert!((0.0..=1.0).contains(&state.throttle), "Throttle {}", state.throttle);
    for (name, value) in [
        ("aileron", state.aileron),
        ("elevator", state.elevator),
        ("rudder", state.rudder),
    ] {
        assert!((-1.0..=1.0).contains(&value), "{} {}", name, value);
    }
}

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
