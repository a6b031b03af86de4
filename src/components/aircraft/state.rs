use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_MASS;

/// Represents the kinematic, control and energy state of one aircraft.
///
/// World frame is right-handed with `y` up. Heading is measured about `y`
/// such that a heading of `h` points the nose along `(cos h, 0, sin h)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in the world frame (m).
    pub position: Vector3<f64>,
    /// Velocity in the world frame (m/s).
    pub velocity: Vector3<f64>,

    /// Yaw about world up (rad).
    pub heading: f64,
    /// Pitch (rad).
    pub pitch: f64,
    /// Roll (rad).
    pub roll: f64,

    pub heading_rate: f64,
    pub pitch_rate: f64,
    pub roll_rate: f64,

    /// Power lever, 0.0 to 1.0.
    pub throttle: f64,
    /// Thrust derived from the throttle on the last step (N).
    pub thrust: f64,

    /// Control surfaces, each -1.0 to 1.0.
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,

    /// Empty mass plus fuel (kg).
    pub mass: f64,
    /// Height above the datum, equal to `position.y` (m).
    pub altitude: f64,
    /// Magnitude of the velocity (m/s).
    pub airspeed: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            heading_rate: 0.0,
            pitch_rate: 0.0,
            roll_rate: 0.0,
            throttle: 0.0,
            thrust: 0.0,
            aileron: 0.0,
            elevator: 0.0,
            rudder: 0.0,
            mass: DEFAULT_MASS,
            altitude: 0.0,
            airspeed: 0.0,
        }
    }
}

impl AircraftState {
    /// Orientation as a quaternion for renderers: heading about `y`, then
    /// pitch about the body `z`, then roll about the body `x`.
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -self.heading)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.roll)
    }

    /// Unit vector along the longitudinal axis in the world frame.
    pub fn nose_direction(&self) -> Vector3<f64> {
        Vector3::new(
            self.pitch.cos() * self.heading.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.heading.sin(),
        )
    }
}

/// Read-only view handed to renderers, HUDs and telemetry.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSnapshot {
    #[serde(flatten)]
    pub state: AircraftState,
    /// Fuel on board (kg).
    pub fuel: f64,
}
