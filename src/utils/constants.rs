use std::f64::consts::PI;

pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const DENSITY_SCALE_HEIGHT: f64 = 8000.0; // m

/// Below this speed (m/s) the velocity direction is treated as undefined.
pub const MIN_VELOCITY_THRESHOLD: f64 = 0.1;

pub const MOMENT_SCALE: f64 = 0.001;
pub const OSWALD_EFFICIENCY: f64 = 0.8;

// Angular rate limits (rad/s)
pub const MAX_ROLL_RATE: f64 = 5.0;
pub const MAX_PITCH_RATE: f64 = 3.0;
pub const MAX_YAW_RATE: f64 = 2.0;

/// Pitch is held inside +/- this value (rad).
pub const PITCH_LIMIT: f64 = 0.45 * PI;

// Inertia approximation factors, multiplied by mass * span^2
pub const ROLL_INERTIA_FACTOR: f64 = 0.1;
pub const PITCH_INERTIA_FACTOR: f64 = 0.2;
pub const YAW_INERTIA_FACTOR: f64 = 0.3;

pub const INITIAL_SPEED: f64 = 100.0; // m/s
pub const INITIAL_FUEL_FRACTION: f64 = 0.5;
pub const DEFAULT_MASS: f64 = 10000.0; // kg, placeholder until the first step

pub const MAX_TIMESTEP: f64 = 1.0 / 30.0; // Recommended upper bound for a single step
