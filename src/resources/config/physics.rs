use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::GRAVITY;

/// Fixed-step settings shared by the Bevy plugin and frame-driven hosts.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Length of one simulation step (s).
    pub timestep: f64,
    /// Upper bound on steps taken for a single frame.
    pub max_substeps: u32,
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0, // 120 Hz default physics rate
            max_substeps: 4,
            gravity: GRAVITY,
        }
    }
}
