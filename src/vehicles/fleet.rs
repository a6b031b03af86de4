use rayon::prelude::*;

use super::FlightDynamicsEngine;
use crate::resources::PhysicsConfig;
use crate::utils::{Result, SimError};

/// Steps every running engine by `dt` in parallel.
///
/// Engines share no state, so each one is updated on its own worker.
/// Uninitialized engines are skipped. Returns how many engines were stepped.
pub fn step_all(engines: &mut [FlightDynamicsEngine], dt: f64) -> Result<usize> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidTimestep(dt));
    }

    engines
        .par_iter_mut()
        .filter(|engine| engine.is_initialized())
        .map(|engine| engine.update(dt).map(|_| 1))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

/// Parallel counterpart of [`FlightDynamicsEngine::advance`].
pub fn advance_all(
    engines: &mut [FlightDynamicsEngine],
    frame_dt: f64,
    config: &PhysicsConfig,
) -> Result<usize> {
    engines
        .par_iter_mut()
        .filter(|engine| engine.is_initialized())
        .map(|engine| engine.advance(frame_dt, config))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}
