use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{
    AircraftProperties, AircraftSnapshot, AircraftState, AircraftType, PropertyOverrides,
};
use crate::resources::PhysicsConfig;
use crate::systems::aerodynamics::{aerodynamic_forces, moments};
use crate::systems::physics::{
    integrate_attitude, integrate_rates, integrate_translation, weight, InertiaApproximation,
};
use crate::systems::propulsion::calculate_engine_outputs;
use crate::utils::{Result, SimError, GRAVITY, INITIAL_FUEL_FRACTION, INITIAL_SPEED};

/// Operational phase of a [`FlightDynamicsEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnginePhase {
    /// Constructed or reset; `update` is rejected.
    #[default]
    Uninitialized,
    /// Initialized; stepping allowed.
    Running,
}

/// Simulates one aircraft.
///
/// The engine owns the aircraft's mutable state, its active properties and the
/// fuel on board. Inputs are clamped into range rather than rejected; only
/// stepping an uninitialized engine or passing a bad timestep fails.
#[derive(Component, Debug, Clone)]
pub struct FlightDynamicsEngine {
    state: AircraftState,
    properties: AircraftProperties,
    fuel: f64,
    phase: EnginePhase,
    /// Frame time not yet consumed by fixed substeps.
    accumulator: f64,
}

impl Default for FlightDynamicsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightDynamicsEngine {
    /// Creates an engine with the default F-16 properties.
    pub fn new() -> Self {
        Self::with_properties(AircraftProperties::default())
    }

    pub fn with_properties(properties: AircraftProperties) -> Self {
        let fuel = properties.max_fuel * INITIAL_FUEL_FRACTION;
        Self {
            state: AircraftState::default(),
            properties,
            fuel,
            phase: EnginePhase::Uninitialized,
            accumulator: 0.0,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_initialized(&self) -> bool {
        self.phase == EnginePhase::Running
    }

    /// Fuel on board (kg).
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn properties(&self) -> &AircraftProperties {
        &self.properties
    }

    /// Copy of the current state together with the fuel on board.
    pub fn snapshot(&self) -> AircraftSnapshot {
        AircraftSnapshot {
            state: self.state.clone(),
            fuel: self.fuel,
        }
    }

    /// Places the aircraft at `position` flying level along `heading` at the
    /// initial speed, with half tanks. Throttle and control surfaces are kept.
    pub fn initialize(&mut self, position: Vector3<f64>, heading: f64) {
        let (sin_h, cos_h) = heading.sin_cos();

        self.state.position = position;
        self.state.heading = heading;
        self.state.altitude = position.y;
        self.state.velocity = Vector3::new(INITIAL_SPEED * cos_h, 0.0, INITIAL_SPEED * sin_h);
        self.state.airspeed = self.state.velocity.norm();
        self.fuel = self.properties.max_fuel * INITIAL_FUEL_FRACTION;
        self.accumulator = 0.0;
        self.phase = EnginePhase::Running;

        info!(
            "Initialized {} at ({:.1}, {:.1}, {:.1}) heading {:.3} rad, fuel {:.1} kg",
            self.properties.name, position.x, position.y, position.z, heading, self.fuel
        );
    }

    /// Replaces the active properties with a named preset.
    ///
    /// Unknown names leave the current properties untouched and return
    /// [`SimError::UnknownAircraftType`].
    pub fn set_aircraft_type(&mut self, name: &str) -> Result<()> {
        let aircraft_type = match name.parse::<AircraftType>() {
            Ok(aircraft_type) => aircraft_type,
            Err(e) => {
                warn!("{}; keeping {}", e, self.properties.name);
                return Err(e);
            }
        };

        self.properties = AircraftProperties::from_preset(aircraft_type);
        info!("Aircraft type set to {}", aircraft_type);
        Ok(())
    }

    /// Overrides the nine host-supplied properties, then refreshes the
    /// induced-drag factor and the mass.
    ///
    /// Out-of-range values are rejected and the current properties kept.
    pub fn set_aircraft_properties(&mut self, overrides: &PropertyOverrides) -> Result<()> {
        if let Err(e) = self.properties.apply_overrides(overrides) {
            warn!("{}; keeping {} properties", e, self.properties.name);
            return Err(e.into());
        }
        self.state.mass = self.properties.empty_mass + self.fuel;

        debug!(
            "Applied property overrides to {}: K = {:.5}, mass = {:.1} kg",
            self.properties.name, self.properties.k, self.state.mass
        );
        Ok(())
    }

    pub fn set_throttle(&mut self, value: f64) {
        self.state.throttle = clamp_input("throttle", value, 0.0, 1.0);
    }

    /// Each axis is clamped to [-1, 1] independently.
    pub fn set_control_surfaces(&mut self, aileron: f64, elevator: f64, rudder: f64) {
        self.state.aileron = clamp_input("aileron", aileron, -1.0, 1.0);
        self.state.elevator = clamp_input("elevator", elevator, -1.0, 1.0);
        self.state.rudder = clamp_input("rudder", rudder, -1.0, 1.0);
    }

    /// Advances the simulation by `dt` seconds in a single step.
    ///
    /// Any finite positive `dt` is accepted, but steps longer than
    /// [`MAX_TIMESTEP`](crate::utils::MAX_TIMESTEP) lose accuracy; use
    /// [`Self::advance`] for long frames.
    pub fn update(&mut self, dt: f64) -> Result<()> {
        self.check_step(dt)?;
        self.step(dt, GRAVITY);
        Ok(())
    }

    /// Consumes `frame_dt` in fixed steps of `config.timestep`.
    ///
    /// Leftover time is carried to the next call. At most
    /// `config.max_substeps` steps are taken; any backlog beyond that is
    /// dropped. Returns the number of steps taken.
    pub fn advance(&mut self, frame_dt: f64, config: &PhysicsConfig) -> Result<usize> {
        if !self.is_initialized() {
            return Err(SimError::Uninitialized);
        }
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            return Err(SimError::InvalidTimestep(frame_dt));
        }
        if !config.timestep.is_finite() || config.timestep <= 0.0 {
            return Err(SimError::InvalidTimestep(config.timestep));
        }

        self.accumulator += frame_dt;

        let max_substeps = config.max_substeps as usize;
        let mut steps = 0;
        while self.accumulator >= config.timestep && steps < max_substeps {
            self.step(config.timestep, config.gravity);
            self.accumulator -= config.timestep;
            steps += 1;
        }

        if self.accumulator >= config.timestep {
            debug!(
                "Dropping {:.4} s of simulation backlog after {} substeps",
                self.accumulator, steps
            );
            self.accumulator %= config.timestep;
        }

        Ok(steps)
    }

    /// Returns to the post-construction state. Properties are kept; the
    /// aircraft must be initialized again before stepping.
    pub fn reset(&mut self) {
        self.state = AircraftState::default();
        self.fuel = self.properties.max_fuel * INITIAL_FUEL_FRACTION;
        self.accumulator = 0.0;
        self.phase = EnginePhase::Uninitialized;

        info!("Reset {}", self.properties.name);
    }

    fn check_step(&self, dt: f64) -> Result<()> {
        if !self.is_initialized() {
            return Err(SimError::Uninitialized);
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimestep(dt));
        }
        Ok(())
    }

    fn step(&mut self, dt: f64, gravity: f64) {
        let props = &self.properties;

        self.state.mass = props.empty_mass + self.fuel;

        // Propulsion
        let engine = calculate_engine_outputs(&self.state, props, self.fuel, dt);
        self.state.thrust = engine.thrust;
        self.fuel = engine.fuel;

        // Forces use the air data from the start of the step
        let aero = aerodynamic_forces(&self.state, props);
        let total_force = engine.force + weight(self.state.mass, gravity) + aero;
        let acceleration = total_force / self.state.mass;

        integrate_translation(&mut self.state, &acceleration, dt);

        // Rotation
        let applied = moments(&self.state, props);
        let inertia = InertiaApproximation::new(self.state.mass, props.wing_span);
        integrate_rates(&mut self.state, &inertia.angular_acceleration(&applied), dt);
        integrate_attitude(&mut self.state, dt);

        trace!(
            "step dt={:.4}: alt={:.2} airspeed={:.2} fuel={:.2}",
            dt,
            self.state.altitude,
            self.state.airspeed,
            self.fuel
        );
    }
}

fn clamp_input(label: &str, value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        warn!("{} input is NaN, using {}", label, min.max(0.0));
        return min.max(0.0);
    }

    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{} input {} clamped to {}", label, value, clamped);
    }
    clamped
}
