use bevy::prelude::*;

use crate::components::AircraftSnapshot;
use crate::resources::PhysicsConfig;
use crate::vehicles::FlightDynamicsEngine;

/// Flight dynamics stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightDynamicsSet {
    Step,
    Publish,
}

/// Steps every [`FlightDynamicsEngine`] entity on the fixed clock and
/// mirrors its state into an [`AircraftSnapshot`] for render-side readers.
#[derive(Default)]
pub struct FlightDynamicsPlugin {
    pub config: PhysicsConfig,
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        // Configure fixed timestep
        app.insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(
            FixedUpdate,
            (FlightDynamicsSet::Step, FlightDynamicsSet::Publish).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                flight_dynamics_system.in_set(FlightDynamicsSet::Step),
                (attach_snapshot_system, sync_snapshot_system).in_set(FlightDynamicsSet::Publish),
            ),
        );
    }
}

/// One fixed step for every running engine.
pub fn flight_dynamics_system(
    config: Res<PhysicsConfig>,
    mut query: Query<(Entity, &mut FlightDynamicsEngine)>,
) {
    query.par_iter_mut().for_each(|(entity, mut engine)| {
        if !engine.is_initialized() {
            return;
        }
        if let Err(e) = engine.advance(config.timestep, &config) {
            warn!("Flight dynamics step failed for {:?}: {}", entity, e);
        }
    });
}

/// Gives newly spawned engines a snapshot component.
pub fn attach_snapshot_system(
    mut commands: Commands,
    query: Query<(Entity, &FlightDynamicsEngine), Without<AircraftSnapshot>>,
) {
    for (entity, engine) in query.iter() {
        commands.entity(entity).insert(engine.snapshot());
    }
}

pub fn sync_snapshot_system(
    mut query: Query<
        (&FlightDynamicsEngine, &mut AircraftSnapshot),
        Changed<FlightDynamicsEngine>,
    >,
) {
    for (engine, mut snapshot) in query.iter_mut() {
        *snapshot = engine.snapshot();
    }
}
