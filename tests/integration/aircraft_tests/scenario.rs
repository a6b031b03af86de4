use approx::assert_relative_eq;
use nalgebra::Vector3;
use webflight::{
    components::AircraftSnapshot, vehicles::step_all, FlightDynamicsEngine, PhysicsConfig,
};

use crate::common::{
    assert_attitude_in_range, assert_state_finite, create_running_engine,
    create_test_physics_config, TestAppBuilder,
};

#[test]
fn test_f16_half_throttle_accelerates() {
    let mut engine = create_running_engine(Vector3::new(0.0, 1000.0, 0.0), 0.0);
    engine.set_throttle(0.5);
    engine.set_control_surfaces(0.0, 0.0, 0.0);

    let dt = 1.0 / 60.0;
    engine.update(dt).unwrap();
    assert_relative_eq!(engine.state().mass, 10157.5);

    let mut airspeeds = vec![engine.state().airspeed];
    for _ in 0..3 {
        for _ in 0..60 {
            engine.update(dt).unwrap();
            assert_relative_eq!(engine.state().thrust, 63500.0);
        }
        airspeeds.push(engine.state().airspeed);
    }

    assert!(airspeeds.last().unwrap() > &100.0);
    assert!(airspeeds.last().unwrap() > airspeeds.first().unwrap());
    assert_state_finite(engine.state());
}

#[test]
fn test_zero_input_step() {
    let mut engine = create_running_engine(Vector3::new(0.0, 1000.0, 0.0), 0.0);
    engine.update(0.1).unwrap();

    let state = engine.state();
    assert_eq!(state.roll_rate, 0.0);
    assert_eq!(state.pitch_rate, 0.0);
    assert_eq!(state.heading_rate, 0.0);
    assert!(state.altitude < 1000.0);
}

#[test]
fn test_plugin_matches_direct_stepping() {
    let config = create_test_physics_config();
    let engine = create_running_engine(Vector3::new(0.0, 1500.0, 0.0), 0.3);
    let mut reference = engine.clone();

    let mut app = TestAppBuilder::new()
        .with_engine(engine)
        .with_physics(config.clone())
        .build();
    assert_eq!(app.get_resource::<PhysicsConfig>(), Some(&config));

    app.run_steps(120);
    for _ in 0..120 {
        reference.update(config.timestep).unwrap();
    }

    let snapshot = app.query_single::<AircraftSnapshot>().unwrap().clone();
    assert_relative_eq!(
        snapshot.state.altitude,
        reference.state().altitude,
        epsilon = 1e-9
    );
    assert_relative_eq!(snapshot.fuel, reference.fuel(), epsilon = 1e-9);
    assert_attitude_in_range(&snapshot.state);
}

#[test]
fn test_plugin_steps_many_aircraft() {
    let mut builder = TestAppBuilder::new();
    for i in 0..5 {
        builder = builder.with_engine(create_running_engine(
            Vector3::new(i as f64 * 500.0, 2000.0, 0.0),
            0.0,
        ));
    }
    let mut app = builder.build();

    app.run_steps(60);

    let engines = app.query_all::<FlightDynamicsEngine>();
    assert_eq!(engines.len(), 5);
    for engine in engines {
        assert!(engine.state().altitude < 2000.0);
        assert_state_finite(engine.state());
    }
}

#[test]
fn test_fleet_stepping() {
    let mut engines: Vec<_> = (0..16)
        .map(|i| create_running_engine(Vector3::new(0.0, 1000.0, i as f64 * 100.0), 0.0))
        .collect();

    assert_eq!(step_all(&mut engines, 1.0 / 60.0).unwrap(), 16);
    for engine in &engines {
        assert!(engine.state().position.x > 0.0);
    }
}
