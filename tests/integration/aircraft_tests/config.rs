use approx::assert_relative_eq;
use nalgebra::Vector3;
use std::f64::consts::PI;
use tempfile::NamedTempFile;
use webflight::{
    components::{AircraftSource, ConfigError},
    AircraftProperties, FlightSimulation, SimulationConfig,
};

use crate::common::write_trainer_yaml;

#[test]
fn test_aircraft_from_yaml() {
    let file = write_trainer_yaml();
    let props = AircraftProperties::new(AircraftSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(props.name, "Trainer");
    assert_relative_eq!(props.empty_mass, 1200.0);
    let aspect_ratio = 11.0 * 11.0 / 16.0;
    assert_relative_eq!(props.k, 1.0 / (PI * 0.8 * aspect_ratio), epsilon = 1e-12);
}

#[test]
fn test_missing_aircraft_file() {
    let result = AircraftProperties::from_file("does/not/exist.yaml");
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_simulation_config_with_file_aircraft() -> Result<(), Box<dyn std::error::Error>> {
    let aircraft_file = write_trainer_yaml();
    let config = SimulationConfig {
        aircraft: aircraft_file.path().to_string_lossy().into_owned(),
        initial_position: Vector3::new(0.0, 600.0, 0.0),
        initial_heading: PI / 2.0,
        ..Default::default()
    };

    let config_file = NamedTempFile::new()?;
    config.save(config_file.path())?;
    let loaded = SimulationConfig::load(config_file.path())?;
    assert_eq!(loaded, config);

    let sim = FlightSimulation::from_config(&loaded)?;
    let engine = sim.engine();
    assert_eq!(engine.properties().name, "Trainer");
    assert_relative_eq!(engine.fuel(), 150.0);
    assert_relative_eq!(engine.state().velocity.z, 100.0);
    assert_eq!(sim.physics(), &loaded.physics);

    Ok(())
}

#[test]
fn test_malformed_simulation_config() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new()?;
    std::fs::write(file.path(), "physics: [1, 2, 3]\n")?;
    let result = SimulationConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
    Ok(())
}
