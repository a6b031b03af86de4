use approx::assert_relative_eq;
use serde_json::json;
use webflight::components::PropertyOverrides;
use webflight::server::{Command, FlightSimulation, Response, Status};

fn send(sim: &mut FlightSimulation, line: &str) -> Response {
    let command: Command = serde_json::from_str(line).expect("valid command");
    sim.handle_command(command)
}

#[test]
fn test_session_round_trip() {
    let mut sim = FlightSimulation::new();

    let commands = [
        r#"{"SetAircraftType": {"name": "F-16"}}"#,
        r#"{"Initialize": {"x": 0.0, "y": 1000.0, "z": 0.0, "heading": 0.0}}"#,
        r#"{"SetThrottle": {"value": 3.0}}"#,
        r#"{"SetControlSurfaces": {"aileron": 0.1, "elevator": -9.0, "rudder": 0.0}}"#,
    ];
    for line in commands {
        assert_eq!(send(&mut sim, line).status, Status::Ok, "{}", line);
    }

    for _ in 0..30 {
        let response = send(&mut sim, r#"{"Update": {"delta_time": 0.016666666666666666}}"#);
        assert!(response.is_ok());
    }

    let state = send(&mut sim, r#""GetState""#).data.expect("state data");
    assert_eq!(state["throttle"], json!(1.0));
    assert_eq!(state["elevator"], json!(-1.0));
    assert!(state["fuel"].as_f64().unwrap() < 1587.5);
    assert_eq!(state["position"].as_array().unwrap().len(), 3);

    let props = send(&mut sim, r#""GetProperties""#).data.expect("properties");
    assert_eq!(props["name"], json!("F-16 Fighting Falcon"));
}

#[test]
fn test_property_override_command() {
    let mut sim = FlightSimulation::new();
    let line = r#"{"SetAircraftProperties": {
        "empty_mass": 9000.0, "max_fuel": 4000.0, "wing_area": 30.0,
        "max_thrust": 120000.0, "thrust_military": 70000.0,
        "critical_aoa_positive": 0.35, "critical_aoa_negative": -0.25,
        "min_maneuverable_speed": 40.0, "max_speed": 600.0}}"#;
    assert!(send(&mut sim, line).is_ok());

    let props = sim.engine().properties();
    assert_eq!(props.empty_mass, 9000.0);
    let aspect_ratio = 9.96 * 9.96 / 30.0;
    assert_relative_eq!(
        props.k,
        1.0 / (std::f64::consts::PI * 0.8 * aspect_ratio),
        epsilon = 1e-12
    );
    assert_relative_eq!(sim.engine().state().mass, 9000.0 + sim.engine().fuel());
}

#[test]
fn test_invalid_property_overrides_are_rejected() {
    let mut sim = FlightSimulation::new();
    send(&mut sim, r#"{"Initialize": {"x": 0.0, "y": 1000.0, "z": 0.0, "heading": 0.0}}"#);
    let before = sim.engine().properties().clone();

    let inverted = r#"{"SetAircraftProperties": {
        "empty_mass": 8570.0, "max_fuel": 3175.0, "wing_area": 27.87,
        "max_thrust": 127000.0, "thrust_military": 76000.0,
        "critical_aoa_positive": -0.2, "critical_aoa_negative": 0.3,
        "min_maneuverable_speed": 20.0, "max_speed": 686.0}}"#;
    let response = send(&mut sim, inverted);
    assert_eq!(response.status, Status::Error);
    assert!(response.error.unwrap().contains("critical AOA"));

    // JSON has no NaN literal, so a host-side NaN arrives through the typed command
    let mut overrides = PropertyOverrides::from(&before);
    overrides.critical_aoa_positive = f64::NAN;
    let response = sim.handle_command(Command::SetAircraftProperties(overrides));
    assert_eq!(response.status, Status::Error);

    let mut overrides = PropertyOverrides::from(&before);
    overrides.wing_area = 0.0;
    let response = sim.handle_command(Command::SetAircraftProperties(overrides));
    assert!(response.error.unwrap().contains("wing_area"));

    assert_eq!(sim.engine().properties(), &before);
    let response = send(&mut sim, r#"{"Update": {"delta_time": 0.01}}"#);
    assert!(response.is_ok());
    let state = send(&mut sim, r#""GetState""#).data.expect("state data");
    assert!(state["altitude"].as_f64().unwrap().is_finite());
}

#[test]
fn test_error_responses() {
    let mut sim = FlightSimulation::new();

    let response = send(&mut sim, r#"{"Update": {"delta_time": 0.1}}"#);
    assert_eq!(response.status, Status::Error);

    send(&mut sim, r#"{"Initialize": {"x": 0.0, "y": 0.0, "z": 0.0, "heading": 0.0}}"#);
    let response = send(&mut sim, r#"{"Update": {"delta_time": -1.0}}"#);
    assert_eq!(response.status, Status::Error);
    assert!(response.error.unwrap().contains("-1"));

    let response = send(&mut sim, r#""Reset""#);
    assert!(response.is_ok());
    assert!(!sim.engine().is_initialized());
}

#[test]
fn test_close_and_version() {
    let mut sim = FlightSimulation::new();
    assert!(send(&mut sim, r#""Close""#).is_ok());

    let version = send(&mut sim, r#""Version""#).data.unwrap();
    assert_eq!(version["name"], json!("webflight"));
    assert_eq!(version["version"], json!(webflight::server::version()));
}
