//! End-to-end tests for `primer planet` and the utility commands

mod support;
use support::harness::{stdout, TestHarness};

#[test]
fn test_planet_prints_description_and_orbit() {
    let harness = TestHarness::new();
    let output = harness.run(&["planet", "Earth", "Terrestrial", "Sun"], "");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Planet: Earth | Type: Terrestrial | Star: Sun\nEarth is orbiting around Sun...\n"
    );
}

#[test]
fn test_planet_blank_field_rejected() {
    let harness = TestHarness::new();
    let output = harness.run(&["planet", "Earth", " ", "Sun"], "");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "name, planet type, and star cannot be empty\n"
    );
}

#[test]
fn test_planet_from_file() {
    let harness = TestHarness::new();
    let path = harness.write_file(
        "jupiter.json",
        r#"{"name": "Jupiter", "planet_type": "Gas Giant", "star": "Sun"}"#,
    );

    let output = harness.run(&["planet", "--from-file", path.to_str().unwrap()], "");

    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Jupiter is orbiting around Sun...\n"));
}

#[test]
fn test_planet_from_file_type_error() {
    let harness = TestHarness::new();
    let path = harness.write_file("bad.json", r#"{"name": "Jupiter", "star": "Sun"}"#);

    let output = harness.run(&["planet", "--from-file", path.to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "name, planet type, and star must be strings\n"
    );
}

#[test]
fn test_planet_json_output() {
    let harness = TestHarness::new();
    let output = harness.run(&["--json", "planet", "Mars", "Terrestrial", "Sun"], "");

    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["description"], "Planet: Mars | Type: Terrestrial | Star: Sun");
    assert_eq!(value["planet"]["star"], "Sun");
}

#[test]
fn test_version_command() {
    let harness = TestHarness::new();
    let output = harness.run(&["version", "--verbose"], "");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with(&format!("primer {}", env!("CARGO_PKG_VERSION"))));
    assert!(out.contains("commit: "));
}

#[test]
fn test_completion_command() {
    let harness = TestHarness::new();
    let output = harness.run(&["completion", "bash"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("primer"));
}
