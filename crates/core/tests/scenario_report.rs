//! Integration tests for scenario files and the three-line report

use flight_calc_core::{
    KilogramsPerSecond, MetersPerSecondSquared, ReportLine, Scenario, ScenarioError,
};

fn report(scenario: &Scenario) -> Vec<String> {
    let mut lines = Vec::new();
    scenario
        .run(|line| lines.push(line.to_string()))
        .unwrap();
    lines
}

#[test]
fn test_reference_report_lines() {
    let lines = report(&Scenario::default());
    assert_eq!(lines[0], "Corrected New Velocity: 48880.00 km/h");
    assert_eq!(lines[1], "Corrected New Distance: 10000.00 km");
    assert_eq!(lines[2], "Corrected Remaining Fuel: 3200.00 kg");
}

#[test]
fn test_report_line_labels() {
    let mut labels = Vec::new();
    Scenario::default()
        .run(|line| labels.push(line.label()))
        .unwrap();
    assert_eq!(
        labels,
        ["Corrected New Velocity", "Corrected New Distance", "Corrected Remaining Fuel"]
    );
}

#[test]
fn test_acceleration_does_not_change_distance() {
    let coasting = Scenario {
        acceleration: MetersPerSecondSquared::new(0.0),
        ..Scenario::default()
    };
    let boosting = Scenario {
        acceleration: MetersPerSecondSquared::new(25.0),
        ..Scenario::default()
    };

    let distance = |s: &Scenario| {
        let mut found = None;
        s.run(|line| {
            if let ReportLine::Distance(d) = line {
                found = Some(d);
            }
        })
        .unwrap();
        found
    };
    assert_eq!(distance(&coasting), distance(&boosting));
}

#[test]
fn test_scenario_file_round_trip_uses_camel_case() {
    let scenario = Scenario {
        fuel_burn_rate: KilogramsPerSecond::new(2.0),
        ..Scenario::default()
    };

    let temp_path = std::env::temp_dir().join("flight_calc_scenario_report.json");
    scenario.save(&temp_path).unwrap();

    let contents = std::fs::read_to_string(&temp_path).unwrap();
    assert!(contents.contains("\"fuelBurnRate\""));
    assert!(contents.contains("\"initialVelocity\""));

    let loaded = Scenario::load(&temp_path).unwrap();
    assert_eq!(report(&loaded)[2], "Corrected Remaining Fuel: -2200.00 kg");

    std::fs::remove_file(&temp_path).unwrap();
}

#[test]
fn test_scenario_file_with_missing_field() {
    let err = Scenario::from_json_str(
        r#"{ "initialVelocity": 10000, "acceleration": 3, "time": 3600,
             "initialDistance": 0, "initialFuel": 5000 }"#,
    )
    .unwrap_err();

    match err {
        ScenarioError::InvalidArgument(inner) => assert_eq!(inner.parameter(), "fuelBurnRate"),
        other => panic!("unexpected error: {other}"),
    }
}
