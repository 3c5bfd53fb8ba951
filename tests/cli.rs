use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn hohmann() -> Command {
    Command::cargo_bin("hohmann").expect("hohmann bin")
}

#[test]
fn hohmann_subcommand_prints_totals() {
    hohmann()
        .args(["hohmann", "--r1", "6678", "--r2", "9378", "--mu", "398600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hohmann Transfer"))
        .stdout(predicate::str::contains("1.1977"));
}

#[test]
fn json_output_is_machine_readable() {
    let output = hohmann()
        .args(["--json", "h-point", "--a", "7000", "--ap", "10000", "--b", "42000", "--bp", "50000", "--from-apogee"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["departure"], "apogee");
    assert!(value["totalDv"].as_f64().unwrap() > 0.0);
    assert_eq!(value["startR"], 10_000.0);
}

#[test]
fn intermediate_radius_below_target_fails() {
    hohmann()
        .args(["bi-elliptic", "--r1", "7000", "--r2", "105000", "--r-intermediate", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("intermediate"));
}

#[test]
fn unknown_body_fails() {
    hohmann()
        .args(["--body", "Vulcan", "hohmann", "--r1", "7000", "--r2", "8000"])
        .assert()
        .failure();
}

#[test]
fn recommend_prefers_perigee_when_raising() {
    hohmann()
        .args(["recommend", "--a", "7000", "--ap", "10000", "--b", "42000", "--bp", "50000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("depart from perigee"));
}

#[test]
fn compare_writes_csv_sweep() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("sweep.csv");

    hohmann()
        .args(["compare", "--output", csv_path.to_str().unwrap()])
        .assert()
        .success();

    let text = fs::read_to_string(&csv_path).expect("csv");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines[0].starts_with("ratio,r2_km,r_intermediate_km,hohmann_total_dv_km_s"));
    assert!(lines[1].starts_with("2.0,14000.0,28000.0,"));
}

#[test]
fn reference_catalog_evaluates() {
    hohmann()
        .args(["reference"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bi-elliptic 7000 km to 105000 km"));
}
