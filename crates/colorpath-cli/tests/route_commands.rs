use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/network_graph.json")
        .canonicalize()
        .expect("fixture network present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("colorpath");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("COLORPATH_GRAPH");
    cmd
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.arg("-j").arg(fixture_path());
    cmd
}

#[test]
fn basic_format_outputs_minimal_path() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "F", "--format", "basic"]);

    cmd.assert()
        .success()
        .stdout("+ A\n| B\n| C\n| D\n| E\n- F\n");
}

#[test]
fn red_route_takes_shortcut() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "F", "-c", "red", "--format", "basic"]);

    cmd.assert()
        .success()
        .stdout("+ A\n| B\n| C\n| H\n- F\n");
}

#[test]
fn green_route_follows_main_line() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "F", "-c", "green", "--format", "basic"]);

    cmd.assert()
        .success()
        .stdout("+ A\n| B\n| C\n| D\n| E\n- F\n");
}

#[test]
fn unmatched_color_keeps_only_unlabelled_stations() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "F", "-c", "non_existing_color", "--format", "basic"]);

    cmd.assert().success().stdout("+ A\n| B\n| C\n- F\n");
}

#[test]
fn text_format_reports_cost_and_category() {
    let mut cmd = prepare_command();
    cmd.args(["--root", "A", "--goal", "F", "--color", "red"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from A to F (4 hops; cost: 4; category: red):",
        ))
        .stdout(predicate::str::contains("GOAL F"));
}

#[test]
fn raw_flag_prints_unprojected_path() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "F", "-c", "non_existing_color"])
        .args(["--raw", "--format", "basic"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("+ A\n| B\n| C\n- F\n"))
        .stdout(predicate::str::contains("Raw path: A -> B -> C ->"));
}

#[test]
fn json_format_is_machine_readable() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "B", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["hops"], 1);
    assert_eq!(value["category"]["kind"], "any");
    assert_eq!(value["steps"][0]["id"], "A");
    assert_eq!(value["steps"][1]["id"], "B");
}

#[test]
fn rich_format_has_result_heading() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "B", "--format", "rich"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("# RESULT"));
}

#[test]
fn unknown_station_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["-r", "A", "-g", "Z"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown goal station 'Z'."));
}

#[test]
fn disconnected_stations_report_no_path() {
    let temp_dir = tempdir().expect("create temp dir");
    let graph = temp_dir.path().join("split.json");
    fs::write(
        &graph,
        r#"{ "A": { "color": [], "costs": [["B", 1]] }, "B": { "color": [], "costs": [] } }"#,
    )
    .expect("write graph");

    let mut cmd = cli();
    cmd.arg("-j").arg(&graph).args(["-r", "B", "-g", "A"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No path found between B and A."));
}

#[test]
fn dangling_edge_is_reported() {
    let temp_dir = tempdir().expect("create temp dir");
    let graph = temp_dir.path().join("dangling.json");
    fs::write(&graph, r#"{ "A": { "color": [], "costs": [["Nowhere", 1]] } }"#)
        .expect("write graph");

    let mut cmd = cli();
    cmd.arg("-j").arg(&graph).args(["-r", "A", "-g", "A"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "station 'A' links to unknown station 'Nowhere'",
    ));
}

#[test]
fn missing_graph_file_suggests_configuration() {
    let temp_dir = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.current_dir(temp_dir.path()).args(["-r", "A", "-g", "B"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Network graph not found at network_graph.json"))
        .stderr(predicate::str::contains("COLORPATH_GRAPH"));
}

#[test]
fn graph_path_can_come_from_environment() {
    let mut cmd = cli();
    cmd.env("COLORPATH_GRAPH", fixture_path())
        .args(["-r", "A", "-g", "B", "--format", "basic"]);

    cmd.assert().success().stdout("+ A\n- B\n");
}
