//! Integration tests for the graphstep CLI
//!
//! Every run passes `--delay-ms 0` so playback never sleeps.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

fn graphstep() -> Command {
    let mut cmd = cargo_bin_cmd!("graphstep");
    cmd.env_remove("RUST_LOG")
        .env_remove("GRAPHSTEP_LOG")
        .args(["--delay-ms", "0"]);
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    graphstep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphstep"))
        .stdout(predicate::str::contains("traverse"))
        .stdout(predicate::str::contains("shortest"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    graphstep()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphstep"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    graphstep()
        .args(["--format", "xml", "traverse", "-n", "1", "-s", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_malformed_edge_exit_code_2() {
    graphstep()
        .args(["traverse", "-n", "2", "-s", "1", "-e", "1-2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FROM:TO"));
}

#[test]
fn test_usage_error_json_envelope() {
    let output = graphstep()
        .args(["--format", "json", "shortest", "-n", "2"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "usage_error");
    assert_eq!(envelope["error"]["code"], 2);
}

#[test]
fn test_zero_vertices_is_usage_error() {
    graphstep()
        .args(["traverse", "-n", "0", "-s", "1"])
        .assert()
        .code(2);
}

// ============================================================================
// Data errors
// ============================================================================

#[test]
fn test_edge_to_missing_vertex_exit_code_3() {
    graphstep()
        .args(["traverse", "-n", "2", "-s", "1", "-e", "1:7"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn test_unknown_source_exit_code_3() {
    graphstep()
        .args(["shortest", "-n", "2", "-s", "5"])
        .assert()
        .code(3);
}

#[test]
fn test_negative_cycle_exit_code_3() {
    let output = graphstep()
        .args([
            "--format",
            "json",
            "--quiet",
            "shortest",
            "-a",
            "bellman-ford",
            "-n",
            "3",
            "-s",
            "1",
            "-e",
            "1:2:1",
            "-e",
            "2:3:-2",
            "-e",
            "3:2:1",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "negative_cycle");
    assert!(envelope["error"]["edge"]["from"].is_number());
}

#[test]
fn test_negative_cycle_stderr_is_only_the_envelope() {
    let output = graphstep()
        .args([
            "--format",
            "json",
            "shortest",
            "-a",
            "bellman-ford",
            "-s",
            "1",
            "-n",
            "2",
            "-e",
            "1:2:5",
            "-e",
            "2:1:-10",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "unexpected stderr: {}", stderr);
    let envelope: serde_json::Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "negative_cycle");
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_traverse_bfs_visit_order() {
    graphstep()
        .args([
            "--quiet", "traverse", "-n", "5", "-s", "1", "-e", "1:2", "-e", "1:3", "-e", "2:4",
            "-e", "3:5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visit order: 1 2 3 4 5"));
}

#[test]
fn test_traverse_dfs_visit_order() {
    graphstep()
        .args([
            "--quiet", "traverse", "-a", "dfs", "-n", "5", "-s", "1", "-e", "1:2", "-e", "1:3",
            "-e", "2:4", "-e", "3:5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visit order: 1 2 4 3 5"));
}

#[test]
fn test_traverse_prints_steps() {
    graphstep()
        .args(["traverse", "-n", "2", "-s", "1", "-e", "1:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vertex 1 -> in_progress"))
        .stdout(predicate::str::contains("edge 1 -> 2 traversed"));
}

#[test]
fn test_traverse_json_steps_and_result() {
    let output = graphstep()
        .args(["--format", "json", "traverse", "-n", "2", "-s", "1", "-e", "1:2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["step"], 1);
    assert_eq!(first["event"], "vertex_marked");
    assert_eq!(first["vertex"], 1);
    assert!(stdout.contains("\"edge_traversed\""));
    assert!(stdout.contains("\"visited\""));
}

// ============================================================================
// Path queries
// ============================================================================

#[test]
fn test_path_found() {
    graphstep()
        .args([
            "--quiet", "path", "--from", "1", "--to", "3", "-n", "3", "-e", "1:2", "-e", "2:3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 1 -> 2 -> 3"));
}

#[test]
fn test_path_missing_in_directed_graph() {
    graphstep()
        .args([
            "--quiet", "path", "--from", "3", "--to", "1", "-n", "3", "-e", "1:2", "-e", "2:3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 3 to 1"));
}

#[test]
fn test_path_undirected_json_highlights_edges() {
    let json = stdout_json(graphstep().args([
        "--format",
        "json",
        "--quiet",
        "path",
        "-a",
        "dfs",
        "--from",
        "3",
        "--to",
        "1",
        "-n",
        "3",
        "--undirected",
        "-e",
        "1:2",
        "-e",
        "2:3",
    ]));

    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!([3, 2, 1]));
    assert_eq!(json["highlighted_edges"], serde_json::json!([[1, 2], [2, 3]]));
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_shortest_dijkstra() {
    graphstep()
        .args([
            "--quiet", "shortest", "-n", "4", "-s", "1", "-e", "1:2:1", "-e", "2:3:2", "-e",
            "1:3:10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest paths from 1 (dijkstra):"))
        .stdout(predicate::str::contains("2: distance 1, path 1 -> 2"))
        .stdout(predicate::str::contains("3: distance 3, path 1 -> 2 -> 3"))
        .stdout(predicate::str::contains("4: unreachable"));
}

#[test]
fn test_shortest_bellman_ford_negative_edge() {
    let json = stdout_json(graphstep().args([
        "--format",
        "json",
        "--quiet",
        "shortest",
        "-a",
        "bellman-ford",
        "-n",
        "3",
        "-s",
        "1",
        "-e",
        "1:2:4",
        "-e",
        "1:3:5",
        "-e",
        "3:2:-3",
    ]));

    assert_eq!(json["algorithm"], "bellman-ford");
    assert_eq!(json["distances"]["2"], 2);
    assert_eq!(json["paths"]["2"], serde_json::json!([1, 3, 2]));
    assert_eq!(json["unreachable"], serde_json::json!([]));
}

#[test]
fn test_shortest_critical_path_on_dag() {
    let json = stdout_json(graphstep().args([
        "--format",
        "json",
        "--quiet",
        "shortest",
        "-a",
        "critical-path",
        "-n",
        "4",
        "-s",
        "1",
        "-e",
        "1:2:3",
        "-e",
        "1:3:1",
        "-e",
        "3:2:1",
        "-e",
        "2:4:2",
    ]));

    assert_eq!(json["distances"]["4"], 4);
    assert_eq!(json["paths"]["4"], serde_json::json!([1, 3, 2, 4]));
    assert_eq!(
        json["highlighted_edges"],
        serde_json::json!([[1, 3], [3, 2], [2, 4]])
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_default_weight() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graphstep.toml");
    std::fs::write(&path, "version = 1\n\n[canvas]\ndefault_edge_weight = 5\n").unwrap();

    graphstep()
        .arg("--config")
        .arg(&path)
        .args(["--quiet", "shortest", "-n", "2", "-s", "1", "-e", "1:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2: distance 5, path 1 -> 2"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    graphstep()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["traverse", "-n", "1", "-s", "1"])
        .assert()
        .code(1);
}
