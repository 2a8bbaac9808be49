use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use cucumber::{World as _, given, then, when};
use tempfile::TempDir;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    dir: Option<TempDir>,
    graph_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
    report_path_2: Option<PathBuf>,
    last_cmd: Option<Output>,
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_scc-explorer")
}

fn run_cmd(args: Vec<String>) -> Output {
    Command::new(exe())
        .args(args)
        .output()
        .expect("failed to run scc-explorer binary")
}

fn stderr_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

impl TestWorld {
    fn path_in_dir(&self, name: &str) -> PathBuf {
        self.dir.as_ref().expect("temp dir").path().join(name)
    }

    fn write_graph(&mut self, json: &str) {
        let path = self.path_in_dir("graph.json");
        fs::write(&path, json).expect("write graph fixture");
        self.graph_path = Some(path);
    }

    fn graph_arg(&self) -> String {
        self.graph_path
            .as_ref()
            .expect("graph file")
            .to_string_lossy()
            .into_owned()
    }
}

fn read_report(path: &PathBuf) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("read report");
    serde_json::from_str(&raw).expect("parse report json")
}

#[given("a temp graph workspace")]
fn a_temp_graph_workspace(world: &mut TestWorld) {
    world.dir = Some(tempfile::tempdir().expect("tempdir"));
}

#[given("a graph file with two disjoint cycles")]
fn a_graph_file_with_two_disjoint_cycles(world: &mut TestWorld) {
    world.write_graph(
        r#"{
  "name": "two cycles",
  "node_count": 6,
  "adjacency": [[1], [2], [0], [4], [5], [3]]
}"#,
    );
}

#[given("a graph file with an out-of-range successor")]
fn a_graph_file_with_an_out_of_range_successor(world: &mut TestWorld) {
    world.write_graph(r#"{"node_count": 3, "adjacency": [[1], [9], [0]]}"#);
}

#[when(expr = "I run scc-explorer run with {word} on demo graph {int}")]
fn run_on_demo_graph(world: &mut TestWorld, algorithm: String, graph: usize) {
    let report = world.path_in_dir("report.json");
    let out = run_cmd(vec![
        "run".to_string(),
        "--algorithm".to_string(),
        algorithm,
        "--graph".to_string(),
        graph.to_string(),
        "--out".to_string(),
        report.to_string_lossy().into_owned(),
    ]);
    world.report_path = Some(report);
    world.last_cmd = Some(out);
}

#[when(expr = "I run scc-explorer run with {word} on demo graph {int} twice")]
fn run_on_demo_graph_twice(world: &mut TestWorld, algorithm: String, graph: usize) {
    let first = world.path_in_dir("first.json");
    let second = world.path_in_dir("second.json");

    for path in [&first, &second] {
        let out = run_cmd(vec![
            "run".to_string(),
            "--algorithm".to_string(),
            algorithm.clone(),
            "--graph".to_string(),
            graph.to_string(),
            "--out".to_string(),
            path.to_string_lossy().into_owned(),
        ]);
        assert!(out.status.success(), "run failed: {}", stderr_string(&out));
        world.last_cmd = Some(out);
    }

    world.report_path = Some(first);
    world.report_path_2 = Some(second);
}

#[when(expr = "I run scc-explorer run with {word} on the graph file")]
fn run_on_graph_file(world: &mut TestWorld, algorithm: String) {
    let report = world.path_in_dir("report.json");
    let out = run_cmd(vec![
        "run".to_string(),
        "--algorithm".to_string(),
        algorithm,
        "--in".to_string(),
        world.graph_arg(),
        "--out".to_string(),
        report.to_string_lossy().into_owned(),
    ]);
    world.report_path = Some(report);
    world.last_cmd = Some(out);
}

#[when("I run scc-explorer compare on the graph file")]
fn compare_on_graph_file(world: &mut TestWorld) {
    let out = run_cmd(vec![
        "compare".to_string(),
        "--in".to_string(),
        world.graph_arg(),
    ]);
    world.last_cmd = Some(out);
}

#[when("I run scc-explorer validate on the graph file")]
fn validate_graph_file(world: &mut TestWorld) {
    let out = run_cmd(vec![
        "validate".to_string(),
        "--in".to_string(),
        world.graph_arg(),
    ]);
    world.last_cmd = Some(out);
}

#[when("I run scc-explorer tour with events")]
fn tour_with_events(world: &mut TestWorld) {
    let out = run_cmd(vec!["tour".to_string(), "--emit-events".to_string()]);
    world.last_cmd = Some(out);
}

#[then("the command succeeds")]
fn the_command_succeeds(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.status.success(),
        "command failed (status={:?})\nstderr:\n{}\nstdout:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr),
        String::from_utf8_lossy(&out.stdout)
    );
}

#[then("the command fails")]
fn the_command_fails(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        !out.status.success(),
        "expected failure but succeeded; stderr: {}",
        stderr_string(out)
    );
}

#[then(expr = "stderr mentions {string}")]
fn stderr_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    assert!(
        stderr.contains(&needle),
        "stderr did not contain {needle:?}. stderr was:\n{stderr}"
    );
}

#[then(expr = "the report lists {int} components")]
fn the_report_lists_components(world: &mut TestWorld, count: usize) {
    let report = read_report(world.report_path.as_ref().expect("report path"));
    let components = report["components"].as_array().expect("components array");
    assert_eq!(components.len(), count);
}

#[then(expr = "stdout has {int} {string} events")]
fn stdout_has_events(world: &mut TestWorld, count: usize, kind: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let seen = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter(|ev| ev["type"] == kind.as_str())
        .count();
    assert_eq!(seen, count, "stdout was:\n{stdout}");
}

#[then("the two reports have identical groups")]
fn the_two_reports_have_identical_groups(world: &mut TestWorld) {
    let a = read_report(world.report_path.as_ref().expect("first report"));
    let b = read_report(world.report_path_2.as_ref().expect("second report"));

    assert_eq!(a["components"], b["components"]);
    assert_eq!(a["group_of"], b["group_of"]);
    assert_eq!(a["discovery"], b["discovery"]);
    assert_eq!(a["lowlink"], b["lowlink"]);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
