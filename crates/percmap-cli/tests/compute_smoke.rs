use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};

fn cli() -> Command {
    Command::new(assert_cmd::cargo_bin!("percmap-cli"))
}

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let mut child = cli()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn percmap-cli");
    child
        .stdin
        .as_mut()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for percmap-cli")
}

fn seed_json() -> String {
    let out = cli().arg("seed").output().expect("seed runs");
    assert!(out.status.success());
    String::from_utf8(out.stdout).expect("seed prints utf-8")
}

#[test]
fn seed_emits_a_valid_project() {
    let v: Value = serde_json::from_str(&seed_json()).expect("seed prints JSON");

    assert_eq!(v["brands"].as_array().unwrap().len(), 5);
    assert_eq!(v["attributes"].as_array().unwrap().len(), 7);
    assert_eq!(v["benchmark"], "IDEAL");
    assert_eq!(v["attributes"][5]["reversed"], true);
    assert_eq!(v["responses"].as_array().unwrap().len(), 3);
}

#[test]
fn compute_reads_a_project_file_and_prints_the_map() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(seed_json().as_bytes()).unwrap();

    let out = cli()
        .arg("compute")
        .arg(file.path())
        .output()
        .expect("compute runs");
    assert!(out.status.success());

    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    let brand_coords = v["brandCoords"].as_array().unwrap();
    let attr_coords = v["attrCoords"].as_array().unwrap();

    assert_eq!(brand_coords.len(), 5);
    assert_eq!(attr_coords.len(), 7);
    assert_eq!(v["idealIndex"], 4);

    // Every coordinate stays inside the unit disk.
    for p in brand_coords.iter().chain(attr_coords) {
        let x = p[0].as_f64().unwrap();
        let y = p[1].as_f64().unwrap();
        assert!(x.hypot(y) <= 1.0 + 1e-9);
    }
}

#[test]
fn compute_reads_from_stdin_by_default() {
    let out = run_with_stdin(&[], &seed_json());
    assert!(out.status.success());

    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["brandCoords"].as_array().unwrap().len(), 5);
}

#[test]
fn the_pca_strategy_is_selectable() {
    let seed = seed_json();
    let mds = run_with_stdin(&["compute"], &seed);
    let pca = run_with_stdin(&["compute", "--strategy", "pca"], &seed);

    assert!(mds.status.success());
    assert!(pca.status.success());

    let mds_v: Value = serde_json::from_slice(&mds.stdout).unwrap();
    let pca_v: Value = serde_json::from_slice(&pca.stdout).unwrap();
    assert_ne!(mds_v["attrCoords"], pca_v["attrCoords"]);
}

#[test]
fn summary_includes_the_display_tables() {
    let out = run_with_stdin(&["summary"], &seed_json());
    assert!(out.status.success());

    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    let tables = &v["tables"];
    assert_eq!(tables["performanceMeans"].as_array().unwrap().len(), 5);
    assert_eq!(tables["attributeSensitivity"].as_array().unwrap().len(), 7);
    assert_eq!(tables["distancesToIdeal"].as_array().unwrap().len(), 5);
}

#[test]
fn validate_rejects_duplicate_brands() {
    let bad = r#"{
        "id": "bad",
        "brands": [{ "name": "A" }, { "name": "A" }],
        "attributes": [{ "id": "t", "labelEs": "Sabor", "labelEn": "Taste" }]
    }"#;

    let out = run_with_stdin(&["validate"], bad);
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("duplicate brand name"), "stderr: {stderr}");
}

#[test]
fn validate_accepts_the_seed() {
    let out = run_with_stdin(&["validate"], &seed_json());
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ok: 5 brands"), "stdout: {stdout}");
}

#[test]
fn seed_round_trips_through_the_project_model() {
    let text = seed_json();
    let project: percmap::Project = serde_json::from_str(&text).unwrap();
    let reserialized = serde_json::to_string(&project).unwrap();
    let reparsed: percmap::Project = serde_json::from_str(&reserialized).unwrap();

    assert_eq!(project, reparsed);
}

#[test]
fn unknown_flags_print_usage() {
    let out = cli().arg("--bogus").output().expect("cli runs");
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("USAGE"), "stderr: {stderr}");
}
