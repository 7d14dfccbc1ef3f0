//! Integration tests for the degreegap binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
data:
  programs: data/programs.json
  catalogs: [data/catalog.json]
  equivalencies: data/equivalencies.json
recommend:
  top_n: 15
  interest_filter: Minor
"#;

const CATALOG: &str = r#"[
  {"courseCode": "ECON 102", "title": "Introductory Microeconomic Analysis", "credits": 3},
  {"courseCode": "ECON 302", "title": "Intermediate Microeconomic Analysis", "credits": 3,
   "prerequisites_raw": "Enforced Prerequisite at Enrollment: ECON 102 or ECON 104"},
  {"courseCode": "ECON 442", "title": "Economics of Industrial Organization", "credits": 3,
   "prerequisites_raw": "ECON 302"},
  {"courseCode": "MGMT 301", "title": "Basic Management Concepts", "credits": 3},
  {"courseCode": "MKTG 301W", "title": "Principles of Marketing", "credits": 3},
  {"courseCode": "HIST 21", "title": "American Civilization to 1877", "credits": 3,
   "genEdAttributes": ["GH"], "culturalAttributes": ["US"]}
]"#;

const PROGRAMS: &str = r#"[
  {"id": "Economics", "type": "Majors",
   "rules": [{"type": "all", "courses": [{"code": "ECON 102", "credits": 3}]}]},
  {"id": "Business", "type": "Minors", "url": "https://bulletins.example.edu/business",
   "rules": [{"type": "all", "name": "Core", "courses": [
      {"code": "MGMT 301", "credits": 3}, {"code": "MKTG 301W", "credits": 3}]}]},
  {"id": "History", "type": "Minors",
   "rules": [{"type": "subset", "credits_needed": 3, "courses": [{"code": "HIST 21", "credits": 3}]}]}
]"#;

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".degreegap/config.yml", CONFIG);
    write(temp.path(), "data/catalog.json", CATALOG);
    write(temp.path(), "data/programs.json", PROGRAMS);
    temp
}

fn degreegap(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("degreegap"));
    cmd.current_dir(dir).env_remove("DEGREEGAP_CONFIG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    degreegap(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Measure how far a student"))
        .stdout(predicate::str::contains("recommend"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    degreegap(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_a_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    degreegap(temp.path()).assert().failure();
    Ok(())
}

#[test]
fn missing_config_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    degreegap(temp.path())
        .arg("majors")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No configuration found"))
        .stdout(predicate::str::contains("degreegap init"));
    Ok(())
}

#[test]
fn init_then_lint_reports_missing_data() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    degreegap(temp.path()).arg("init").assert().success();
    assert!(temp.path().join(".degreegap/config.yml").exists());

    degreegap(temp.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    degreegap(temp.path())
        .arg("lint")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Data file not found"));
    Ok(())
}

#[test]
fn project_root_is_found_from_a_subdirectory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let nested = temp.path().join("notes/fall");
    fs::create_dir_all(&nested)?;

    degreegap(&nested)
        .arg("majors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Economics"));
    Ok(())
}

#[test]
fn majors_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = degreegap(temp.path()).args(["majors", "--json"]).output()?;
    assert!(output.status.success());
    let majors: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(majors, vec!["Economics"]);
    Ok(())
}

#[test]
fn recommend_json_ranks_minors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = degreegap(temp.path())
        .args([
            "recommend",
            "--history",
            "MGMT 301,MKTG301W",
            "--gen-ed",
            "GH",
            "--json",
        ])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["count"], 2);
    assert_eq!(value["recommendations"][0]["id"], "Business");
    assert_eq!(value["recommendations"][0]["gap_credits"], 0.0);
    assert_eq!(value["recommendations"][1]["optimization_count"], 1);
    Ok(())
}

#[test]
fn recommend_reads_history_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(temp.path(), "history.txt", "# spring\nHIST 21\n");

    let output = degreegap(temp.path())
        .args(["recommend", "--history-file", "history.txt", "--json"])
        .output()?;
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["recommendations"][0]["id"], "History");
    Ok(())
}

#[test]
fn recommend_table_in_human_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    degreegap(temp.path())
        .args(["recommend", "--history", "HIST 21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History"))
        .stdout(predicate::str::contains("Business"))
        .stdout(predicate::str::contains("Economics").not());
    Ok(())
}

#[test]
fn gap_reports_major_covered_courses() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(
        temp.path(),
        "data/programs.json",
        r#"[
          {"id": "Economics", "type": "Majors",
           "rules": [{"type": "all", "courses": [{"code": "ECON 102"}]}]},
          {"id": "Economics Minor", "type": "Minors",
           "rules": [{"type": "all", "courses": [{"code": "ECON 102"}, {"code": "ECON 302"}]}]}
        ]"#,
    );

    let output = degreegap(temp.path())
        .args(["gap", "economics minor", "--major", "Economics", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["total_gap_credits"], 3.0);
    assert_eq!(value["missing"][0]["status"], "major_covered");
    assert_eq!(value["missing"][1]["text"], "ECON 302");
    Ok(())
}

#[test]
fn gap_unknown_program_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    degreegap(temp.path())
        .args(["gap", "Astrobiology"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown program: Astrobiology"));
    Ok(())
}

#[test]
fn cost_prices_the_chain() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    degreegap(temp.path())
        .args(["cost", "ECON 442"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ECON 102 -> ECON 302 -> ECON 442",
        ))
        .stdout(predicate::str::contains("Total: 9 credits"));
    Ok(())
}

#[test]
fn cost_uses_equivalencies() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(
        temp.path(),
        "data/catalog.json",
        r#"[{"courseCode": "MATH 140", "credits": 4},
            {"courseCode": "STAT 200", "credits": 4},
            {"courseCode": "ECON 306", "credits": 3, "prerequisites_raw": "MATH 110"}]"#,
    );
    write(
        temp.path(),
        "data/equivalencies.json",
        r#"{"MATH 110": {"equivalents": ["MATH 140"], "reason": "calculus sequence"}}"#,
    );

    let output = degreegap(temp.path())
        .args(["cost", "ECON 306", "--history", "MATH 140", "--json"])
        .output()?;
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["total_credits"], 3.0);
    Ok(())
}

#[test]
fn prereqs_shows_logic() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    degreegap(temp.path())
        .args(["prereqs", "econ302"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requires: (ECON 102 OR ECON 104)"));
    Ok(())
}

#[test]
fn lint_json_on_clean_data() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = degreegap(temp.path())
        .args(["lint", "--format", "json"])
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["summary"]["errors"], 0);
    Ok(())
}

#[test]
fn lint_strict_fails_on_unknown_course() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(
        temp.path(),
        "data/programs.json",
        r#"[{"id": "Business", "type": "Minors",
             "rules": [{"type": "all", "courses": [{"code": "MGMT 999"}]}]}]"#,
    );

    degreegap(temp.path()).arg("lint").assert().success();
    degreegap(temp.path())
        .args(["lint", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown-course"));
    Ok(())
}

#[test]
fn explicit_config_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(
        temp.path(),
        "alt.yml",
        "data:\n  programs: data/programs.json\n  catalogs: [data/catalog.json]\nrecommend:\n  interest_filter: Majors\n",
    );

    let output = degreegap(temp.path())
        .args(["--config", "alt.yml", "recommend", "--json"])
        .output()?;
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["count"], 1);
    assert_eq!(value["recommendations"][0]["id"], "Economics");
    Ok(())
}

#[test]
fn schema_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = degreegap(temp.path()).arg("schema").output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["type"], "array");
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    degreegap(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_degreegap"));
    Ok(())
}

#[test]
fn quiet_conflicts_with_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    degreegap(temp.path())
        .args(["--quiet", "--verbose", "schema"])
        .assert()
        .failure();
    Ok(())
}
