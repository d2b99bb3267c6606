use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run the valdump binary with an empty config file, so the user's own
/// options never leak into the test.
fn run_valdump(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").expect("Failed to write config");

    let mut command = Command::new(env!("CARGO_BIN_EXE_valdump"));
    if !args.contains(&"--config") {
        command.arg("--config").arg(&config);
    }
    command
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute valdump")
}

fn stdout_of(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "valdump failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8(output.stdout.clone()).expect("valdump output is not valid UTF-8")
}

#[test]
fn test_dump_fixture() {
    let output = run_valdump(&["tests/fixtures/order.json", "--name", "order"]);
    let expected = "Object order [5]
  [0] [\"id\", 7]
  [1] [\"status\", \"shipped\"]
  [2] [\"lines\", Array [2]
      [0] \"A-1\"
      [1] \"B-2\"]
  [3] [\"customer\", Object [2]
      [0] [\"name\", \"Ann\"]
      [1] [\"vip\", true]]
  [4] [\"note\", (null)]
";

    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn test_max_depth_flag_collapses() {
    let output = run_valdump(&["tests/fixtures/order.json", "--max-depth", "1"]);
    assert_eq!(stdout_of(&output), "Object value [5]\n  ...\n");
}

#[test]
fn test_config_file_is_applied() {
    let output = run_valdump(&[
        "tests/fixtures/order.json",
        "--config",
        "tests/fixtures/options.json",
    ]);
    let text = stdout_of(&output);

    assert!(text.starts_with("Object value [5]\n"));
    assert!(text.contains("[2] [\"lines\", Array [2]\n      ...]"));
}

#[test]
fn test_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_valdump"))
        .arg("--config")
        .arg(&config)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn valdump");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"[1.5, 2]")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(
        stdout_of(&output),
        "Array value [2]\n  [0] 1.5\n  [1] 2\n"
    );
}

#[test]
fn test_boxed_output() {
    let output = run_valdump(&[
        "tests/fixtures/order.json",
        "--boxed",
        "--width",
        "50",
        "--max-depth",
        "1",
    ]);
    let text = stdout_of(&output);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("┌─ Object value ─"));
    assert!(lines.iter().all(|line| line.chars().count() == 50));
}

#[test]
fn test_invalid_json_fails() {
    let output = run_valdump(&["tests/fixtures/broken.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input is not valid JSON"));
}

#[test]
fn test_unknown_culture_fails() {
    let output = run_valdump(&["tests/fixtures/order.json", "--culture", "xx-XX"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown culture 'xx-XX'"));
}

#[test]
fn test_all_fixtures_exist() {
    for fixture in ["order", "options", "broken"] {
        let path = format!("tests/fixtures/{}.json", fixture);
        assert!(
            std::path::Path::new(&path).exists(),
            "Fixture file not found: {}",
            path
        );
    }
}
