//! End-to-end tests for config discovery, init and fatal errors.

mod common;

use std::fs;

use common::{Workspace, stdout_json};
use predicates::prelude::*;

#[test]
fn missing_word_lists_are_fatal_with_hints() {
    let ws = Workspace::new();
    ws.bare_cmd()
        .arg("score")
        .write_stdin("hello there")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no positive word list configured"))
        .stderr(predicate::str::contains("Hints:"))
        .stderr(predicate::str::contains("prosemd init"));
}

#[test]
fn unreadable_word_list_is_fatal() {
    let ws = Workspace::new();
    ws.bare_cmd()
        .arg("--positive")
        .arg(ws.path().join("nope.txt"))
        .arg("--negative")
        .arg(ws.negative())
        .arg("score")
        .write_stdin("hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read positive file"));
}

#[test]
fn zero_threshold_is_fatal() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["score", "--threshold", "0"])
        .write_stdin("hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("complexity threshold"));
}

#[test]
fn oversized_precision_in_config_is_fatal() {
    let ws = Workspace::new();
    ws.write(
        "prosemd.toml",
        "[lexicon]\npositive = \"lists/pos.txt\"\nnegative = \"lists/neg.txt\"\n\n[output]\nprecision = 400\n",
    );

    ws.bare_cmd()
        .arg("score")
        .write_stdin("I love it.")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("precision must be at most 15"));
}

#[test]
fn config_in_working_directory_is_discovered() {
    let ws = Workspace::new();
    ws.write(
        "prosemd.toml",
        "[lexicon]\npositive = \"lists/pos.txt\"\nnegative = \"lists/neg.txt\"\n\n[output]\nformat = \"jsonl\"\n",
    );

    let output = ws
        .bare_cmd()
        .arg("score")
        .write_stdin("I love it.")
        .output()
        .unwrap();
    assert!(output.status.success());
    let line: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(line["metrics"]["positive_score"], 1);
}

#[test]
fn explicit_config_resolves_paths_against_its_directory() {
    let ws = Workspace::new();
    let conf_dir = ws.path().join("conf");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("custom.toml"),
        "[lexicon]\npositive = \"../lists/pos.txt\"\nnegative = \"../lists/neg.txt\"\n\n[score]\ncomplexity_threshold = 4\n",
    )
    .unwrap();

    let output = ws
        .bare_cmd()
        .arg("--config")
        .arg(conf_dir.join("custom.toml"))
        .arg("score")
        .write_stdin("The news is bad.")
        .output()
        .unwrap();
    assert!(output.status.success());
    let receipt = stdout_json(&output);
    assert_eq!(receipt["config"]["complexity_threshold"], 4);
    assert_eq!(receipt["documents"][0]["metrics"]["negative_score"], 1);
}

#[test]
fn cli_flags_override_config_file() {
    let ws = Workspace::new();
    ws.write(
        "prosemd.toml",
        "[lexicon]\npositive = \"lists/pos.txt\"\nnegative = \"lists/neg.txt\"\n\n[output]\nformat = \"md\"\n",
    );

    let output = ws
        .bare_cmd()
        .args(["score", "--format", "json"])
        .write_stdin("Good.")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["summary"]["scored"], 1);
}

#[test]
fn malformed_config_is_fatal() {
    let ws = Workspace::new();
    ws.write("prosemd.toml", "[score]\nthreshold = 3\n");
    ws.bare_cmd()
        .arg("score")
        .write_stdin("hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config file"))
        .stderr(predicate::str::contains("init --force"));
}

#[test]
fn explicit_missing_config_is_fatal() {
    let ws = Workspace::new();
    ws.bare_cmd()
        .args(["--config", "absent.toml", "score"])
        .write_stdin("hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn init_writes_template_once() {
    let ws = Workspace::new();
    ws.bare_cmd()
        .arg("init")
        .arg("--dir")
        .arg(ws.path())
        .assert()
        .success();
    let written = fs::read_to_string(ws.path().join("prosemd.toml")).unwrap();
    assert!(written.contains("[lexicon]"));
    assert!(written.contains("complexity_threshold = 2"));

    ws.bare_cmd()
        .arg("init")
        .arg("--dir")
        .arg(ws.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    ws.bare_cmd()
        .args(["init", "--force", "--dir"])
        .arg(ws.path())
        .assert()
        .success();
}

#[test]
fn init_print_writes_nothing() {
    let ws = Workspace::new();
    ws.bare_cmd()
        .args(["init", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[sentiment]"));
    assert!(!ws.path().join("prosemd.toml").exists());
}

#[test]
fn completions_mention_the_binary() {
    let ws = Workspace::new();
    ws.bare_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prosemd"));
}

#[test]
fn verbose_flag_logs_to_stderr_only() {
    let ws = Workspace::new();
    let output = ws
        .cmd()
        .args(["score", "-v"])
        .write_stdin("Good.")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("lexicon ready"));
    assert_eq!(stdout_json(&output)["summary"]["scored"], 1);
}
