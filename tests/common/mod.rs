use std::sync::Mutex;

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Script-mode CLI command backed by an isolated home directory holding `config_json`.
pub fn script_command(config_json: &str) -> Command {
    let temp = TempDir::new().expect("create temp dir");
    std::fs::write(temp.path().join("config.json"), config_json).expect("write config");

    let mut cmd = Command::cargo_bin("budget_tracker_cli").expect("binary exists");
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", temp.path())
        .env("NO_COLOR", "1");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    cmd
}

/// Plain output with default money formatting.
pub fn plain_script_command() -> Command {
    script_command(r#"{ "plain_mode": true, "chart_width": 20 }"#)
}
