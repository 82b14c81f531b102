use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const PLUGIN: &str = "opencode-disable-zen";

struct TestEnv {
    project: TempDir,
    home: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            project: TempDir::new().expect("Failed to create project dir"),
            home: TempDir::new().expect("Failed to create home dir"),
        }
    }

    fn project_file(&self, name: &str) -> std::path::PathBuf {
        self.project.path().join(name)
    }

    fn global_config(&self) -> std::path::PathBuf {
        self.home.path().join(".config/opencode/opencode.json")
    }

    /// Run the binary in the project dir; returns (success, exit code, stdout + stderr).
    fn run(&self, args: &[&str]) -> (bool, Option<i32>, String) {
        let output = Command::new(env!("CARGO_BIN_EXE_opencode-disable-zen"))
            .args(args)
            .current_dir(self.project.path())
            .env("ODZ_HOME", self.home.path())
            .env_remove("ODZ_PROJECT_DIR")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command");

        let stdout = String::from_utf8(output.stdout).unwrap_or_default();
        let stderr = String::from_utf8(output.stderr).unwrap_or_default();
        let combined = format!("{}\n{}", stdout, stderr);

        (output.status.success(), output.status.code(), combined)
    }
}

fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_install_creates_project_config() {
    let env = TestEnv::new();

    let (success, _, output) = env.run(&["install"]);

    assert!(success, "Install should succeed. output: {}", output);
    assert!(
        output.contains("Created opencode.json with plugin enabled"),
        "Expected creation message in output: {}",
        output
    );
    assert_eq!(
        read_json(&env.project_file("opencode.json")),
        json!({"$schema": "https://opencode.ai/config.json", "pluginList": [PLUGIN]})
    );
}

#[test]
fn test_install_appends_and_prints_next_steps() {
    let env = TestEnv::new();
    fs::write(
        env.project_file("opencode.json"),
        r#"{"model": "anthropic/claude-sonnet-4-5", "pluginList": ["other"]}"#,
    )
    .unwrap();

    let (success, _, output) = env.run(&["install"]);

    assert!(success, "Install should succeed. output: {}", output);
    assert!(output.contains("Installed opencode-disable-zen to"));
    assert!(output.contains("Zen provider will be disabled on next OpenCode startup."));
    assert!(output.contains("\"librarian\""));
    assert!(output.contains("anthropic/claude-haiku-4-5"));

    let content = fs::read_to_string(env.project_file("opencode.json")).unwrap();
    assert!(content.ends_with("}\n"));
    assert!(content.contains("\n  \"pluginList\": [\n    \"other\",\n    \"opencode-disable-zen\"\n  ]"));
    assert!(content.starts_with("{\n  \"model\""));
}

#[test]
fn test_install_twice_reports_already_installed() {
    let env = TestEnv::new();
    fs::write(env.project_file("opencode.json"), "{}").unwrap();

    env.run(&["install"]);
    let first = fs::read_to_string(env.project_file("opencode.json")).unwrap();

    let (success, _, output) = env.run(&["install"]);

    assert!(success);
    assert!(
        output.contains("already installed"),
        "Expected 'already installed' in output: {}",
        output
    );
    assert_eq!(
        fs::read_to_string(env.project_file("opencode.json")).unwrap(),
        first
    );
}

#[test]
fn test_install_jsonc_rewrites_strict_json() {
    let env = TestEnv::new();
    fs::write(
        env.project_file("opencode.jsonc"),
        "{\n // note\n \"pluginList\": []\n}",
    )
    .unwrap();

    let (success, _, output) = env.run(&["install"]);

    assert!(success, "Install should succeed. output: {}", output);
    assert_eq!(
        fs::read_to_string(env.project_file("opencode.jsonc")).unwrap(),
        "{\n  \"pluginList\": [\n    \"opencode-disable-zen\"\n  ]\n}\n"
    );
    assert!(!env.project_file("opencode.json").exists());
}

#[test]
fn test_install_prefers_json_over_jsonc() {
    let env = TestEnv::new();
    fs::write(env.project_file("opencode.json"), "{}").unwrap();
    fs::write(env.project_file("opencode.jsonc"), "{}").unwrap();

    let (success, _, _) = env.run(&["install"]);

    assert!(success);
    assert_eq!(
        read_json(&env.project_file("opencode.json")),
        json!({"pluginList": [PLUGIN]})
    );
    assert_eq!(
        fs::read_to_string(env.project_file("opencode.jsonc")).unwrap(),
        "{}"
    );
}

#[test]
fn test_install_global_creates_config_tree() {
    let env = TestEnv::new();
    fs::write(env.project_file("opencode.json"), "{}").unwrap();

    let (success, _, output) = env.run(&["install", "--global"]);

    assert!(success, "Global install should succeed. output: {}", output);
    assert_eq!(
        read_json(&env.global_config()),
        json!({"pluginList": [PLUGIN]})
    );
    assert_eq!(
        fs::read_to_string(env.project_file("opencode.json")).unwrap(),
        "{}"
    );
}

#[test]
fn test_install_invalid_json_fails() {
    let env = TestEnv::new();
    fs::write(env.project_file("opencode.json"), "{ \"pluginList\": [").unwrap();

    let (success, code, output) = env.run(&["install"]);

    assert!(!success, "Install should fail on invalid JSON");
    assert_eq!(code, Some(1));
    assert!(
        output.contains("Invalid JSON"),
        "Expected parse error in output: {}",
        output
    );
}

#[test]
fn test_uninstall_removes_plugin() {
    let env = TestEnv::new();
    fs::write(
        env.project_file("opencode.json"),
        format!(r#"{{"pluginList": ["{}"]}}"#, PLUGIN),
    )
    .unwrap();

    let (success, _, output) = env.run(&["uninstall"]);

    assert!(success, "Uninstall should succeed. output: {}", output);
    assert!(output.contains("Removed opencode-disable-zen from"));
    assert_eq!(
        read_json(&env.project_file("opencode.json")),
        json!({"pluginList": []})
    );
}

#[test]
fn test_uninstall_not_installed() {
    let env = TestEnv::new();
    fs::write(env.project_file("opencode.json"), r#"{"pluginList": ["a"]}"#).unwrap();

    let (success, _, output) = env.run(&["uninstall"]);

    assert!(success);
    assert!(
        output.contains("is not installed in"),
        "Expected 'not installed' in output: {}",
        output
    );
}

#[test]
fn test_uninstall_without_config() {
    let env = TestEnv::new();

    let (success, _, output) = env.run(&["uninstall"]);

    assert!(success);
    assert!(
        output.contains("No opencode.json found."),
        "Expected 'No opencode.json found.' in output: {}",
        output
    );
    assert!(!env.project_file("opencode.json").exists());
}

#[test]
fn test_uninstall_global_missing_config() {
    let env = TestEnv::new();

    let (success, _, output) = env.run(&["uninstall", "-g"]);

    assert!(success);
    assert!(
        output.contains("Config not found:"),
        "Expected 'Config not found' in output: {}",
        output
    );
    assert!(!env.global_config().exists());
}

#[test]
fn test_install_then_uninstall_round_trip() {
    let env = TestEnv::new();
    fs::write(
        env.project_file("opencode.json"),
        r#"{"pluginList": ["b", "a"]}"#,
    )
    .unwrap();

    env.run(&["install"]);
    env.run(&["uninstall"]);

    assert_eq!(
        read_json(&env.project_file("opencode.json")),
        json!({"pluginList": ["b", "a"]})
    );
}

#[test]
fn test_help_without_command() {
    let env = TestEnv::new();

    let (success, _, output) = env.run(&[]);

    assert!(success);
    assert!(output.contains("Disable OpenCode Zen for ZDR compliance"));
    assert!(output.contains("Why disable Zen?"));
    assert!(!env.project_file("opencode.json").exists());
}

#[test]
fn test_help_flag() {
    let env = TestEnv::new();

    let (success, _, output) = env.run(&["--help"]);

    assert!(success);
    assert!(output.contains("install"));
    assert!(output.contains("uninstall"));
    assert!(output.contains("--global"));
}

#[test]
fn test_unknown_command_fails_with_help() {
    let env = TestEnv::new();

    let (success, code, output) = env.run(&["frobnicate"]);

    assert!(!success);
    assert_eq!(code, Some(1));
    assert!(
        output.contains("Unknown command: frobnicate"),
        "Expected unknown command message in output: {}",
        output
    );
    assert!(output.contains("Usage:"));
}
