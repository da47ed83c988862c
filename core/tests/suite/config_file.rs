//! Config file layer read from disk.

use contract_core::config::ConfigError;
use contract_core::config::ConfigLoader;
use contract_core::config::EditorConfig;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_yields_defaults() {
    let home = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_home(home.path().to_path_buf())
        .load_with_env(no_env)
        .unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn file_values_override_defaults() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        "log_filter = \"contract_editor=trace\"\ntoast_duration_ms = 750\nlog_dir = \"/var/tmp/ce\"\n",
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_home(home.path().to_path_buf())
        .load_with_env(no_env)
        .unwrap();

    assert_eq!(config.log_filter, "contract_editor=trace");
    assert_eq!(config.toast_duration_ms, 750);
    assert_eq!(config.log_dir, Some(PathBuf::from("/var/tmp/ce")));
    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
fn env_beats_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "toast_duration_ms = 750\n").unwrap();

    let config = ConfigLoader::new()
        .with_home(home.path().to_path_buf())
        .load_with_env(|var| (var == "CONTRACT_EDITOR_TOAST_MS").then(|| "90".to_string()))
        .unwrap();

    assert_eq!(config.toast_duration_ms, 90);
}

#[test]
fn home_env_var_locates_the_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "tick_rate_ms = 16\n").unwrap();
    let home_str = home.path().to_string_lossy().to_string();

    let config = ConfigLoader::new()
        .load_with_env(|var| (var == "CONTRACT_EDITOR_HOME").then(|| home_str.clone()))
        .unwrap();

    assert_eq!(config.tick_rate_ms, 16);
}

#[test]
fn explicit_file_wins_over_home() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "tick_rate_ms = 16\n").unwrap();
    let other = home.path().join("other.toml");
    std::fs::write(&other, "tick_rate_ms = 33\n").unwrap();

    let config = ConfigLoader::new()
        .with_home(home.path().to_path_buf())
        .with_file(other)
        .load_with_env(no_env)
        .unwrap();

    assert_eq!(config.tick_rate_ms, 33);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "toast_duration_ms = \"soon\"\n").unwrap();

    let err = ConfigLoader::new()
        .with_home(home.path().to_path_buf())
        .load_with_env(no_env)
        .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
}

#[test]
fn unknown_keys_are_rejected() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "theme = \"dark\"\n").unwrap();

    let err = ConfigLoader::new()
        .with_home(home.path().to_path_buf())
        .load_with_env(no_env)
        .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
}
