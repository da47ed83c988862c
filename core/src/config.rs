//! Layered configuration for the contract editor.
//!
//! Precedence, later layers override earlier ones:
//! 1. Defaults ([`EditorConfig::default`])
//! 2. File (`$CONTRACT_EDITOR_HOME/config.toml`, else
//!    `~/.contract-editor/config.toml`, or an explicit path)
//! 3. Environment overrides (`CONTRACT_EDITOR_*`)
//!
//! A missing config file is not an error.
//!
//! ```no_run
//! use contract_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load()?;
//! # Ok::<(), contract_core::config::ConfigError>(())
//! ```

use std::env;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

/// Environment variable that relocates the config directory.
pub const HOME_ENV_VAR: &str = "CONTRACT_EDITOR_HOME";
const DEFAULT_ENV_PREFIX: &str = "CONTRACT_EDITOR";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_HOME_DIR: &str = ".contract-editor";

/// Default size of the in-memory diagnostic log: 1 MiB.
pub const DEFAULT_LOG_CAPACITY_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for ${var}: '{value}' (expected: {expected})")]
    InvalidEnvValue {
        var: String,
        value: String,
        expected: &'static str,
    },
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Directory for a persistent log file; `None` keeps logs in memory only.
    pub log_dir: Option<PathBuf>,
    pub log_capacity_bytes: usize,
    pub toast_duration_ms: u64,
    /// Event poll timeout of the UI loop.
    pub tick_rate_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_dir: None,
            log_capacity_bytes: DEFAULT_LOG_CAPACITY_BYTES,
            toast_duration_ms: 3_000,
            tick_rate_ms: 250,
        }
    }
}

/// What a config file may set. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLayer {
    pub log_filter: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub log_capacity_bytes: Option<usize>,
    pub toast_duration_ms: Option<u64>,
    pub tick_rate_ms: Option<u64>,
}

impl EditorConfig {
    /// Overlay the keys a file layer sets.
    pub fn merge(&mut self, layer: FileLayer) {
        if let Some(filter) = layer.log_filter {
            self.log_filter = filter;
        }
        if layer.log_dir.is_some() {
            self.log_dir = layer.log_dir;
        }
        if let Some(bytes) = layer.log_capacity_bytes {
            self.log_capacity_bytes = bytes;
        }
        if let Some(ms) = layer.toast_duration_ms {
            self.toast_duration_ms = ms;
        }
        if let Some(ms) = layer.tick_rate_ms {
            self.tick_rate_ms = ms;
        }
    }
}

/// Builder for layered configuration loading.
pub struct ConfigLoader {
    home: Option<PathBuf>,
    file: Option<PathBuf>,
    skip_file: bool,
    skip_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            home: None,
            file: None,
            skip_file: false,
            skip_env: false,
        }
    }

    /// Use `path` as the config directory instead of resolving it.
    pub fn with_home(mut self, path: PathBuf) -> Self {
        self.home = Some(path);
        self
    }

    /// Read this exact file instead of `<home>/config.toml`.
    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file = Some(path);
        self
    }

    pub fn skip_file_layer(mut self) -> Self {
        self.skip_file = true;
        self
    }

    pub fn skip_env_layer(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load all enabled layers, reading overrides from the process environment.
    pub fn load(self) -> Result<EditorConfig, ConfigError> {
        self.load_with_env(|var| env::var(var).ok())
    }

    /// Same as [`ConfigLoader::load`] with an explicit environment lookup.
    pub fn load_with_env(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<EditorConfig, ConfigError> {
        let mut config = EditorConfig::default();

        if !self.skip_file {
            match self.config_path(&lookup) {
                Some(path) => config.merge(load_file_layer(&path)?),
                None => tracing::warn!("cannot determine home directory; skipping config file"),
            }
        }

        if !self.skip_env {
            apply_env_overrides(&mut config, DEFAULT_ENV_PREFIX, &lookup)?;
        }

        Ok(config)
    }

    /// Priority: explicit file, explicit home, `$CONTRACT_EDITOR_HOME`,
    /// `~/.contract-editor`.
    fn config_path(&self, lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        if let Some(file) = &self.file {
            return Some(file.clone());
        }
        let home = match &self.home {
            Some(home) => home.clone(),
            None => match lookup(HOME_ENV_VAR) {
                Some(home) if !home.trim().is_empty() => PathBuf::from(home),
                _ => dirs::home_dir()?.join(DEFAULT_HOME_DIR),
            },
        };
        Some(home.join(CONFIG_FILE_NAME))
    }
}

/// Parse one config file. A file that does not exist yields an empty layer.
pub fn load_file_layer(path: &Path) -> Result<FileLayer, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, using defaults", path.display());
            return Ok(FileLayer::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `<PREFIX>_*` overrides found through `lookup`. Blank values are
/// ignored.
pub fn apply_env_overrides(
    config: &mut EditorConfig,
    prefix: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let read = |suffix: &str| {
        let var = format!("{prefix}_{suffix}");
        lookup(&var)
            .filter(|value| !value.trim().is_empty())
            .map(|value| (var, value))
    };

    if let Some((var, value)) = read("LOG_FILTER") {
        tracing::debug!("Applying env override: {var}={value}");
        config.log_filter = value;
    }
    if let Some((var, value)) = read("LOG_DIR") {
        tracing::debug!("Applying env override: {var}={value}");
        config.log_dir = Some(PathBuf::from(value));
    }
    if let Some((var, value)) = read("LOG_CAPACITY") {
        config.log_capacity_bytes = parse_env_number(var, value)?;
    }
    if let Some((var, value)) = read("TOAST_MS") {
        config.toast_duration_ms = parse_env_number(var, value)?;
    }
    if let Some((var, value)) = read("TICK_MS") {
        config.tick_rate_ms = parse_env_number(var, value)?;
    }

    Ok(())
}

fn parse_env_number<T: std::str::FromStr>(var: String, value: String) -> Result<T, ConfigError> {
    match value.trim().parse() {
        Ok(n) => {
            tracing::debug!("Applying env override: {var}={value}");
            Ok(n)
        }
        Err(_) => Err(ConfigError::InvalidEnvValue {
            var,
            value,
            expected: "a non-negative integer",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_only() {
        let config = ConfigLoader::new()
            .skip_file_layer()
            .load_with_env(env_of(&[]))
            .unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.toast_duration_ms, 3_000);
    }

    #[test]
    fn merge_overlays_only_set_keys() {
        let mut config = EditorConfig::default();
        config.merge(FileLayer {
            toast_duration_ms: Some(500),
            ..FileLayer::default()
        });
        assert_eq!(config.toast_duration_ms, 500);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn env_overrides_apply_after_defaults() {
        let config = ConfigLoader::new()
            .skip_file_layer()
            .load_with_env(env_of(&[
                ("CONTRACT_EDITOR_LOG_FILTER", "debug"),
                ("CONTRACT_EDITOR_TOAST_MS", "1200"),
                ("CONTRACT_EDITOR_LOG_DIR", "/tmp/contract-logs"),
            ]))
            .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.toast_duration_ms, 1200);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/contract-logs")));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = ConfigLoader::new()
            .skip_file_layer()
            .load_with_env(env_of(&[("CONTRACT_EDITOR_LOG_FILTER", "  ")]))
            .unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn invalid_number_is_reported() {
        let err = ConfigLoader::new()
            .skip_file_layer()
            .load_with_env(env_of(&[("CONTRACT_EDITOR_TICK_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvValue { ref var, .. } if var == "CONTRACT_EDITOR_TICK_MS"
        ));
        assert_eq!(
            err.to_string(),
            "Invalid value for $CONTRACT_EDITOR_TICK_MS: 'soon' (expected: a non-negative integer)"
        );
    }

    #[test]
    fn skip_env_layer_ignores_overrides() {
        let config = ConfigLoader::new()
            .skip_file_layer()
            .skip_env_layer()
            .load_with_env(env_of(&[("CONTRACT_EDITOR_TOAST_MS", "1")]))
            .unwrap();
        assert_eq!(config.toast_duration_ms, 3_000);
    }

    #[test]
    fn overrides_read_only_the_given_prefix() {
        let mut config = EditorConfig::default();
        let lookup = env_of(&[("TEST_TICK_MS", "40"), ("CONTRACT_EDITOR_TOAST_MS", "1")]);
        apply_env_overrides(&mut config, "TEST", &lookup).unwrap();
        assert_eq!(config.tick_rate_ms, 40);
        assert_eq!(config.toast_duration_ms, 3_000);
    }
}
