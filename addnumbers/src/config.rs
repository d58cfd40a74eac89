//! Configuration management for AddNumbers
//!
//! Values are resolved in three layers, later layers winning:
//! 1. Defaults
//! 2. `ADDNUMBERS_*` environment variables
//! 3. An `addnumbers.yaml` file

use crate::arithmetic::OverflowPolicy;
use crate::common::env_loader::EnvLoader;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "addnumbers.yaml";
const DEFAULT_SERVER_NAME: &str = "AddNumbers";
const MAX_SERVER_NAME_LENGTH: usize = 64;

/// Configuration settings for the AddNumbers application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How overflowing sums are handled (default: `error`)
    pub overflow_policy: OverflowPolicy,
    /// Name reported to MCP clients (default: "AddNumbers")
    pub server_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overflow_policy: OverflowPolicy::default(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration from defaults, environment variables and the
    /// first `addnumbers.yaml` found.
    ///
    /// A broken YAML file is logged and skipped rather than failing startup.
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env_vars();

        match Self::find_yaml_config_file() {
            Some(path) => match YamlConfig::load_from_file(&path) {
                Ok(yaml_config) => {
                    yaml_config.apply_to_config(&mut config);
                    tracing::info!("Configuration loaded from {:?}", path);
                }
                Err(e) => {
                    tracing::warn!(
                        "Ignoring configuration file, falling back to env vars and defaults: {}",
                        e
                    );
                }
            },
            None => tracing::debug!("No {} found, using env vars and defaults", CONFIG_FILENAME),
        }

        config
    }

    /// Create a configuration from defaults, environment variables and an
    /// explicit YAML file. Unlike [`Config::new`], file errors are returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_vars();
        YamlConfig::load_from_file(path)?.apply_to_config(&mut config);
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        let loader = EnvLoader::new("ADDNUMBERS");

        self.overflow_policy = loader.load_parsed("OVERFLOW_POLICY", self.overflow_policy);

        let server_name = loader.load_string("SERVER_NAME", &self.server_name);
        match validate_server_name(&server_name) {
            Ok(()) => self.server_name = server_name.trim().to_string(),
            Err(e) => tracing::warn!("Ignoring ADDNUMBERS_SERVER_NAME: {}", e),
        }
    }

    /// Search order: current directory, `~/.config/addnumbers/`, then `~`.
    pub fn find_yaml_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILENAME)];

        if let Some(home_dir) = dirs::home_dir() {
            search_paths.push(home_dir.join(".config").join("addnumbers").join(CONFIG_FILENAME));
            search_paths.push(home_dir.join(CONFIG_FILENAME));
        }

        search_paths.into_iter().find(|path| path.is_file())
    }
}

fn validate_server_name(name: &str) -> Result<(), ConfigError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_SERVER_NAME_LENGTH {
        return Err(ConfigError::InvalidValue {
            field: "server_name".to_string(),
            value: name.to_string(),
            hint: format!(
                "server_name must be non-blank and at most {MAX_SERVER_NAME_LENGTH} characters"
            ),
        });
    }
    Ok(())
}

/// Configuration as written in `addnumbers.yaml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    /// Overflow policy name
    pub overflow_policy: Option<String>,
    /// Server name reported to MCP clients
    pub server_name: Option<String>,
}

impl YamlConfig {
    /// Load and validate YAML configuration from a file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("Loading YAML configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: YamlConfig =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check every provided value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref policy) = self.overflow_policy {
            policy
                .parse::<OverflowPolicy>()
                .map_err(|_| ConfigError::InvalidValue {
                    field: "overflow_policy".to_string(),
                    value: policy.clone(),
                    hint: format!("Use one of: {}", OverflowPolicy::VARIANTS.join(", ")),
                })?;
        }

        if let Some(ref name) = self.server_name {
            validate_server_name(name)?;
        }

        Ok(())
    }

    /// Apply YAML values over an existing Config; call [`YamlConfig::validate`] first
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(policy) = self
            .overflow_policy
            .as_deref()
            .and_then(|p| p.parse().ok())
        {
            config.overflow_policy = policy;
        }
        if let Some(ref name) = self.server_name {
            config.server_name = name.trim().to_string();
        }
    }
}
