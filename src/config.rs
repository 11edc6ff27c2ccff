//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/exkit/exkit.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `EXKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{DEFAULT_COMMENT_PREFIX, US_DENOMINATIONS};

/// Unified configuration for exkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Lines starting with this prefix (after trimming) are comments
    pub comment_prefix: String,
    /// Coin denominations used by `change`, in any order
    pub denominations: Vec<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            denominations: US_DENOMINATIONS.to_vec(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub comment_prefix: Option<String>,
    pub denominations: Option<Vec<u64>>,
}

/// Get the XDG config directory for exkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "exkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("exkit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            comment_prefix: overlay
                .comment_prefix
                .clone()
                .unwrap_or_else(|| self.comment_prefix.clone()),
            denominations: overlay
                .denominations
                .clone()
                .unwrap_or_else(|| self.denominations.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; unlike
    ///   the global file it must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(
            global_config_path().as_deref(),
            explicit,
            Self::env_source(),
        )
    }

    /// Layered load with every source supplied by the caller.
    ///
    /// A missing `global` file is skipped; a missing `explicit` file fails.
    pub fn load_from(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = explicit {
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current, env)
    }

    /// `EXKIT_*` variables from the process environment. Values stay strings;
    /// `EXKIT_DENOMINATIONS` is split on commas in `apply_env_overrides`.
    pub fn env_source() -> Environment {
        Environment::with_prefix("EXKIT")
    }

    /// Apply EXKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("comment_prefix") {
            settings.comment_prefix = val;
        }
        match config.get_string("denominations") {
            Ok(val) => settings.denominations = parse_denominations(&val)?,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r##"# exkit configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/exkit/exkit.toml
#   Explicit: exkit --config <file>
#   Env:      EXKIT_* environment variables (EXKIT_DENOMINATIONS=50,20,5,1)

# Prefix marking comment lines for `exkit lines`
# comment_prefix = "#"

# Coin denominations for `exkit change`
# denominations = [25, 10, 5, 1]
"##
        .to_string()
    }
}

/// Parse a comma-separated list such as `50,20,5,1`; a single value is a one-coin list.
fn parse_denominations(raw: &str) -> Result<Vec<u64>, ApplicationError> {
    raw.split(',')
        .map(str::trim)
        .map(|part| {
            part.parse::<u64>().map_err(|e| ApplicationError::Config {
                message: format!("EXKIT_DENOMINATIONS: '{}': {}", part, e),
            })
        })
        .collect()
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
