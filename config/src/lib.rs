//! Configuration for strand.
//!
//! Read from `~/.strand/config.toml`. Every section is optional; a missing
//! file means defaults.
//!
//! ```toml
//! [logging]
//! filter = "strand=debug,strand_core=trace"
//!
//! [native]
//! verbosity = "info"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strand_core::HtsLogLevel;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "STRAND_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct StrandConfig {
    pub logging: Option<LoggingConfig>,
    pub native: Option<NativeConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. `RUST_LOG` takes precedence when set.
    /// Supports `${VAR}` expansion.
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NativeConfig {
    /// Initial native verbosity. Default: warning.
    pub verbosity: Option<HtsLogLevel>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl StrandConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Log filter directives from config, with `${VAR}` references expanded.
    #[must_use]
    pub fn log_filter(&self) -> Option<String> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.filter.as_deref())
            .map(expand_env_vars)
            .filter(|filter| !filter.trim().is_empty())
    }

    #[must_use]
    pub fn native_verbosity(&self) -> HtsLogLevel {
        self.native
            .as_ref()
            .and_then(|native| native.verbosity)
            .unwrap_or_default()
    }
}

/// `$STRAND_CONFIG` if set, else `~/.strand/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".strand").join("config.toml"))
}

/// Replace `${VAR}` with the variable's value; unset variables become empty.
/// An unterminated `${` is kept verbatim.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                out.push_str(&env::var(name).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}
