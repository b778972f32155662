//! Service configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults ([`ServiceConfig::default`])
//! 2. a TOML file (`csvstat.toml` in the working directory, or an explicit path)
//! 3. environment variables prefixed with `CSVSTAT_` (e.g. `CSVSTAT_PORT=8080`)

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::processing::DEFAULT_TOP_LIMIT;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "csvstat.toml";

/// Prefix of the environment variables that override file values.
pub const ENV_PREFIX: &str = "CSVSTAT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Interface the HTTP listener binds to.
    pub host: String,
    pub port: u16,
    /// Directory that holds uploads while a request is processed.
    pub upload_dir: PathBuf,
    /// Uploads larger than this are rejected.
    pub max_upload_bytes: usize,
    /// Limit used for `top_values` when a request names a column but no limit.
    pub default_top_limit: usize,
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            upload_dir: std::env::temp_dir().join("csvstat"),
            max_upload_bytes: 16 * 1024 * 1024,
            default_top_limit: DEFAULT_TOP_LIMIT,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// The layered figment: defaults, then `file` (or [`DEFAULT_CONFIG_FILE`]), then env.
    ///
    /// An explicit `file` must exist; extraction fails otherwise. A missing
    /// [`DEFAULT_CONFIG_FILE`] is skipped.
    pub fn figment(file: Option<&Path>) -> Figment {
        let toml = match file {
            Some(path) => Toml::file_exact(path),
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };
        Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the configuration from every layer.
    pub fn load(file: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(file).extract()
    }
}
