//! Configuration management

use crate::domain::YearFormat;
use crate::error::{CalverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Settings that can live in a TOML file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub year_format: YearFormat,
    /// Base URL of the GitHub REST API
    pub api_url: String,
    /// Endpoint paths tried in order; `{owner}` and `{repo}` are substituted.
    /// Each endpoint is read page by page through its `Link` headers.
    pub endpoints: Vec<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            year_format: YearFormat::default(),
            api_url: DEFAULT_API_URL.to_string(),
            endpoints: vec![
                "/repos/{owner}/{repo}/tags?per_page=100".to_string(),
                "/repos/{owner}/{repo}/git/refs/tags?per_page=100".to_string(),
            ],
            timeout_secs: 15,
            user_agent: concat!("calverlex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CalverError::Config(format!("Config file not found: {}", path.display()))
            } else {
                CalverError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            return Err(CalverError::Config(
                "At least one tag endpoint must be configured".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(CalverError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
