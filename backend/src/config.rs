//! Application configuration.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! log_level = "info"
//!
//! [repository]
//! type = "local"
//! seed_file = "data/seed.toml"
//! ```
//!
//! | Variable          | Setting                 |
//! |-------------------|-------------------------|
//! | `HOST`            | `server.host`           |
//! | `PORT`            | `server.port`           |
//! | `RUST_LOG`        | `server.log_level`      |
//! | `REPOSITORY_TYPE` | `repository.type`       |
//! | `SEED_FILE`       | `repository.seed_file`  |

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::db::RepositoryType;

/// File name searched by [`AppConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "colegio.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
    /// Optional TOML file with schools, courses and rooms loaded at start-up.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `colegio.toml` from the first standard location that has one.
    ///
    /// Searches the current directory, `backend/` and the parent directory.
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT",
                    value: port.clone(),
                })?;
        }
        if let Some(level) = lookup("RUST_LOG") {
            self.server.log_level = level;
        }
        if let Some(repo_type) = lookup("REPOSITORY_TYPE") {
            self.repository.repo_type = repo_type;
        }
        if let Some(seed) = lookup("SEED_FILE") {
            self.repository.seed_file = if seed.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(seed))
            };
        }
        Ok(())
    }

    pub fn repository_type(&self) -> Result<RepositoryType, ConfigError> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(|_| {
            ConfigError::InvalidValue {
                key: "repository.type",
                value: self.repository.repo_type.clone(),
            }
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "server.host",
            value: self.server.host.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert!(config.repository.seed_file.is_none());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = AppConfig::from_toml_str(
            r#"
[server]
port = 9000

[repository]
seed_file = "data/seed.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(
            config.repository.seed_file.as_deref(),
            Some(Path::new("data/seed.toml"))
        );
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
            ("SEED_FILE", "seed.toml"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.server.log_level, "debug");
        assert_eq!(
            config.repository.seed_file.as_deref(),
            Some(Path::new("seed.toml"))
        );
    }

    #[test]
    fn test_empty_seed_override_clears_seed() {
        let mut config = AppConfig::default();
        config.repository.seed_file = Some(PathBuf::from("x.toml"));
        config
            .apply_overrides(|k| (k == "SEED_FILE").then(String::new))
            .unwrap();
        assert!(config.repository.seed_file.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(|k| (k == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_unknown_repository_type() {
        let mut config = AppConfig::default();
        config.repository.repo_type = "postgres".to_string();
        assert!(config.repository_type().is_err());
    }

    #[test]
    fn test_invalid_host() {
        let mut config = AppConfig::default();
        config.server.host = "not a host".to_string();
        assert!(config.bind_addr().is_err());
    }
}
