//! # Server Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BIBLIO_BIND_ADDR=127.0.0.1                                         │
//! │     BIBLIO_PORT=50052                                                  │
//! │     BIBLIO_STORE_PATH=/var/lib/biblio/biblioteca.txt                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/biblio/server.toml (Linux)                               │
//! │     ~/Library/Application Support/org.biblio.biblio/server.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:50051, ./biblioteca.txt                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [server]
//! bind_addr = "0.0.0.0"
//! port = 50051
//!
//! [store]
//! path = "biblioteca.txt"
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use biblio_store::DEFAULT_STORE_PATH;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Network settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to listen on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: IpAddr,

    /// gRPC port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    50051
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

/// Book store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Path to the store file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            path: default_store_path(),
        }
    }
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

impl ServerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading server config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue("server.port".to_string()));
        }

        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("store.path".to_string()));
        }

        Ok(())
    }

    /// Socket address the gRPC server binds.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.bind_addr, self.server.port)
    }

    /// Applies `BIBLIO_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        if let Some(addr) = lookup("BIBLIO_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BIBLIO_BIND_ADDR".to_string()))?;
        }

        if let Some(port) = lookup("BIBLIO_PORT") {
            debug!(port = %port, "Overriding port from environment");
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BIBLIO_PORT".to_string()))?;
        }

        if let Some(path) = lookup("BIBLIO_STORE_PATH") {
            debug!(path = %path, "Overriding store path from environment");
            self.store.path = PathBuf::from(path);
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "biblio", "biblio")
            .map(|dirs| dirs.config_dir().join("server.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:50051");
        assert_eq!(config.store.path, PathBuf::from("biblioteca.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml("[server]\nport = 6000\n").unwrap();
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.bind_addr, default_bind_addr());
        assert_eq!(config.store.path, PathBuf::from("biblioteca.txt"));

        let config = ServerConfig::from_toml(
            "[server]\nbind_addr = \"127.0.0.1\"\n\n[store]\npath = \"/srv/libros.txt\"\n",
        )
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:50051");
        assert_eq!(config.store.path, PathBuf::from("/srv/libros.txt"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(matches!(
            ServerConfig::from_toml("[server]\nport = \"many\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ServerConfig::from_toml("[server]\nport = 6000\n").unwrap();
        config
            .apply_overrides(env(&[
                ("BIBLIO_PORT", "7000"),
                ("BIBLIO_BIND_ADDR", "127.0.0.1"),
                ("BIBLIO_STORE_PATH", "/tmp/otro.txt"),
            ]))
            .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:7000");
        assert_eq!(config.store.path, PathBuf::from("/tmp/otro.txt"));
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = ServerConfig::default();
        let err = config
            .apply_overrides(env(&[("BIBLIO_PORT", "not-a-port")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BIBLIO_PORT");
    }

    #[test]
    fn test_validation() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.store.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "[store]\npath = \"catalogo.txt\"\n").unwrap();

        let config = ServerConfig::load(Some(path)).unwrap();
        // BIBLIO_STORE_PATH may be set in the environment running the tests
        if std::env::var("BIBLIO_STORE_PATH").is_err() {
            assert_eq!(config.store.path, PathBuf::from("catalogo.txt"));
        }
    }
}
