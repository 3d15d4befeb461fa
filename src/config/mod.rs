//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `HELPBUBBLE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Wildcard origin accepted by the CORS layer.
pub const ANY_ORIGIN: &str = "*";

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `HELPBUBBLE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the QA checkpoint (`config.json`, `model.safetensors`, `tokenizer.json`).
    pub model_path: Option<PathBuf>,

    /// JSON knowledge-base file. The built-in catalog is used when unset.
    pub knowledge_path: Option<PathBuf>,

    /// Origins allowed by CORS. Default: `["*"]`.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            knowledge_path: None,
            allowed_origins: vec![ANY_ORIGIN.to_string()],
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "HELPBUBBLE_PORT";
    const ENV_BIND_ADDR: &'static str = "HELPBUBBLE_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "HELPBUBBLE_MODEL_PATH";
    const ENV_KNOWLEDGE_PATH: &'static str = "HELPBUBBLE_KNOWLEDGE_PATH";
    const ENV_ALLOWED_ORIGINS: &'static str = "HELPBUBBLE_ALLOWED_ORIGINS";
    const ENV_ALLOWED_ORIGINS_LEGACY: &'static str = "ALLOWED_ORIGINS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let knowledge_path = Self::parse_optional_path_from_env(Self::ENV_KNOWLEDGE_PATH);
        let allowed_origins = Self::parse_origins_from_env(defaults.allowed_origins);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            knowledge_path,
            allowed_origins,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.knowledge_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.allowed_origins.is_empty() {
            return Err(ConfigError::NoAllowedOrigins);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Returns `true` when any origin is accepted.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_origins_from_env(default: Vec<String>) -> Vec<String> {
        let raw = env::var(Self::ENV_ALLOWED_ORIGINS)
            .or_else(|_| env::var(Self::ENV_ALLOWED_ORIGINS_LEGACY));

        match raw {
            Ok(value) => {
                let origins: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect();
                if origins.is_empty() { default } else { origins }
            }
            Err(_) => default,
        }
    }
}
