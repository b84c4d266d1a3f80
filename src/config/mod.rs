//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `NESTRANK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_CANDIDATES, DEFAULT_PORT};
use crate::scoring::ScorerConfig;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `NESTRANK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the ONNX relevance model artifact. Required unless
    /// [`model_stub`](Self::model_stub) is set; the `encoder.json` vocabulary
    /// sidecar is expected next to it.
    pub model_path: Option<PathBuf>,

    /// Run the deterministic stub scorer instead of loading an artifact.
    /// Default: `false`.
    pub model_stub: bool,

    /// Path to a JSON article catalog. Default: the built-in seed catalog.
    pub articles_path: Option<PathBuf>,

    /// Path to a JSON story catalog. Default: the built-in seed catalog.
    pub stories_path: Option<PathBuf>,

    /// Max filtered candidates scored per request. Default: `512`.
    pub max_candidates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            model_stub: false,
            articles_path: None,
            stories_path: None,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "NESTRANK_PORT";
    const ENV_BIND_ADDR: &'static str = "NESTRANK_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "NESTRANK_MODEL_PATH";
    const ENV_MODEL_STUB: &'static str = "NESTRANK_MODEL_STUB";
    const ENV_ARTICLES_PATH: &'static str = "NESTRANK_ARTICLES_PATH";
    const ENV_STORIES_PATH: &'static str = "NESTRANK_STORIES_PATH";
    const ENV_MAX_CANDIDATES: &'static str = "NESTRANK_MAX_CANDIDATES";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let model_stub = Self::parse_bool_from_env(Self::ENV_MODEL_STUB, defaults.model_stub)?;
        let articles_path = Self::parse_optional_path_from_env(Self::ENV_ARTICLES_PATH);
        let stories_path = Self::parse_optional_path_from_env(Self::ENV_STORIES_PATH);
        let max_candidates = Self::parse_max_candidates_from_env(defaults.max_candidates)?;

        Ok(Self {
            port,
            bind_addr,
            model_path,
            model_stub,
            articles_path,
            stories_path,
            max_candidates,
        })
    }

    /// Validates paths and basic invariants (does not touch file contents).
    ///
    /// Without stub scoring a model path is mandatory; a missing artifact is
    /// rejected here so startup fails before serving anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.model_stub && self.model_path.is_none() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_MODEL_PATH,
            });
        }

        for path in [
            self.model_path.as_ref(),
            self.articles_path.as_ref(),
            self.stories_path.as_ref(),
        ]
        .into_iter()
        .flatten()
        {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.max_candidates == 0 {
            return Err(ConfigError::InvalidCandidateBound {
                value: self.max_candidates,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// The scorer configuration this server configuration implies.
    pub fn scorer_config(&self) -> ScorerConfig {
        if self.model_stub {
            return ScorerConfig::stub();
        }
        match &self.model_path {
            Some(path) => ScorerConfig::new(path.clone()),
            None => ScorerConfig::default(),
        }
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

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" => Ok(default),
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_max_candidates_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_CANDIDATES) {
            Ok(value) => {
                value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::CandidateBoundParseError {
                        name: Self::ENV_MAX_CANDIDATES,
                        value,
                        source: e,
                    })
            }
            Err(_) => Ok(default),
        }
    }
}
