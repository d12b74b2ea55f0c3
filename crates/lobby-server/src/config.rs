//! Server configuration loading from file and environment variables.

use lobby_voice::ElevenLabsConfig;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Upstream ElevenLabs settings.
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the interface document and other static assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "lobby_server=debug,info").
    /// When unset, the `debug` flag picks "debug" or "info".
    #[serde(default)]
    pub level: Option<String>,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,

    /// Debug mode. Default: enabled.
    #[serde(default = "default_debug")]
    pub debug: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
}

fn default_port() -> u16 {
    9000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_debug() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            json: false,
            debug: default_debug(),
        }
    }
}

impl LoggingConfig {
    /// The filter directive to install: the explicit level if one was
    /// configured, otherwise derived from the debug flag.
    pub fn directive(&self) -> &str {
        match &self.level {
            Some(level) => level,
            None if self.debug => "debug",
            None => "info",
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `ELEVENLABS_API_KEY` overrides `elevenlabs.api_key`
/// - `ELEVENLABS_AGENT_ID` overrides `elevenlabs.agent_id`
/// - `PORT` overrides `server.port`
/// - `DEBUG` overrides `logging.debug` ("true" or "1" to enable)
/// - `LOBBY_HOST` overrides `server.host`
/// - `LOBBY_STATIC_DIR` overrides `server.static_dir`
/// - `LOBBY_LOG_LEVEL` overrides `logging.level`
/// - `LOBBY_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(api_key) = std::env::var("ELEVENLABS_API_KEY") {
        config.elevenlabs.api_key = api_key;
    }
    if let Ok(agent_id) = std::env::var("ELEVENLABS_AGENT_ID") {
        if !agent_id.trim().is_empty() {
            config.elevenlabs.agent_id = agent_id;
        }
    }
    if let Ok(port) = std::env::var("PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(debug) = std::env::var("DEBUG") {
        config.logging.debug = debug.eq_ignore_ascii_case("true") || debug == "1";
    }
    if let Ok(host) = std::env::var("LOBBY_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(static_dir) = std::env::var("LOBBY_STATIC_DIR") {
        config.server.static_dir = static_dir;
    }
    if let Ok(level) = std::env::var("LOBBY_LOG_LEVEL") {
        config.logging.level = Some(level);
    }
    if let Ok(json) = std::env::var("LOBBY_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
