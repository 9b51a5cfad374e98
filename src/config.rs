//! Configuration types for book-ladder

use crate::stream::DEFAULT_ADDRESS;
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub reconnect: ReconnectConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Aggregator connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// gRPC address of the aggregation server
    #[serde(default = "default_address")]
    pub address: String,

    /// Connection establishment timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}
fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// What the display loop does after the stream fails
#[derive(Debug, Clone, Deserialize)]
pub struct ReconnectConfig {
    /// Resubscribe after a failure instead of stopping
    #[serde(default)]
    pub enabled: bool,

    /// Consecutive failures before giving up (0 = infinite)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first resubscription (milliseconds)
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Backoff ceiling (milliseconds)
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    5
}
fn default_initial_delay_ms() -> u64 {
    500
}
fn default_max_delay_ms() -> u64 {
    30_000
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl ReconnectConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Write logs here instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [server]
            address = "http://10.1.2.3:50051"
            connect_timeout_secs = 2

            [reconnect]
            enabled = true
            max_attempts = 0
            initial_delay_ms = 250
            max_delay_ms = 4000

            [telemetry]
            log_level = "debug"
            log_format = "json"
            log_file = "/tmp/book-ladder.log"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.address, "http://10.1.2.3:50051");
        assert_eq!(config.server.connect_timeout_secs, 2);
        assert!(config.reconnect.enabled);
        assert_eq!(config.reconnect.max_attempts, 0);
        assert_eq!(config.reconnect.initial_delay(), Duration::from_millis(250));
        assert_eq!(config.reconnect.max_delay(), Duration::from_secs(4));
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(
            config.telemetry.log_file,
            Some(PathBuf::from("/tmp/book-ladder.log"))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.address, "http://127.0.0.1:50051");
        assert_eq!(config.server.connect_timeout_secs, 5);
        assert!(!config.reconnect.enabled);
        assert_eq!(config.reconnect.max_attempts, 5);
        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.telemetry.log_file.is_none());
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let toml = r#"
            [server]
            address = "localhost:7000"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.address, "localhost:7000");
        assert_eq!(config.server.connect_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let toml = r#"
            [telemetry]
            log_format = "xml"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\naddress = \"localhost:9999\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.address, "localhost:9999");
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(include_str!("../config.toml.example")).unwrap();
        assert_eq!(config.server.address, "http://127.0.0.1:50051");
        assert!(!config.reconnect.enabled);
    }
}
