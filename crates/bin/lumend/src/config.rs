//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `lumen.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use lumen_domain::time::Duration as TimeDelta;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Heartbeat timeout and sweep cadence.
    pub liveness: LivenessConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Device liveness configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LivenessConfig {
    /// Heartbeat gap after which the device is reported offline, in seconds.
    pub timeout_secs: u64,
    /// Interval between background staleness sweeps, in seconds.
    ///
    /// Must not exceed `timeout_secs`; half the timeout bounds how late an
    /// offline device is detected.
    pub sweep_interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `lumen.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("lumen.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LUMEN_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("LUMEN_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("LUMEN_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("LUMEN_HEARTBEAT_TIMEOUT_SECS")
            && let Ok(secs) = val.parse()
        {
            self.liveness.timeout_secs = secs;
        }
        if let Ok(val) = std::env::var("LUMEN_SWEEP_INTERVAL_SECS")
            && let Ok(secs) = val.parse()
        {
            self.liveness.sweep_interval_secs = secs;
        }
        if let Ok(val) = std::env::var("LUMEN_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.liveness.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "liveness timeout must be non-zero".to_string(),
            ));
        }
        if self.liveness.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "sweep interval must be non-zero".to_string(),
            ));
        }
        if self.liveness.sweep_interval_secs > self.liveness.timeout_secs {
            return Err(ConfigError::Validation(
                "sweep interval must not exceed the liveness timeout".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Heartbeat timeout as a signed span for timestamp arithmetic.
    #[must_use]
    pub fn heartbeat_timeout(&self) -> TimeDelta {
        i64::try_from(self.liveness.timeout_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }

    /// Interval between background sweeps.
    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.liveness.sweep_interval_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            sweep_interval_secs: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lumend=info,lumen=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
