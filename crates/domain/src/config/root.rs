use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordConfig;
use super::resolution::{ResolutionConfig, MAX_ALIAS_DEPTH_LIMIT};
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "simpledns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/simpledns/config.toml";

/// Main configuration structure for simpledns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Forwarding target for names without a local answer
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Alias-following and reverse-name behaviour
    #[serde(default)]
    pub resolution: ResolutionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Operator-defined records, in file order
    #[serde(default)]
    pub records: Vec<RecordConfig>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. simpledns.toml in current directory
    /// 3. /etc/simpledns/config.toml
    /// 4. Default configuration
    ///
    /// Records come back with defaults applied and names normalized, but the
    /// result is not validated; call [`Config::validate`] before use.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.prepare_records();
        Ok(config)
    }

    /// Parse configuration from TOML text, applying record defaults and
    /// normalization.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.prepare_records();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.server = upstream;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    fn prepare_records(&mut self) {
        for record in &mut self.records {
            record.apply_defaults();
            record.normalize();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.udp_payload_size < 512 {
            return Err(ConfigError::Validation(format!(
                "UDP payload size must be at least 512 bytes, got {}",
                self.server.udp_payload_size
            )));
        }

        self.upstream.socket_addr()?;

        if self.resolution.max_alias_depth > MAX_ALIAS_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "max_alias_depth {} exceeds limit of {}",
                self.resolution.max_alias_depth, MAX_ALIAS_DEPTH_LIMIT
            )));
        }

        if self.records.is_empty() {
            return Err(ConfigError::Validation("No records defined".to_string()));
        }

        for (index, record) in self.records.iter().enumerate() {
            record.validate().map_err(|reason| {
                ConfigError::Validation(format!(
                    "Record #{} ({} {}): {}",
                    index, record.name, record.record_type, reason
                ))
            })?;
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream: Option<String>,
    pub log_level: Option<String>,
}
