use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration with strongly-typed sections.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Core server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// API behavior policies.
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database connection URL (e.g., "sqlite://./empregados.db?mode=rwc").
    pub url: String,
    /// Maximum number of connections in the pool (optional).
    pub max_conns: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// HTTP status answered when a create hits the duplicate-email rule.
    /// The reference system leaked this as a 500; 409 is the default here
    /// and 500 reproduces the legacy behavior.
    #[serde(default = "default_duplicate_email_status")]
    pub duplicate_email_status: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log verbosity: "trace", "debug", "info", "warn" or "error".
    pub level: String,
}

fn default_duplicate_email_status() -> u16 {
    409
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./empregados.db?mode=rwc".to_string(),
            max_conns: Some(10),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            duplicate_email_status: default_duplicate_email_status(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration with layered loading: defaults → YAML file → environment variables.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(config_path.as_ref()))
            // Example: EMPREGADOS__SERVER__PORT=8080 maps to server.port
            .merge(Env::prefixed("EMPREGADOS__").split("__"));

        figment
            .extract()
            .context("Failed to extract config from figment")
    }

    /// Load configuration from file or fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Apply overrides from command line arguments.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }

        self.logging.level = match args.verbose {
            0 => self.logging.level.clone(), // keep
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
    }
}

/// Command line arguments structure.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config: Option<String>,
    pub port: Option<u16>,
    pub print_config: bool,
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.api.duplicate_email_status, 409);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            port: Some(9000),
            print_config: false,
            verbose: 2,
        };

        config.apply_cli_overrides(&args);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.database.url, config.database.url);
    }
}
