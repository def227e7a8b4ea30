use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Customers and history are stored in two independent databases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub customers_url: String,
    pub history_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            customers_url: "sqlite://customers.db?mode=rwc".to_string(),
            history_url: "sqlite://history.db?mode=rwc".to_string(),
            max_connections: default_max_connections(),
        }
    }
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::parse(&config_str)?,
            // no file: environment variables and defaults only
            Err(e) if e.kind() == ErrorKind::NotFound => Config {
                server: ServerConfig::default(),
                database: DatabaseConfig::default(),
            },
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "Cannot read config file {config_path}: {e}"
                )));
            }
        };

        config.apply_env(|name| env::var(name).ok());
        Ok(config)
    }

    pub fn parse(config_str: &str) -> AppResult<Self> {
        toml::from_str(config_str)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {e}")))
    }

    /// Environment variables override file values.
    fn apply_env(&mut self, get_env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = get_env("SERVER_HOST") {
            self.server.host = v;
        }
        // PORT is the older name, SERVER_PORT wins when both are set
        for name in ["PORT", "SERVER_PORT"] {
            if let Some(v) = get_env(name)
                && let Ok(p) = v.parse()
            {
                self.server.port = p;
            }
        }
        if let Some(v) = get_env("CUSTOMERS_DATABASE_URL") {
            self.database.customers_url = v;
        }
        if let Some(v) = get_env("HISTORY_DATABASE_URL") {
            self.database.history_url = v;
        }
        if let Some(v) = get_env("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            self.database.max_connections = mc;
        }
    }
}
