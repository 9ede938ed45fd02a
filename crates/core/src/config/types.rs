use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub lottery: LotteryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("lotto.db")
}

/// Number engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LotteryConfig {
    /// Maximum number of random draws before generation gives up (default: 10)
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,
    /// Upper bound (inclusive) for randomly drawn numbers (default: 44).
    /// Registered tickets may still carry 45.
    #[serde(default = "default_max_drawn_number")]
    pub max_drawn_number: i32,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            retry_budget: default_retry_budget(),
            max_drawn_number: default_max_drawn_number(),
        }
    }
}

fn default_retry_budget() -> u32 {
    10
}

fn default_max_drawn_number() -> i32 {
    44
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub database: SanitizedDatabaseConfig,
    pub lottery: LotteryConfig,
}

/// Database config without the filesystem location
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedDatabaseConfig {
    pub file_name: Option<String>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            database: SanitizedDatabaseConfig {
                file_name: config
                    .database
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned()),
            },
            lottery: config.lottery.clone(),
        }
    }
}
