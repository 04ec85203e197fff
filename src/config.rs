//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::stats::DEFAULT_STATS_TTL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file backing the record store
    pub data_file: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Stats cache TTL in seconds
    pub stats_ttl: u64,
    /// Background file-watch interval in seconds
    pub reload_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_FILE` - Path to the backing JSON file (default: data/items.json)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STATS_TTL` - Stats cache TTL in seconds (default: 300)
    /// - `RELOAD_INTERVAL` - File-watch frequency in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/items.json")),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            stats_ttl: env::var("STATS_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_STATS_TTL),
            reload_interval: env::var("RELOAD_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/items.json"),
            server_port: 3000,
            stats_ttl: DEFAULT_STATS_TTL,
            reload_interval: 5,
        }
    }
}
