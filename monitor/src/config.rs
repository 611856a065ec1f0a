use crate::errors::{MonitorError, Result};
use log::info;
use serde::{Deserialize, Serialize};

pub struct Config {
    settings: config::Config,
}

impl Config {
    pub fn from_toml(filepath: &str) -> Result<Self> {
        config::builder::ConfigBuilder::<config::builder::DefaultState>::default()
            .add_source(config::File::with_name(filepath).format(config::FileFormat::Toml))
            .build()
            .map(|settings| {
                info!("settings: {:?}", settings);
                Config { settings }
            })
            .map_err(|e| MonitorError::ConfigError {
                message: e.to_string(),
            })
    }

    pub fn get<'de, T: Deserialize<'de>>(&self, key: &str) -> Result<T> {
        self.settings
            .get::<T>(key)
            .map_err(|e| MonitorError::ConfigError {
                message: e.to_string(),
            })
    }
}

fn default_ttl_secs() -> u64 {
    30
}

fn default_page_limit() -> u32 {
    50
}

fn default_api_timeout_milli_secs() -> u64 {
    30000
}

fn default_connect_timeout_milli_secs() -> u64 {
    10000
}

fn default_heartbeat_interval_milli_secs() -> u64 {
    25000
}

fn default_reconnect_interval_milli_secs() -> u64 {
    5000
}

#[derive(Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub api_base_url: String,
    pub stream_url: String,

    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64, // staleness window shared by every data kind
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    #[serde(default = "default_api_timeout_milli_secs")]
    pub api_timeout_milli_secs: u64,
    #[serde(default = "default_connect_timeout_milli_secs")]
    pub stream_connect_timeout_milli_secs: u64,
    #[serde(default = "default_heartbeat_interval_milli_secs")]
    pub stream_heartbeat_interval_milli_secs: u64,
    #[serde(default = "default_reconnect_interval_milli_secs")]
    pub stream_reconnect_interval_milli_secs: u64,
}

impl MonitorConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.get("monitor")
    }
}
