use serde::{Deserialize, Serialize};
use std::fs;

/// Client-side settings shared by the interactive player and the one-shot
/// commands. The column count mirrors the server's board width so the input
/// prompt can validate locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub server: String,
    pub poll_interval_ms: u64,
    pub columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "http://127.0.0.1:5000".into(),
            poll_interval_ms: 1_000,
            columns: 9,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    let mut cfg = Config::default();
    if let Ok(path) = std::env::var("C5_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.server {
            cfg.server = v;
        }
        if let Some(v) = f.poll_interval_ms {
            cfg.poll_interval_ms = v;
        }
        if let Some(v) = f.columns {
            cfg.columns = v;
        }
    }

    if let Ok(server) = std::env::var("C5_SERVER") {
        if !server.is_empty() {
            cfg.server = server;
        }
    }
    if let Ok(poll) = std::env::var("C5_POLL_MS") {
        if !poll.is_empty() {
            cfg.poll_interval_ms = poll
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid poll interval".into()))?;
        }
    }

    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    server: Option<String>,
    #[serde(default)]
    poll_interval_ms: Option<u64>,
    #[serde(default)]
    columns: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.server.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: server must not be empty".into(),
        ));
    }
    if cfg.poll_interval_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: poll_interval_ms must be >0".into(),
        ));
    }
    if cfg.columns == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: columns must be >0".into(),
        ));
    }
    Ok(())
}
