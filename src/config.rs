use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Couldn't read config file {0}: {1}")]
    Io(String, std::io::Error),
    #[error("Couldn't parse config file {0}: {1}")]
    Parse(String, toml::de::Error),
    #[error("Invalid bind address {0}: {1}")]
    Addr(String, std::net::AddrParseError),
}

//General configuration read from the settings toml, you might want to use it anywhere
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config
{
    pub host: String,
    pub port: u16,
    pub http_root: String,
    pub static_dir: String,
    pub body_maxsize: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 5000,
            http_root: String::new(),
            static_dir: String::from("static"),
            body_maxsize: 1_048_576,
            log_level: String::from("info"),
        }
    }
}

impl Config
{
    pub fn parse(raw: &str, source: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|error| ConfigError::Parse(String::from(source), error))
    }

    /// Read the config at the given path. A missing file isn't fatal, you just get the
    /// defaults (and the bool tells you that's what happened)
    pub fn read(path: &Path) -> Result<(Self, bool), ConfigError> {
        let source = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok((Self::parse(&raw, &source)?, true)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok((Self::default(), false)),
            Err(error) => Err(ConfigError::Io(source, error))
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|error| ConfigError::Addr(raw, error))
    }
}
