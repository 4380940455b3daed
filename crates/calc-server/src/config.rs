use std::{
    env,
    net::{AddrParseError, SocketAddr},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

const ENV_ADDR_KEY: &str = "CALC_SERVER_ADDR";
const ENV_LOG_FILTER_KEY: &str = "CALC_LOG_FILTER";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_filter: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CALC_SERVER_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("CALC_LOG_FILTER must not be empty or whitespace")]
    InvalidLogFilter,
    #[error("CALC_SERVER_ADDR contains non-unicode data")]
    NonUnicodeListenAddr,
    #[error("CALC_LOG_FILTER contains non-unicode data")]
    NonUnicodeLogFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var(ENV_ADDR_KEY) {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let log_filter = match env::var(ENV_LOG_FILTER_KEY) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::InvalidLogFilter);
                }
                trimmed.to_owned()
            }
            Err(env::VarError::NotPresent) => DEFAULT_LOG_FILTER.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeLogFilter);
            }
        };

        Ok(Self {
            listen_addr,
            log_filter,
        })
    }
}
