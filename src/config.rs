use std::env::var;
use std::fmt;
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;

const DEFAULT_PORT: u16 = 1337;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SCHEME: &str = "http";
const DEFAULT_GRAPH_API_BASE: &str = "https://graph.facebook.com";
const DEFAULT_GRAPH_API_VERSION: &str = "v23.0";
const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} env param is not set")]
    Missing(&'static str),
    #[error("{name} env param has invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub page_access_token: String,
    pub verify_token: String,
    pub graph_api_base: String,
    pub graph_api_version: String,
    pub send_timeout: Duration,
    pub main_menu_postback: bool,
    pub process_all_events: bool,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|name| var(name).ok())
    }

    /// Builds the config from any name → value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        Ok(Config {
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            scheme: get("SCHEME").unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            page_access_token: required("PAGE_ACCESS_TOKEN")?,
            verify_token: required("VERIFY_TOKEN")?,
            graph_api_base: get("GRAPH_API_BASE")
                .unwrap_or_else(|| DEFAULT_GRAPH_API_BASE.to_string()),
            graph_api_version: get("GRAPH_API_VERSION")
                .unwrap_or_else(|| DEFAULT_GRAPH_API_VERSION.to_string()),
            send_timeout: Duration::from_secs(parse_or(
                get("SEND_TIMEOUT_SECS"),
                "SEND_TIMEOUT_SECS",
                DEFAULT_SEND_TIMEOUT_SECS,
            )?),
            main_menu_postback: parse_flag(get("MAIN_MENU_POSTBACK"), "MAIN_MENU_POSTBACK", true)?,
            process_all_events: parse_flag(
                get("PROCESS_ALL_EVENTS"),
                "PROCESS_ALL_EVENTS",
                false,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("page_access_token", &"<redacted>")
            .field("verify_token", &"<redacted>")
            .field("graph_api_base", &self.graph_api_base)
            .field("graph_api_version", &self.graph_api_version)
            .field("send_timeout", &self.send_timeout)
            .field("main_menu_postback", &self.main_menu_postback)
            .field("process_all_events", &self.process_all_events)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn parse_flag(
    value: Option<String>,
    name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}
