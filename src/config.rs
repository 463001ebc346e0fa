// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    Addr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value}")]
    Number { var: &'static str, value: String },

    #[error("{var} is not a valid URL: {value}")]
    Url { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    /// `None` when no credential is configured; AI search then degrades.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Base of the links handed out by the share dialog.
    pub public_url: Url,
    pub ai: AiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let addr_raw = get("STAYEASE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_raw.parse().map_err(|_| ConfigError::Addr {
            var: "STAYEASE_ADDR",
            value: addr_raw.clone(),
        })?;

        let max_workers = match get("STAYEASE_WORKERS") {
            Some(raw) => parse_positive("STAYEASE_WORKERS", &raw)? as usize,
            None => DEFAULT_WORKERS,
        };

        let public_raw = get("STAYEASE_PUBLIC_URL").unwrap_or_else(|| format!("http://{addr}"));
        let public_url = Url::parse(&public_raw).map_err(|_| ConfigError::Url {
            var: "STAYEASE_PUBLIC_URL",
            value: public_raw.clone(),
        })?;

        let timeout_secs = match get("AI_TIMEOUT_SECS") {
            Some(raw) => parse_positive("AI_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_AI_TIMEOUT_SECS,
        };

        let ai = AiConfig {
            api_key: get("API_KEY").or_else(|| get("GEMINI_API_KEY")),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            addr,
            max_workers,
            public_url,
            ai,
        })
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Number {
            var,
            value: raw.to_string(),
        }),
    }
}
