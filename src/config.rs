use std::env;
use std::fmt;
use std::str::FromStr;

use axum::http::HeaderValue;
use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Gemini API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind host (e.g., 0.0.0.0)
    pub app_host: String,
    /// HTTP bind port (e.g., 8080)
    pub app_port: u16,

    pub gemini_api_key: ApiKey,
    /// Models collection URL, always ending in `/`
    pub gemini_base_url: Url,
    pub gemini_model: String,

    /// The only origin allowed to call the API from a browser
    pub frontend_origin: HeaderValue,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("Invalid origin for {name}: {value}")]
    InvalidOrigin { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present
        let _ = dotenv();

        let app_host = env_or_default("APP_HOST", "0.0.0.0");
        let app_port = parse_or_default::<u16>("APP_PORT", 8080)?;

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;
        let gemini_base_url = parse_base_url(
            "GEMINI_BASE_URL",
            &env_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
        )?;
        let gemini_model = env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);

        let frontend_origin = parse_origin(
            "FRONTEND_ORIGIN",
            &env_or_default("FRONTEND_ORIGIN", DEFAULT_FRONTEND_ORIGIN),
        )?;

        Ok(Self {
            app_host,
            app_port,
            gemini_api_key,
            gemini_base_url,
            gemini_model,
            frontend_origin,
        })
    }
}

/* --------------------------- helpers --------------------------- */

fn env_or_default(key: &'static str, default: &'static str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or_default<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(v) => v.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            name: key,
            value: v,
        }),
        Err(_) => Ok(default),
    }
}

/// Parses a base URL and makes sure it ends with `/` so the model name appends as a segment.
fn parse_base_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        name: key,
        value: raw.to_string(),
    };
    let mut url = Url::parse(raw).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_origin(key: &'static str, raw: &str) -> Result<HeaderValue, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidOrigin {
            name: key,
            value: raw.to_string(),
        });
    }
    HeaderValue::from_str(trimmed).map_err(|_| ConfigError::InvalidOrigin {
        name: key,
        value: raw.to_string(),
    })
}
