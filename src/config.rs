use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_JOBS_PER_PAGE: usize = 15;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TOAST_TTL_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub jobs_per_page: usize,
    pub request_timeout: Duration,
    pub toast_ttl: Duration,
    pub csrf_token: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let jobs_per_page: usize =
            get_env_parse_or("JOBBOARD_JOBS_PER_PAGE", DEFAULT_JOBS_PER_PAGE)?;
        if jobs_per_page == 0 {
            return Err(Error::Config(
                "JOBBOARD_JOBS_PER_PAGE must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            api_url: get_env("JOBBOARD_API_URL")?,
            jobs_per_page,
            request_timeout: Duration::from_secs(get_env_parse_or(
                "JOBBOARD_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            toast_ttl: Duration::from_secs(get_env_parse_or(
                "JOBBOARD_TOAST_TTL_SECS",
                DEFAULT_TOAST_TTL_SECS,
            )?),
            csrf_token: env::var("JOBBOARD_CSRF_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
        })
    }

    /// Configuration pointing at `api_url` with every other knob at its default.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            jobs_per_page: DEFAULT_JOBS_PER_PAGE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            toast_ttl: Duration::from_secs(DEFAULT_TOAST_TTL_SECS),
            csrf_token: None,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
