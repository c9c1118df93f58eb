use crate::{Error, Result};
use std::time::Duration;

pub const LANGUAGES: [&str; 3] = ["java", "python", "javascript"];

pub const HH_BASE_URL: &str = "https://api.hh.ru";
pub const SUPERJOB_BASE_URL: &str = "https://api.superjob.ru";

const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub superjob_app_key: String,
    pub hh_base_url: String,
    pub superjob_base_url: String,
    /// Upper bound of the pause between page requests.
    pub request_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let superjob_app_key = lookup("SUPERJOB_APP_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Config("Required environment variable 'SUPERJOB_APP_KEY' is not set".into())
            })?;

        let request_delay_ms = match lookup("REQUEST_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("REQUEST_DELAY_MS must be a number of milliseconds, got '{raw}'"))
            })?,
            None => DEFAULT_REQUEST_DELAY_MS,
        };

        Ok(Config {
            superjob_app_key,
            hh_base_url: lookup("HH_BASE_URL").unwrap_or_else(|| HH_BASE_URL.to_string()),
            superjob_base_url: lookup("SUPERJOB_BASE_URL")
                .unwrap_or_else(|| SUPERJOB_BASE_URL.to_string()),
            request_delay: Duration::from_millis(request_delay_ms),
        })
    }
}
