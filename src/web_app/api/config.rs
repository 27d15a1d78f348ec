// web_app/api/config.rs - Analysis backend configuration
//
// Values come from the environment (a `.env` file is loaded by the server
// binary). Missing or unparsable values fall back to defaults with a warning.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};

pub const BACKEND_URL_VAR: &str = "ALLERGY_BACKEND_URL";
pub const BACKEND_TIMEOUT_VAR: &str = "ALLERGY_BACKEND_TIMEOUT_SECS";

/// Hosted analysis service used when no URL is configured
pub const DEFAULT_BACKEND_URL: &str =
    "https://us-central1-anti-allergy-server.cloudfunctions.net/app";

/// Where the analysis backend lives and how to talk to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without trailing slash; `/search` and `/compute` are appended
    pub base_url: String,
    /// Per-request timeout. `None` waits for the backend indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Self {
        let base_url = match env::var(BACKEND_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                warn!("{BACKEND_URL_VAR} not set, using default: {DEFAULT_BACKEND_URL}");
                DEFAULT_BACKEND_URL.to_string()
            }
        };

        let timeout = try_load::<u64>(BACKEND_TIMEOUT_VAR).map(Duration::from_secs);

        let config = Self {
            base_url: normalize_base_url(&base_url),
            timeout,
        };
        info!("Analysis backend: {} (timeout: {:?})", config.base_url, config.timeout);
        config
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    pub fn compute_url(&self) -> String {
        format!("{}/compute", self.base_url)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn try_load<T: FromStr>(key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = env::var(key).ok()?;
    raw.trim()
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value '{raw}': {e}, ignoring");
        })
        .ok()
}
