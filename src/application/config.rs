use crate::constants::{
    DEFAULT_HANDLE_SUFFIX, DEFAULT_PAGE_SIZE, DEFAULT_POLITENESS_MS, DEFAULT_RATE_LIMIT_TOLERANCE,
    DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Bluesky API
pub struct Credentials {
    /// Screen name, the handle suffix is appended at login
    pub username: String,
    /// Account or app password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Bluesky client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Pagination and rate limit behaviour
    pub fetch: FetchConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the XRPC endpoint
pub struct RestApiConfig {
    /// Base XRPC URL, e.g. `https://bsky.social/xrpc`
    pub base_url: String,
    /// Timeout in seconds for each request
    pub timeout: u64,
    /// Domain appended to screen names to build handles
    pub handle_suffix: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Configuration of the paginated fetch loop
pub struct FetchConfig {
    /// Remaining quota at or below which the loop waits for the rate limit reset
    pub rate_limit_tolerance: u32,
    /// Pause in milliseconds between two page requests
    pub politeness_ms: u64,
    /// Number of items per page
    pub page_size: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            rate_limit_tolerance: DEFAULT_RATE_LIMIT_TOLERANCE,
            politeness_ms: DEFAULT_POLITENESS_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FetchConfig {
    /// Politeness interval as a duration
    #[must_use]
    pub fn politeness(&self) -> Duration {
        Duration::from_millis(self.politeness_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from environment variables and an optional `.env` file
    ///
    /// Recognised variables: `BSKY_USERNAME`, `BSKY_PASSWORD`, `BSKY_SERVICE_URL`,
    /// `BSKY_TIMEOUT`, `BSKY_HANDLE_SUFFIX`, `BSKY_RATE_LIMIT_TOLERANCE`,
    /// `BSKY_POLITENESS_MS` and `BSKY_PAGE_SIZE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("BSKY_USERNAME", String::from("default_username"));
        let password = get_env_or_default("BSKY_PASSWORD", String::from("default_password"));

        if username == "default_username" {
            error!("BSKY_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("BSKY_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("BSKY_SERVICE_URL", String::from(DEFAULT_SERVICE_URL)),
                timeout: get_env_or_default("BSKY_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                handle_suffix: get_env_or_default(
                    "BSKY_HANDLE_SUFFIX",
                    String::from(DEFAULT_HANDLE_SUFFIX),
                ),
            },
            fetch: FetchConfig {
                rate_limit_tolerance: get_env_or_default(
                    "BSKY_RATE_LIMIT_TOLERANCE",
                    DEFAULT_RATE_LIMIT_TOLERANCE,
                ),
                politeness_ms: get_env_or_default("BSKY_POLITENESS_MS", DEFAULT_POLITENESS_MS),
                page_size: get_env_or_default("BSKY_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            },
        }
    }

    /// Configuration pointing at `base_url` with default settings, mainly for tests
    /// and self-hosted PDS instances
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            credentials: Credentials {
                username: String::new(),
                password: String::new(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
                handle_suffix: String::from(DEFAULT_HANDLE_SUFFIX),
            },
            fetch: FetchConfig::default(),
        }
    }
}
