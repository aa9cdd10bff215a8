use bsky_harvester::application::config::{Config, FetchConfig};
use bsky_harvester::application::fetcher::Fetcher;
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Both tests below rewrite the same BSKY_* variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 8] = [
    "BSKY_USERNAME",
    "BSKY_PASSWORD",
    "BSKY_SERVICE_URL",
    "BSKY_TIMEOUT",
    "BSKY_HANDLE_SUFFIX",
    "BSKY_RATE_LIMIT_TOLERANCE",
    "BSKY_POLITENESS_MS",
    "BSKY_PAGE_SIZE",
];

fn clear_vars() {
    for var in VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

#[test]
fn test_config_reads_bsky_variables() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var("BSKY_USERNAME", "alice");
        env::set_var("BSKY_PASSWORD", "app-password");
        env::set_var("BSKY_SERVICE_URL", "https://pds.example.org/xrpc");
        env::set_var("BSKY_TIMEOUT", "45");
        env::set_var("BSKY_HANDLE_SUFFIX", "example.org");
        env::set_var("BSKY_RATE_LIMIT_TOLERANCE", "25");
        env::set_var("BSKY_POLITENESS_MS", "500");
        env::set_var("BSKY_PAGE_SIZE", "50");
    }

    let config = Config::new();
    clear_vars();

    assert_eq!(config.credentials.username, "alice");
    assert_eq!(config.credentials.password, "app-password");
    assert_eq!(config.rest_api.base_url, "https://pds.example.org/xrpc");
    assert_eq!(config.rest_api.timeout, 45);
    assert_eq!(config.rest_api.handle_suffix, "example.org");
    assert_eq!(
        config.fetch,
        FetchConfig {
            rate_limit_tolerance: 25,
            politeness_ms: 500,
            page_size: 50,
        }
    );

    let fetcher = Fetcher::from(&config.fetch);
    assert_eq!(fetcher.tolerance(), 25);
    assert_eq!(fetcher.politeness(), Duration::from_millis(500));
}

#[test]
fn test_config_falls_back_on_unparsable_values() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var("BSKY_USERNAME", "alice");
        env::set_var("BSKY_PASSWORD", "app-password");
        env::set_var("BSKY_TIMEOUT", "soon");
        env::set_var("BSKY_RATE_LIMIT_TOLERANCE", "-1");
        env::set_var("BSKY_POLITENESS_MS", "fast");
        env::set_var("BSKY_PAGE_SIZE", "a hundred");
    }

    let config = Config::new();
    clear_vars();

    assert_eq!(config.rest_api.timeout, 30);
    assert_eq!(config.fetch, FetchConfig::default());
    assert_eq!(config.fetch.rate_limit_tolerance, 10);
    assert_eq!(config.fetch.politeness_ms, 200);
    assert_eq!(config.fetch.page_size, 100);
}
