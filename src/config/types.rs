use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the commerce API (e.g., "https://api.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Absolute path of the listing endpoint.
    #[serde(default = "default_listing_path")]
    pub listing_path: String,
    /// Sent as `Accept-Language` (e.g., "ae-en").
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Whole-request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Max retry attempts for retryable fetch failures (default: 3).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base backoff in milliseconds, doubled per attempt (default: 200).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
}

/// Listing page behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSettings {
    /// Debounce window for refetch triggers (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Descriptions longer than this many characters collapse behind "Show More".
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
    /// Skeleton cards shown while loading.
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
    /// Count shown when the response carries no number of its own.
    #[serde(default = "default_fallback_total")]
    pub fallback_total: u64,
    /// Banner used when the page has none; the heading is overlaid on it.
    #[serde(default = "default_placeholder_banner_url")]
    pub placeholder_banner_url: String,
    /// Upper bound of the price slider.
    #[serde(default = "default_price_max")]
    pub price_max: u32,
    #[serde(default = "default_price_step")]
    pub price_step: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://prodapp.lifepharmacy.com".to_string()
}

fn default_listing_path() -> String {
    "/api/web/products".to_string()
}

fn default_locale() -> String {
    "ae-en".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_base_ms() -> u64 {
    200
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_description_limit() -> usize {
    400
}

fn default_skeleton_count() -> usize {
    8
}

fn default_fallback_total() -> u64 {
    40
}

fn default_placeholder_banner_url() -> String {
    "https://www.lifepharmacy.com/images/page-header-bg.jpg".to_string()
}

fn default_price_max() -> u32 {
    500
}

fn default_price_step() -> u32 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_path: default_listing_path(),
            locale: default_locale(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
        }
    }
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            description_limit: default_description_limit(),
            skeleton_count: default_skeleton_count(),
            fallback_total: default_fallback_total(),
            placeholder_banner_url: default_placeholder_banner_url(),
            price_max: default_price_max(),
            price_step: default_price_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl ListingSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
