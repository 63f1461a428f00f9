use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default random-meal endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.themealdb.com/api/json/v1/1/random.php";

/// Fetcher configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FetcherConfig {
    /// Endpoint to fetch random recipes from
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Number of concurrent attempts per batch when the caller gives none
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Request timeout in seconds; absent means the client default
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        FetcherConfig {
            endpoint: default_endpoint(),
            batch_size: default_batch_size(),
            timeout: None,
        }
    }
}

// Default value functions
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_batch_size() -> usize {
    20
}

impl FetcherConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BATCH_SIZE, MEALDB__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MEALDB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
