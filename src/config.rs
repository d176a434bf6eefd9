use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation service base URL
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
