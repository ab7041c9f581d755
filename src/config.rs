use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Cohere API key used for text generation
    pub cohere_api_key: String,

    /// Google Books API key
    pub google_books_api_key: String,

    /// Google Books API base URL
    #[serde(default = "default_google_books_api_url")]
    pub google_books_api_url: String,

    /// Cohere API base URL
    #[serde(default = "default_cohere_api_url")]
    pub cohere_api_url: String,

    /// Cohere model used for analysis
    #[serde(default = "default_generation_model")]
    pub generation_model: String,

    /// Timeout applied to every outbound HTTP request, in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_google_books_api_url() -> String {
    "https://www.googleapis.com/books/v1".to_string()
}

fn default_cohere_api_url() -> String {
    "https://api.cohere.ai".to_string()
}

fn default_generation_model() -> String {
    "command".to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
