/// Configuration for the assist endpoint
///
/// This module loads the Gemini connection settings from environment
/// variables and provides a type-safe configuration struct. The persistence
/// location is deliberately not configured here; the embedding application
/// passes a directory to `FileStore::open` directly.
///
/// # Environment Variables
///
/// - `GEMINI_API_KEY`: API key for the model endpoint (required)
/// - `GEMINI_MODEL`: Model name (default: gemini-3-flash-preview)
/// - `GEMINI_BASE_URL`: Endpoint base URL (default: https://generativelanguage.googleapis.com)
///
/// # Example
///
/// ```no_run
/// use taskwise_app::config::AssistConfig;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = AssistConfig::from_env()?;
/// let client = config.client();
/// # Ok(())
/// # }
/// ```

use std::env;

use taskwise_assist::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use taskwise_assist::GeminiClient;

/// Assist endpoint configuration
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// API key sent with every model request
    pub api_key: String,

    /// Model name addressed by the generate endpoint
    pub model: String,

    /// Endpoint base URL
    pub base_url: String,
}

impl AssistConfig {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable is required"))?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }

    /// Builds a Gemini client from this configuration
    pub fn client(&self) -> GeminiClient {
        GeminiClient::new(&self.api_key, &self.model, &self.base_url)
    }
}
