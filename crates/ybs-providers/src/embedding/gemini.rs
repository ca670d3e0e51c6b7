//! Gemini Embedding Provider
//!
//! Implements the EmbeddingProvider port using Google's Gemini embedding API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use ybs_domain::error::{Error, Result};
use ybs_domain::ports::EmbeddingProvider;
use ybs_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_GEMINI, ERROR_MSG_REQUEST_TIMEOUT,
    GEMINI_DEFAULT_BASE_URL,
};
use crate::embedding::helpers::constructor;

/// Gemini embedding provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use ybs_providers::embedding::GeminiEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = GeminiEmbeddingProvider::new(
///         "AIza-your-api-key".to_string(),
///         None,
///         "text-embedding-004".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct GeminiEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiEmbeddingProvider {
    /// Create a new Gemini embedding provider
    ///
    /// # Arguments
    /// * `api_key` - Google AI API key
    /// * `base_url` - Optional custom base URL (defaults to Google AI API)
    /// * `model` - Model name (e.g., "text-embedding-004")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the effective base URL
    pub fn base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), GEMINI_DEFAULT_BASE_URL)
    }

    /// Model name without the `models/` prefix
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:embedContent",
            self.base_url(),
            self.api_model_name()
        )
    }

    /// Fetch embedding for a single text
    async fn fetch_single_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": format!("models/{}", self.api_model_name()),
            "content": { "parts": [{ "text": text }] }
        });

        debug!(model = %self.api_model_name(), chars = text.chars().count(), "Requesting Gemini embedding");

        let response = self
            .http_client
            .post(self.endpoint())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
                } else {
                    Error::embedding(format!("HTTP request failed: {e}"))
                }
            })?;

        read_response(response).await
    }

    /// Parse embedding from response data
    fn parse_embedding(&self, response_data: &serde_json::Value) -> Result<Embedding> {
        let values = response_data["embedding"]["values"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing embedding values"))?;

        #[allow(clippy::cast_possible_truncation)]
        let vector = values
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| Error::embedding("Invalid response format: non-numeric value"))
            })
            .collect::<Result<Vec<f32>>>()?;

        if vector.is_empty() {
            return Err(Error::embedding("Gemini returned an empty embedding"));
        }

        Ok(Embedding::new(vector, self.model.clone()))
    }
}

/// Decode a successful reply, or turn a failed one into an embedding error
async fn read_response(response: Response) -> Result<serde_json::Value> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("Gemini returned an unreadable body: {e}")));
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::embedding(format!(
        "Gemini {} ({}): {}",
        failure_kind(status),
        status.as_u16(),
        body.trim()
    )))
}

fn failure_kind(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "authentication failed",
        StatusCode::TOO_MANY_REQUESTS => "rate limit exceeded",
        s if s.is_server_error() => "server error",
        _ => "request rejected",
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        // embedContent takes one text per request
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            let response_data = self.fetch_single_embedding(text).await?;
            results.push(self.parse_embedding(&response_data)?);
        }

        Ok(results)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_GEMINI
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

impl std::fmt::Debug for GeminiEmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiEmbeddingProvider")
            .field("base_url", &self.base_url())
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
