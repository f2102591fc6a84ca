// External dependencies
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

// Internal dependencies
use crate::ai::{ResponseParser, TextGenerator};
use crate::config::Settings;
use crate::error::ProviderError;

const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// generateContent Request Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

pub struct GeminiClient {
    client: Client,
    base_url: Url,
    model_name: String,
    api_key: Option<String>,
    parser: ResponseParser,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url.as_str())
            .field("model_name", &self.model_name)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Client Implementation
// ============================================================================

impl GeminiClient {
    /// Creates a client from settings. A missing API key is not an error
    /// here; it is reported when a request is attempted.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_api_key(settings, settings.api_key())
    }

    pub fn with_api_key(settings: &Settings, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.model.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        let mut base_url =
            Url::parse(&settings.model.base_url).context("Invalid model base URL")?;
        // Endpoint paths are joined relative to the base, so keep its path
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            model_name: settings.model.name.clone(),
            api_key,
            parser: ResponseParser::new(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the generateContent endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model_name))
            .context("Failed to build generateContent URL")
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let url = self
            .endpoint()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(
            "Sending request to {}, prompt length: {}",
            self.model_name,
            prompt.len()
        );

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = self.parser.extract_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let text = self.parser.extract_text(&body)?;
        debug!("Generated response length: {}", text.len());
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let result = self.generate_text(prompt).await;
        if result.is_ok() {
            info!("Received recommendations from {}", self.model_name);
        }
        result
    }
}
