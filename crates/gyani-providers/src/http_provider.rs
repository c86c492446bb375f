//! HTTP client for OpenAI-compatible `/chat/completions` endpoints.
//!
//! Points at OpenRouter by default; the full endpoint URL comes from
//! [`OpenRouterConfig::api_url`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, error, warn};

use gyani_core::config::schema::OpenRouterConfig;
use gyani_core::types::{ChatCompletionRequest, ChatCompletionResponse, LlmResponse, Message};
use gyani_core::CompletionError;

use crate::traits::{LlmProvider, LlmRequestConfig};

// ─────────────────────────────────────────────
// HttpProvider
// ─────────────────────────────────────────────

/// An LLM provider that talks to an OpenAI-compatible HTTP API.
pub struct HttpProvider {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// Full chat completions URL.
    api_url: String,
    /// Extra headers to send with each request (e.g. `HTTP-Referer`).
    extra_headers: HeaderMap,
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("api_url", &self.api_url)
            .field("extra_headers", &self.extra_headers.len())
            .finish()
    }
}

impl HttpProvider {
    /// Create a provider from the upstream section of the config.
    pub fn new(config: &OpenRouterConfig) -> Result<Self, reqwest::Error> {
        let mut extra_headers = HeaderMap::new();
        if let Some(ref headers) = config.extra_headers {
            for (key, value) in headers {
                if let (Ok(name), Ok(val)) = (
                    HeaderName::from_bytes(key.as_bytes()),
                    HeaderValue::from_str(value),
                ) {
                    extra_headers.insert(name, val);
                } else {
                    warn!("Invalid header: {}={}", key, value);
                }
            }
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(HttpProvider {
            client,
            api_url: config.api_url.clone(),
            extra_headers,
        })
    }

    /// The endpoint this provider posts to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl LlmProvider for HttpProvider {
    async fn chat(
        &self,
        messages: &[Message],
        model: &str,
        api_key: &str,
        config: &LlmRequestConfig,
    ) -> Result<LlmResponse, CompletionError> {
        debug!(
            url = %self.api_url,
            model = %model,
            messages = messages.len(),
            "Calling LLM"
        );

        let request_body = ChatCompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .headers(self.extra_headers.clone())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(model = %model, error = %e, "HTTP request failed");
                CompletionError::request_failed(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(
                model = %model,
                status = %status,
                body = %error_text,
                "API error"
            );
            return Err(CompletionError::request_failed(format!(
                "{}: {}",
                status, error_text
            )));
        }

        let chat_resp = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                error!(model = %model, error = %e, "Failed to parse LLM response");
                CompletionError::request_failed(e)
            })?;

        let llm_resp = LlmResponse::try_from(chat_resp)?;
        debug!(
            model = %model,
            chars = llm_resp.content.len(),
            finish_reason = llm_resp.finish_reason.as_deref().unwrap_or("?"),
            "LLM response received"
        );
        Ok(llm_resp)
    }

    fn display_name(&self) -> &str {
        "OpenRouter"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
