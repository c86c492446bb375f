//! LLM provider trait.

use async_trait::async_trait;
use gyani_core::config::schema::OpenRouterConfig;
use gyani_core::types::{LlmResponse, Message};
use gyani_core::CompletionError;

/// Optional sampling parameters forwarded with each call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LlmRequestConfig {
    /// Maximum tokens to generate. Upstream default when `None`.
    pub max_tokens: Option<u32>,
    /// Sampling temperature. Upstream default when `None`.
    pub temperature: Option<f64>,
}

impl From<&OpenRouterConfig> for LlmRequestConfig {
    fn from(config: &OpenRouterConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// A chat completion backend.
///
/// The key is passed per call because it depends on the requested model.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a chat completion request and return the first candidate.
    ///
    /// # Errors
    /// `CompletionError::Upstream` on transport failure, non-success status,
    /// undecodable body, or an empty candidate list.
    async fn chat(
        &self,
        messages: &[Message],
        model: &str,
        api_key: &str,
        config: &LlmRequestConfig,
    ) -> Result<LlmResponse, CompletionError>;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
