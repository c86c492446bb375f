//! Completion requester: turns a prompt and an optional model into text.
//!
//! Resolves the model (falling back to the configured default), picks the API
//! key for that model, wraps the prompt with the assistant persona and returns
//! the first candidate's text unmodified. Humanization is the caller's job.

use std::sync::Arc;

use tracing::{debug, error};

use gyani_core::types::Message;
use gyani_core::{CompletionError, Config};

use crate::http_provider::HttpProvider;
use crate::traits::{LlmProvider, LlmRequestConfig};

/// Persona sent as the system message of every request.
pub const SYSTEM_PROMPT: &str = "You are Gyani-AI, a wise and knowledgeable academic assistant \
created by Naveen Kumar. Your purpose is to support students and researchers with formal, \
plagiarism-free, and humanized content, and to help academicians with their research work. \
Use a professional yet approachable tone, tailored for academic success. Always provide clear, \
structured answers with a touch of encouragement. If asked 'Who is the creator?' or 'Who made \
this AI?', respond with: 'This AI was created by Naveen Kumar, a hospitality professional who \
excels in his field.' If the question is unclear, ask for clarification politely.";

/// Produces completions for prompts using the shared config and provider.
pub struct Completer {
    config: Arc<Config>,
    provider: Arc<dyn LlmProvider>,
    request_config: LlmRequestConfig,
}

impl std::fmt::Debug for Completer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completer")
            .field("provider", &self.provider.display_name())
            .field("default_model", &self.config.models.default_model)
            .finish()
    }
}

impl Completer {
    pub fn new(config: Arc<Config>, provider: Arc<dyn LlmProvider>) -> Self {
        let request_config = LlmRequestConfig::from(&config.openrouter);
        Self {
            config,
            provider,
            request_config,
        }
    }

    /// Build a completer backed by an [`HttpProvider`] for `config.openrouter`.
    pub fn from_config(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        let provider = HttpProvider::new(&config.openrouter)?;
        Ok(Self::new(config, Arc::new(provider)))
    }

    /// The model used when a request names none (or an empty one).
    pub fn resolve_model<'a>(&'a self, model: Option<&'a str>) -> &'a str {
        model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.config.models.default_model)
    }

    /// Request a completion for `prompt`.
    ///
    /// # Errors
    /// - `MissingCredential` if no key can be resolved for the model
    /// - `Upstream` if the call fails or returns no candidate
    pub async fn request_completion(
        &self,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<String, CompletionError> {
        let model = self.resolve_model(model);
        let api_key = self.config.api_key_for_model(model).ok_or_else(|| {
            error!(model = %model, "No API key for model");
            CompletionError::MissingCredential {
                model: model.to_string(),
            }
        })?;

        debug!(
            provider = self.provider.display_name(),
            model = %model,
            "Requesting completion"
        );

        let messages = [Message::system(SYSTEM_PROMPT), Message::user(prompt)];
        let response = self
            .provider
            .chat(&messages, model, api_key, &self.request_config)
            .await?;

        Ok(response.content)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
