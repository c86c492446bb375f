//! Error taxonomy.
//!
//! Completion failures are surfaced to HTTP callers as `{"error": "<Display>"}`,
//! so the `Display` strings here are part of the external contract.

use thiserror::Error;

/// Failure while producing a completion for a prompt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// No API key resolves for the model (see `Config::api_key_for_model`).
    #[error("Missing API key for model: {model}")]
    MissingCredential { model: String },

    /// Transport error, non-success status, undecodable body, or no candidate.
    #[error("{0}")]
    Upstream(String),
}

impl CompletionError {
    /// Upstream failure caused by the HTTP exchange itself.
    pub fn request_failed(reason: impl std::fmt::Display) -> Self {
        CompletionError::Upstream(format!("API request failed: {reason}"))
    }

    /// Upstream answered, but with no usable candidate completion.
    pub fn no_response() -> Self {
        CompletionError::Upstream("No response from AI model".to_string())
    }
}

/// Start-up configuration failure. Fatal: the server does not bind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing API keys for: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("Invalid CORS origin in server.allowedOrigins: {origin:?} ({reason})")]
    InvalidOrigin { origin: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = CompletionError::MissingCredential {
            model: "qwen/qwen-2.5-72b-instruct".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing API key for model: qwen/qwen-2.5-72b-instruct"
        );
    }

    #[test]
    fn test_upstream_messages() {
        assert_eq!(
            CompletionError::request_failed("429 Too Many Requests").to_string(),
            "API request failed: 429 Too Many Requests"
        );
        assert_eq!(
            CompletionError::no_response().to_string(),
            "No response from AI model"
        );
    }

    #[test]
    fn test_missing_keys_lists_all() {
        let err = ConfigError::MissingKeys(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Missing API keys for: a, b");
    }

    #[test]
    fn test_invalid_origin_names_the_entry() {
        let err = ConfigError::InvalidOrigin {
            origin: "http://bad host".into(),
            reason: "invalid uri character".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid CORS origin in server.allowedOrigins: \"http://bad host\" (invalid uri character)"
        );
    }
}
