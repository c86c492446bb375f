//! Configuration schema.
//!
//! Hierarchy: `Config` → `AppConfig`, `ModelsConfig`, `OpenRouterConfig`,
//! `ServerConfig`, `HumanizerConfig`, `LoggingConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;
use crate::registry::{self, FALLBACK_MODEL, MODELS};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration: built once at start-up and shared read-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub app: AppConfig,
    pub models: ModelsConfig,
    pub openrouter: OpenRouterConfig,
    pub server: ServerConfig,
    pub humanizer: HumanizerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Resolve the API key to use for `model`.
    ///
    /// A known model only ever gets its own key, so `None` if that slot is
    /// empty. An unknown model gets the fallback model's key, and failing that
    /// the first configured key.
    pub fn api_key_for_model(&self, model: &str) -> Option<&str> {
        let keys = &self.models.keys;
        if let Some(spec) = registry::find_by_id(model) {
            return keys.get_by_name(spec.key_name);
        }
        registry::find_by_id(FALLBACK_MODEL)
            .and_then(|spec| keys.get_by_name(spec.key_name))
            .or_else(|| {
                MODELS
                    .iter()
                    .find_map(|spec| keys.get_by_name(spec.key_name))
            })
    }

    /// Whether a known model has its own (non-fallback) key.
    pub fn has_key_for(&self, model: &str) -> bool {
        registry::find_by_id(model)
            .and_then(|spec| self.models.keys.get_by_name(spec.key_name))
            .is_some()
    }

    /// Check that every known model has a key. Fatal at server start-up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<String> = MODELS
            .iter()
            .filter(|spec| !self.has_key_for(spec.id))
            .map(|spec| spec.id.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingKeys(missing))
        }
    }
}

// ─────────────────────────────────────────────
// App
// ─────────────────────────────────────────────

/// Application-level settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Name reported by `/health` and `gyani status`.
    pub name: String,
    /// Verbose logging.
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Gyani AI Research Assistant".to_string(),
            debug: false,
        }
    }
}

// ─────────────────────────────────────────────
// Models
// ─────────────────────────────────────────────

/// Default model and the per-model API keys.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelsConfig {
    /// Model used when a request does not name one.
    pub default_model: String,
    pub keys: ModelKeysConfig,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default_model: FALLBACK_MODEL.to_string(),
            keys: ModelKeysConfig::default(),
        }
    }
}

/// One OpenRouter key per known model. Field names match
/// [`ModelSpec::key_name`](crate::registry::ModelSpec::key_name).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelKeysConfig {
    pub llama: String,
    pub qwen_coder: String,
    #[serde(rename = "qwen72b")]
    pub qwen_72b: String,
    pub qwen_vl: String,
}

impl ModelKeysConfig {
    /// Get a non-empty key by its config name (e.g. `"qwenCoder"`).
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        let key = match name {
            "llama" => &self.llama,
            "qwenCoder" => &self.qwen_coder,
            "qwen72b" => &self.qwen_72b,
            "qwenVl" => &self.qwen_vl,
            _ => return None,
        };
        (!key.is_empty()).then_some(key.as_str())
    }

    /// Mutable access to a key slot by its config name.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "llama" => Some(&mut self.llama),
            "qwenCoder" => Some(&mut self.qwen_coder),
            "qwen72b" => Some(&mut self.qwen_72b),
            "qwenVl" => Some(&mut self.qwen_vl),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────
// OpenRouter
// ─────────────────────────────────────────────

/// Upstream endpoint settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenRouterConfig {
    /// Full chat completions URL.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Extra headers sent with each request (e.g. `HTTP-Referer`, `X-Title`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_headers: Option<HashMap<String, String>>,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_url: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            timeout_secs: 120,
            max_tokens: None,
            temperature: None,
            extra_headers: None,
        }
    }
}

// ─────────────────────────────────────────────
// Server
// ─────────────────────────────────────────────

pub const FRONTEND_URL: &str = "https://gyani-ai.netlify.app";

/// HTTP listener and CORS policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Exact origins allowed by CORS.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                FRONTEND_URL.to_string(),
                format!("{FRONTEND_URL}/"),
            ],
        }
    }
}

// ─────────────────────────────────────────────
// Humanizer
// ─────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HumanizerConfig {
    pub enabled: bool,
}

impl Default for HumanizerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ─────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// Append logs to this file in addition to stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: Some("logs/gyani_app.log".to_string()),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
