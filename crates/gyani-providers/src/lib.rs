//! LLM provider layer for Gyani.
//!
//! # Architecture
//!
//! - [`traits::LlmProvider`]: trait the upstream client implements
//! - [`http_provider::HttpProvider`]: OpenAI-compatible HTTP client pointed at OpenRouter
//! - [`completion::Completer`]: model → key resolution, prompt assembly, first-candidate extraction

pub mod completion;
pub mod http_provider;
pub mod traits;

// Re-export main types for convenience
pub use completion::{Completer, SYSTEM_PROMPT};
pub use http_provider::HttpProvider;
pub use traits::{LlmProvider, LlmRequestConfig};
