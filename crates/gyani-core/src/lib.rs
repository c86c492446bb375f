//! Core crate for Gyani.
//!
//! - [`config`]: typed configuration, JSON loader, env overrides, credential resolution
//! - [`registry`]: the fixed list of models the backend knows keys for
//! - [`types`]: OpenAI-format chat completion wire types
//! - [`error`]: error taxonomy shared by the providers and the server

pub mod config;
pub mod error;
pub mod registry;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{CompletionError, ConfigError};
