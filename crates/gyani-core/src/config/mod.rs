//! Configuration system: schema, loading, env var overrides, key resolution.
//!
//! # Usage
//! ```no_run
//! use gyani_core::config;
//!
//! let cfg = config::load_config(None);
//! let key = cfg.api_key_for_model(&cfg.models.default_model);
//! println!("Default model: {} (key set: {})", cfg.models.default_model, key.is_some());
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{get_config_path, load_config, save_config};
pub use schema::Config;
