//! Config loader: reads `~/.gyani/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.gyani/config.json` (or an explicit path)
//! 3. Environment variables (override JSON)
//!
//! A `.env` file is the caller's business (the binary loads it with `dotenvy`
//! before calling [`load_config`]).

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;
use crate::registry::MODELS;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from `path` (or the default path) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    let config = load_config_from_path(&config_path);
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Plain names:
/// - `LLAMA_API_KEY`, `QWEEN_CODER_API_KEY`, `QWEEN_72B_API_KEY`, `QWEEN_VL_API_KEY`
///   → `models.keys.*` (see [`MODELS`])
/// - `DEFAULT_MODEL` → `models.default_model`
/// - `OPENROUTER_API_URL` → `openrouter.api_url`
/// - `DEBUG` → `app.debug`
///
/// Structured names (`GYANI_<SECTION>__<FIELD>`):
/// - `GYANI_SERVER__HOST`, `GYANI_SERVER__PORT`
/// - `GYANI_OPENROUTER__TIMEOUT_SECS`
/// - `GYANI_HUMANIZER__ENABLED`
/// - `GYANI_LOGGING__FILE` (empty string disables the file sink)
pub fn apply_env_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // Model keys
    for spec in MODELS {
        if let Some(val) = var(spec.env_key) {
            if let Some(slot) = config.models.keys.slot_mut(spec.key_name) {
                *slot = val;
            }
        }
    }

    if let Some(val) = var("DEFAULT_MODEL").filter(|v| !v.is_empty()) {
        config.models.default_model = val;
    }
    if let Some(val) = var("OPENROUTER_API_URL").filter(|v| !v.is_empty()) {
        config.openrouter.api_url = val;
    }
    if let Some(val) = var("DEBUG") {
        config.app.debug = parse_flag(&val);
    }

    // Server
    if let Some(val) = var("GYANI_SERVER__HOST") {
        config.server.host = val;
    }
    if let Some(val) = var("GYANI_SERVER__PORT") {
        match val.parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => warn!("Ignoring invalid GYANI_SERVER__PORT: {}", val),
        }
    }

    // OpenRouter
    if let Some(val) = var("GYANI_OPENROUTER__TIMEOUT_SECS") {
        if let Ok(n) = val.parse::<u64>() {
            config.openrouter.timeout_secs = n;
        }
    }

    // Humanizer
    if let Some(val) = var("GYANI_HUMANIZER__ENABLED") {
        config.humanizer.enabled = parse_flag(&val);
    }

    // Logging
    if let Some(val) = var("GYANI_LOGGING__FILE") {
        config.logging.file = (!val.is_empty()).then_some(val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::registry::{QWEN_72B, QWEN_CODER_32B};

    fn write_temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.json"));
        assert_eq!(config.server.port, 8000);
        assert!(config.humanizer.enabled);
    }

    #[test]
    fn test_load_valid_json() {
        let file = write_temp_json(
            r#"{
            "models": {
                "defaultModel": "qwen/qwen-2.5-coder-32b-instruct",
                "keys": { "qwenCoder": "sk-or-file" }
            }
        }"#,
        );

        let config = load_config_from_path(file.path());
        assert_eq!(config.models.default_model, QWEN_CODER_32B);
        assert_eq!(config.models.keys.qwen_coder, "sk-or-file");
        // Default preserved
        assert_eq!(config.openrouter.timeout_secs, 120);
    }

    #[test]
    fn test_load_invalid_json_returns_defaults() {
        let file = write_temp_json("not valid json {{{");
        let config = load_config_from_path(file.path());
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.models.default_model = QWEN_72B.to_string();
        config.models.keys.qwen_72b = "sk-or-test".to_string();

        save_config(&config, Some(&path)).unwrap();

        let reloaded = load_config_from_path(&path);
        assert_eq!(reloaded.models.default_model, QWEN_72B);
        assert_eq!(reloaded.models.keys.qwen_72b, "sk-or-test");
    }

    #[test]
    fn test_env_model_keys() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[
                ("LLAMA_API_KEY", "k-llama"),
                ("QWEEN_CODER_API_KEY", "k-coder"),
                ("QWEEN_72B_API_KEY", "k-72b"),
                ("QWEEN_VL_API_KEY", "k-vl"),
            ]),
        );
        assert_eq!(config.models.keys.llama, "k-llama");
        assert_eq!(config.models.keys.qwen_coder, "k-coder");
        assert_eq!(config.models.keys.qwen_72b, "k-72b");
        assert_eq!(config.models.keys.qwen_vl, "k-vl");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_default_model_and_debug() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[("DEFAULT_MODEL", QWEN_72B), ("DEBUG", "True")]),
        );
        assert_eq!(config.models.default_model, QWEN_72B);
        assert!(config.app.debug);
    }

    #[test]
    fn test_env_debug_false_by_default_value() {
        let config = apply_env_overrides(Config::default(), env(&[("DEBUG", "False")]));
        assert!(!config.app.debug);
    }

    #[test]
    fn test_env_server_overrides() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[("GYANI_SERVER__HOST", "127.0.0.1"), ("GYANI_SERVER__PORT", "9999")]),
        );
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_env_invalid_port_ignored() {
        let config =
            apply_env_overrides(Config::default(), env(&[("GYANI_SERVER__PORT", "eighty")]));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_env_humanizer_and_logging() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[("GYANI_HUMANIZER__ENABLED", "0"), ("GYANI_LOGGING__FILE", "")]),
        );
        assert!(!config.humanizer.enabled);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let file = write_temp_json(r#"{ "models": { "keys": { "llama": "from-file" } } }"#);
        let config = apply_env_overrides(
            load_config_from_path(file.path()),
            env(&[("LLAMA_API_KEY", "from-env")]),
        );
        assert_eq!(config.models.keys.llama, "from-env");
    }

    #[test]
    fn test_saved_json_uses_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        save_config(&Config::default(), Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert!(raw["openrouter"].get("timeoutSecs").is_some());
        assert!(raw["openrouter"].get("timeout_secs").is_none());
    }
}
