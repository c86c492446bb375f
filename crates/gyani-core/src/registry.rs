//! Model registry: the models this backend holds OpenRouter keys for.
//!
//! Each `ModelSpec` ties an OpenRouter model id to the config field and the
//! environment variable its key comes from.

// ─────────────────────────────────────────────
// ModelSpec: static metadata for one model
// ─────────────────────────────────────────────

/// Static specification describing one known model.
#[derive(Clone, Debug)]
pub struct ModelSpec {
    /// OpenRouter model id (e.g. `"qwen/qwen-2.5-72b-instruct"`).
    pub id: &'static str,
    /// Field name under `models.keys` in the JSON config (camelCase).
    pub key_name: &'static str,
    /// Environment variable holding the key. E.g. `"LLAMA_API_KEY"`.
    pub env_key: &'static str,
    /// Human-readable name for status output.
    pub display_name: &'static str,
}

pub const LLAMA_405B: &str = "meta-llama/llama-3.1-405b-instruct";
pub const QWEN_CODER_32B: &str = "qwen/qwen-2.5-coder-32b-instruct";
pub const QWEN_72B: &str = "qwen/qwen-2.5-72b-instruct";
pub const QWEN_VL_32B: &str = "qwen/qwen2.5-vl-32b-instruct";

/// Model whose key is used when the requested model is not in [`MODELS`].
pub const FALLBACK_MODEL: &str = LLAMA_405B;

/// All known models, in display order. The first entry is the fallback.
pub static MODELS: &[ModelSpec] = &[
    ModelSpec {
        id: LLAMA_405B,
        key_name: "llama",
        env_key: "LLAMA_API_KEY",
        display_name: "Llama 3.1 405B Instruct",
    },
    ModelSpec {
        id: QWEN_CODER_32B,
        key_name: "qwenCoder",
        env_key: "QWEEN_CODER_API_KEY",
        display_name: "Qwen 2.5 Coder 32B",
    },
    ModelSpec {
        id: QWEN_72B,
        key_name: "qwen72b",
        env_key: "QWEEN_72B_API_KEY",
        display_name: "Qwen 2.5 72B Instruct",
    },
    ModelSpec {
        id: QWEN_VL_32B,
        key_name: "qwenVl",
        env_key: "QWEEN_VL_API_KEY",
        display_name: "Qwen 2.5 VL 32B",
    },
];

/// Find a model spec by exact OpenRouter id.
pub fn find_by_id(id: &str) -> Option<&'static ModelSpec> {
    MODELS.iter().find(|spec| spec.id == id)
}

/// Find a model spec by its config key name (e.g. `"qwen72b"`).
pub fn find_by_key_name(name: &str) -> Option<&'static ModelSpec> {
    MODELS.iter().find(|spec| spec.key_name == name)
}
