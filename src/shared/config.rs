//! Application configuration. Generation credentials and tuning.

use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Generation calls running longer than this are treated as transport errors.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Generation delegate
    // ─────────────────────────────────────────────────────────────────────────
    /// API key. Read from MINDCHAT_AI_API_KEY, then OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat-completions URL. Read from MINDCHAT_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Defaults to "gpt-4o-mini". Read from MINDCHAT_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Output length cap. Read from MINDCHAT_AI_MAX_TOKENS.
    #[serde(default, deserialize_with = "lenient")]
    pub ai_max_tokens: Option<u32>,

    /// Sampling temperature. Read from MINDCHAT_AI_TEMPERATURE.
    #[serde(default, deserialize_with = "lenient")]
    pub ai_temperature: Option<f32>,

    /// Read from MINDCHAT_GENERATION_TIMEOUT_SECS.
    #[serde(default, deserialize_with = "lenient")]
    pub generation_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Reply selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Fixed seed for fallback/media picks. Every pick for a given topic or media
    /// category is then constant for the whole session. Read from MINDCHAT_RNG_SEED.
    #[serde(default, deserialize_with = "lenient")]
    pub rng_seed: Option<u64>,
}

/// Numeric field that tolerates malformed input: a bad value is logged and
/// treated as unset instead of failing the whole configuration.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
{
    let raw = match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    };
    match raw.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            warn!(value = %raw, "ignoring malformed numeric setting");
            Ok(None)
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MINDCHAT"));
        if let Ok(path) = std::env::var("MINDCHAT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Numeric env values override the file.
        if let Some(n) = parse_env("MINDCHAT_AI_MAX_TOKENS") {
            cfg.ai_max_tokens = Some(n);
        }
        if let Some(t) = parse_env("MINDCHAT_AI_TEMPERATURE") {
            cfg.ai_temperature = Some(t);
        }
        if let Some(secs) = parse_env("MINDCHAT_GENERATION_TIMEOUT_SECS") {
            cfg.generation_timeout_secs = Some(secs);
        }
        if let Some(seed) = parse_env("MINDCHAT_RNG_SEED") {
            cfg.rng_seed = Some(seed);
        }
        Ok(cfg)
    }

    /// `load`, or defaults when it fails. The API key from the environment
    /// survives the fallback.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "invalid configuration, using defaults");
            Self {
                ai_api_key: std::env::var("MINDCHAT_AI_API_KEY").ok(),
                ..Self::default()
            }
        })
    }

    /// Returns the API key if configured. Empty values count as unset.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    pub fn ai_max_tokens_or_default(&self) -> u32 {
        self.ai_max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn ai_temperature_or_default(&self) -> f32 {
        self.ai_temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(
            self.generation_timeout_secs
                .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS),
        )
    }

    /// Returns true if generation is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}
