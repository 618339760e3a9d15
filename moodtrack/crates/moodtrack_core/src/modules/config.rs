use std::time::Duration;
use thiserror::Error;
use zeroize::Zeroizing;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LYRIA_MODEL: &str = "models/lyria-realtime-exp";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;
const DEFAULT_COLLECT_SECS: u64 = 10;
const DEFAULT_GRACE_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
}

/// Runtime settings for the networked parts of the pipeline.
#[derive(Clone)]
pub struct StudioConfig {
    pub api_key: Option<Zeroizing<String>>,
    pub gemini_model: String,
    pub lyria_model: String,
    pub http_timeout: Duration,
    pub collect_window: Duration,
    pub grace_period: Duration,
}

impl std::fmt::Debug for StudioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("lyria_model", &self.lyria_model)
            .field("http_timeout", &self.http_timeout)
            .field("collect_window", &self.collect_window)
            .field("grace_period", &self.grace_period)
            .finish()
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            lyria_model: DEFAULT_LYRIA_MODEL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            collect_window: Duration::from_secs(DEFAULT_COLLECT_SECS),
            grace_period: Duration::from_millis(DEFAULT_GRACE_MS),
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the process environment
    /// in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let number = |key: &str, default: u64, min: u64, max: u64| -> u64 {
            let Some(raw) = text(key) else {
                return default;
            };
            match raw.parse::<u64>() {
                Ok(v) => v.clamp(min, max),
                Err(_) => {
                    tracing::warn!(key, value = %raw, default, "unparsable setting, using default");
                    default
                }
            }
        };

        Self {
            api_key: text("GEMINI_API_KEY").map(Zeroizing::new),
            gemini_model: text("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            lyria_model: text("LYRIA_MODEL").unwrap_or_else(|| DEFAULT_LYRIA_MODEL.to_string()),
            http_timeout: Duration::from_secs(number(
                "GEMINI_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
                15,
                300,
            )),
            collect_window: Duration::from_secs(number(
                "BGM_COLLECT_SECS",
                DEFAULT_COLLECT_SECS,
                1,
                60,
            )),
            grace_period: Duration::from_millis(number("BGM_GRACE_MS", DEFAULT_GRACE_MS, 0, 10_000)),
        }
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(String::as_str)
            .ok_or(ConfigError::MissingApiKey)
    }
}
