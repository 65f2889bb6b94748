use secrecy::Secret;
use service_core::config::{self as core_config, optional_env};
use service_core::error::AppError;

/// Model used for every completion unless `GROQ_MODEL` says otherwise.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// OpenAI-compatible Groq endpoint root.
pub const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct BfhlConfig {
    pub common: core_config::Config,
    /// Operator email echoed in every success envelope. Left unset when the
    /// environment does not provide it; responses then omit the field.
    pub official_email: Option<String>,
    pub groq: GroqSettings,
}

#[derive(Debug, Clone)]
pub struct GroqSettings {
    /// Empty when `GROQ_API_KEY` is missing; completions then fail with the
    /// sentinel rather than blocking startup.
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
}

impl BfhlConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Ok(Self::from_common(common))
    }

    fn from_common(common: core_config::Config) -> Self {
        BfhlConfig {
            common,
            official_email: optional_env("OFFICIAL_EMAIL"),
            groq: GroqSettings {
                api_key: Secret::new(optional_env("GROQ_API_KEY").unwrap_or_default()),
                model: optional_env("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
                api_base: optional_env("GROQ_API_BASE")
                    .unwrap_or_else(|| DEFAULT_GROQ_API_BASE.to_string()),
            },
        }
    }
}

impl GroqSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GROQ_MODEL.to_string(),
            api_base: DEFAULT_GROQ_API_BASE.to_string(),
        }
    }
}
