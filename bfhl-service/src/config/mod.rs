use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct BfhlConfig {
    pub common: core_config::Config,
    /// Echoed verbatim in every success envelope.
    pub official_email: String,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

impl BfhlConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(BfhlConfig {
            common,
            official_email: get_env("OFFICIAL_EMAIL", Some("dev@example.com"), is_prod)?,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
                model: get_env("GEMINI_MODEL", Some("gemini-pro"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
