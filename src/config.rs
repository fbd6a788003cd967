use dotenv::dotenv;
use std::env;
use thiserror::Error;

pub const WEAVIATE_URL_ENV_VAR: &str = "WEAVIATE_URL";
pub const WEAVIATE_API_KEY_ENV_VAR: &str = "WEAVIATE_API_KEY";
pub const EMBEDDING_MODEL_ENV_VAR: &str = "EMBEDDING_MODEL";

pub const DEFAULT_CSV_PATH: &str = "resources.csv";
pub const DEFAULT_CLASS_NAME: &str = "AidProgram";
pub const DEFAULT_EMBEDDING_MODEL: &str = "minishlab/potion-base-8M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable not set: {0}")]
    MissingVar(String),
}

/// Settings read from the process environment (and `.env`, when present).
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub weaviate_url: Option<String>,
    pub weaviate_api_key: Option<String>,
    pub embedding_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            weaviate_url: non_blank(WEAVIATE_URL_ENV_VAR),
            weaviate_api_key: non_blank(WEAVIATE_API_KEY_ENV_VAR),
            embedding_model: non_blank(EMBEDDING_MODEL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
        }
    }

    pub fn require_weaviate_url(&self) -> Result<&str, ConfigError> {
        self.weaviate_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar(WEAVIATE_URL_ENV_VAR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_reads_all_vars() {
        let config = Config::from_lookup(lookup_from(&[
            (WEAVIATE_URL_ENV_VAR, "https://demo.weaviate.network"),
            (WEAVIATE_API_KEY_ENV_VAR, "secret"),
            (EMBEDDING_MODEL_ENV_VAR, "minishlab/potion-base-32M"),
        ]));
        assert_eq!(config.require_weaviate_url(), Ok("https://demo.weaviate.network"));
        assert_eq!(config.weaviate_api_key.as_deref(), Some("secret"));
        assert_eq!(config.embedding_model, "minishlab/potion-base-32M");
    }

    #[test]
    fn test_config_defaults_and_blank_values() {
        let config = Config::from_lookup(lookup_from(&[(WEAVIATE_API_KEY_ENV_VAR, "   ")]));
        assert_eq!(config.weaviate_api_key, None);
        assert_eq!(config.embedding_model, DEFAULT_EMBEDDING_MODEL);
        assert_eq!(
            config.require_weaviate_url(),
            Err(ConfigError::MissingVar(WEAVIATE_URL_ENV_VAR.to_string()))
        );
    }
}
