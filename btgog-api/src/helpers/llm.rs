use crate::config::GeminiConfig;
use btgog_llm_sdk::client::LlmClient;
use btgog_llm_sdk::gemini::GeminiClient;
use std::env;
use std::sync::Arc;
use std::time::Duration;

/// Environment variables checked for the Gemini credential, in priority order
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Resolve the Gemini credential from the process environment, then the config file.
pub fn resolve_api_key(config: &GeminiConfig) -> Option<String> {
    resolve_api_key_with(config, |name| env::var(name).ok())
}

pub fn resolve_api_key_with<F>(config: &GeminiConfig, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .chain(config.api_key.clone())
        .find(|key| !key.trim().is_empty())
}

pub fn create_llm_client(
    config: &GeminiConfig,
    api_key: String,
) -> anyhow::Result<Arc<dyn LlmClient>> {
    let mut client = GeminiClient::new(api_key)?
        .with_timeout(Duration::from_secs(config.request_timeout_secs))?;

    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url);
    }

    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: key.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_env_overrides_config() {
        let config = config_with_key(Some("file-key"));
        let key = resolve_api_key_with(&config, |name| {
            (name == "GEMINI_API_KEY").then(|| "env-key".to_string())
        });
        assert_eq!(key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_api_key_fallback_var() {
        let config = config_with_key(None);
        let key = resolve_api_key_with(&config, |name| {
            (name == "API_KEY").then(|| "generic-key".to_string())
        });
        assert_eq!(key.as_deref(), Some("generic-key"));
    }

    #[test]
    fn test_config_key_used_without_env() {
        let config = config_with_key(Some("file-key"));
        let key = resolve_api_key_with(&config, |_| None);
        assert_eq!(key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_blank_keys_are_ignored() {
        let config = config_with_key(Some("  "));
        let key = resolve_api_key_with(&config, |_| Some(String::new()));
        assert!(key.is_none());
    }

    #[test]
    fn test_create_client() {
        let config = GeminiConfig {
            base_url: Some("http://localhost:4000".to_string()),
            request_timeout_secs: 5,
            ..Default::default()
        };
        let client = create_llm_client(&config, "test-key".to_string()).unwrap();
        assert_eq!(client.provider_name(), "google");
    }

    #[test]
    fn test_create_client_empty_key() {
        assert!(create_llm_client(&GeminiConfig::default(), String::new()).is_err());
    }
}
