use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use crate::llm_client::LlmSettings;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Application configuration loaded from environment variables.
/// Only malformed values are errors; everything has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub jobs_data_path: PathBuf,
    /// Replacement heuristic rule table (JSON). Built-in table when unset.
    pub survey_rules_path: Option<PathBuf>,
    pub secrets_path: PathBuf,
    /// `None` selects the heuristic-only recommendation path.
    pub openai_api_key: Option<String>,
    /// Why the secrets file was skipped, when it exists but does not parse.
    /// Reported by `main` once logging is up.
    pub secrets_error: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secrets_path = PathBuf::from(env_or("SECRETS_PATH", ".secrets/secrets.toml"));
        let lookup = resolve_api_key(&secrets_path, std::env::var(API_KEY_VAR).ok());

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            jobs_data_path: PathBuf::from(env_or("JOBS_DATA_PATH", "data/jobs_data.json")),
            survey_rules_path: std::env::var("SURVEY_RULES_PATH").ok().map(PathBuf::from),
            secrets_path,
            openai_api_key: lookup.key,
            secrets_error: lookup.secrets_error,
            llm_api_url: env_or(
                "LLM_API_URL",
                "https://api.openai.com/v1/chat/completions",
            ),
            llm_model: env_or("LLM_MODEL", "gpt-3.5-turbo"),
            llm_temperature: parse_env("LLM_TEMPERATURE", 0.7)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
        })
    }

    /// LLM provider settings, or `None` when no credential is configured.
    pub fn llm_settings(&self) -> Option<LlmSettings> {
        self.openai_api_key.as_ref().map(|api_key| LlmSettings {
            api_url: self.llm_api_url.clone(),
            api_key: api_key.clone(),
            model: self.llm_model.clone(),
            temperature: self.llm_temperature,
            timeout: Duration::from_secs(self.llm_timeout_secs),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(rename = "OPENAI_API_KEY")]
    openai_api_key: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
struct ApiKeyLookup {
    key: Option<String>,
    secrets_error: Option<String>,
}

/// Secrets file first, then the environment value. Blank values count as absent.
/// A missing secrets file is normal; an unparseable one is skipped and its parse
/// error returned for the caller to report.
fn resolve_api_key(secrets_path: &Path, env_value: Option<String>) -> ApiKeyLookup {
    let (from_secrets, secrets_error) = match std::fs::read_to_string(secrets_path) {
        Ok(raw) => match api_key_from_secrets(&raw) {
            Ok(key) => (key, None),
            Err(e) => (None, Some(format!("{}: {e}", secrets_path.display()))),
        },
        Err(_) => (None, None),
    };

    let key = from_secrets
        .or(env_value)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());

    ApiKeyLookup { key, secrets_error }
}

fn api_key_from_secrets(raw: &str) -> Result<Option<String>, toml::de::Error> {
    let secrets: SecretsFile = toml::from_str(raw)?;
    Ok(secrets.openai_api_key.filter(|key| !key.trim().is_empty()))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn secrets_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_secrets_file_wins_over_environment() {
        let file = secrets_file(r#"OPENAI_API_KEY = "sk-from-secrets""#);
        let lookup = resolve_api_key(file.path(), Some("sk-from-env".to_string()));
        assert_eq!(lookup.key.as_deref(), Some("sk-from-secrets"));
        assert!(lookup.secrets_error.is_none());
    }

    #[test]
    fn test_environment_used_when_secrets_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        let lookup = resolve_api_key(&path, Some("sk-env".to_string()));
        assert_eq!(lookup.key.as_deref(), Some("sk-env"));
        assert!(lookup.secrets_error.is_none());
    }

    #[test]
    fn test_environment_used_when_secrets_file_lacks_key() {
        let file = secrets_file(r#"OTHER_SECRET = "x""#);
        let lookup = resolve_api_key(file.path(), Some("sk-env".to_string()));
        assert_eq!(lookup.key.as_deref(), Some("sk-env"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let file = secrets_file(r#"OPENAI_API_KEY = "   ""#);
        let empty = ApiKeyLookup::default();
        assert_eq!(resolve_api_key(file.path(), Some(String::new())), empty);
        assert_eq!(resolve_api_key(file.path(), None), empty);
    }

    #[test]
    fn test_malformed_secrets_file_falls_through_to_environment() {
        let file = secrets_file("OPENAI_API_KEY = ");
        let lookup = resolve_api_key(file.path(), Some("sk-env".to_string()));
        assert_eq!(lookup.key.as_deref(), Some("sk-env"));
        let reason = lookup.secrets_error.unwrap();
        assert!(reason.contains(&file.path().display().to_string()), "{reason}");
    }

    #[test]
    fn test_llm_settings_only_with_key() {
        let mut config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            jobs_data_path: PathBuf::from("data/jobs_data.json"),
            survey_rules_path: None,
            secrets_path: PathBuf::from(".secrets/secrets.toml"),
            openai_api_key: None,
            secrets_error: None,
            llm_api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            llm_model: "gpt-3.5-turbo".to_string(),
            llm_temperature: 0.7,
            llm_timeout_secs: 30,
        };
        assert!(config.llm_settings().is_none());

        config.openai_api_key = Some("sk-test".to_string());
        let settings = config.llm_settings().unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!((settings.temperature - 0.7).abs() < f32::EPSILON);
    }
}
