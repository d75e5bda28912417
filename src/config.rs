//! Configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation API configuration
    pub llm: LlmConfig,

    /// Export defaults
    pub export: ExportConfig,

    /// Interface timing knobs
    pub ui: UiConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks that the API credential is present. Call this early in
    /// startup to fail fast with a clear setup error instead of failing on
    /// the first generation attempt.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .contentstudio.yml
        let local_config = PathBuf::from(".contentstudio.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/contentstudio/contentstudio.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("contentstudio").join("contentstudio.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Generation API configuration
///
/// Sampling parameters are fixed per call by design: the persona prompt is
/// tuned for these values and they are not exposed in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-output-tokens")]
    pub max_output_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Sampling temperature
    pub temperature: f64,

    /// Nucleus sampling threshold
    #[serde(rename = "top-p")]
    pub top_p: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_output_tokens: 8192,
            timeout_ms: 120_000,
            temperature: 0.8,
            top_p: 0.95,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported artifacts are written to
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Interface timing knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (~30 FPS)
    #[serde(rename = "tick-ms")]
    pub tick_ms: u64,

    /// Status ticker rotation interval while a request is in flight
    #[serde(rename = "ticker-ms")]
    pub ticker_ms: u64,

    /// How long the "copied" acknowledgment stays visible
    #[serde(rename = "copied-ack-ms")]
    pub copied_ack_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 33,
            ticker_ms: 2500,
            copied_ack_ms: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.ui.ticker_ms, 2500);
        assert_eq!(config.export.dir, PathBuf::from("."));
    }

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();

        assert!(config.model.contains("gemini"));
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.temperature, 0.8);
        assert_eq!(config.top_p, 0.95);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: gemini
  model: gemini-pro
  api-key-env: MY_API_KEY
  base-url: https://api.example.com
  max-output-tokens: 4096
  timeout-ms: 60000
  temperature: 0.5
  top-p: 0.9

export:
  dir: /tmp/exports

ui:
  ticker-ms: 1000
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "gemini-pro");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.llm.max_output_tokens, 4096);
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.export.dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.ui.ticker_ms, 1000);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: gemini-exp
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.llm.model, "gemini-exp");

        // Defaults for unspecified
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.ui.copied_ack_ms, 2000);
    }

    #[test]
    #[serial]
    fn test_validate_requires_api_key() {
        let mut config = Config::default();
        config.llm.api_key_env = "CONTENTSTUDIO_TEST_KEY".to_string();

        unsafe {
            std::env::remove_var("CONTENTSTUDIO_TEST_KEY");
        }
        assert!(config.validate().is_err());

        unsafe {
            std::env::set_var("CONTENTSTUDIO_TEST_KEY", "abc123");
        }
        assert!(config.validate().is_ok());

        unsafe {
            std::env::remove_var("CONTENTSTUDIO_TEST_KEY");
        }
    }
}
