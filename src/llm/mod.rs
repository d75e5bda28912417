//! Generation API client
//!
//! One provider, one operation: resolved prompt text in, generated
//! markdown out, or an [`LlmError`]. The caller never configures the
//! persona or sampling parameters per call.

use tracing::debug;

mod error;
mod gemini;

pub use error::LlmError;
pub use gemini::{GeminiClient, system_instruction};

use crate::config::LlmConfig;

/// Create a generation client based on the provider specified in config
///
/// Currently only "gemini" is supported; anything else is a config error.
pub fn create_client(config: &LlmConfig) -> Result<GeminiClient, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => GeminiClient::from_config(config),
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown provider: '{}'. Supported: gemini",
            other
        ))),
    }
}
