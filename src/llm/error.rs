//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while calling the generation API
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key not found: set the {0} environment variable")]
    MissingCredential(String),

    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if this is a rate limit / quota error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::RateLimited { .. } => true,
            LlmError::Api { status, .. } => *status >= 500,
            LlmError::Network(_) => true,
            LlmError::MissingCredential(_) => false,
            LlmError::EmptyResponse => false,
            LlmError::InvalidResponse(_) => false,
            LlmError::Json(_) => false,
        }
    }

    /// Get the retry duration if this is a rate limit error
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            LlmError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// Human-readable message shown to the user. Rate limits get advice to
    /// wait before retrying; everything else collapses into one line.
    pub fn user_message(&self) -> String {
        match self {
            LlmError::MissingCredential(var) => format!(
                "A chave de API não foi encontrada. Configure a variável de ambiente {} antes de gerar conteúdo.",
                var
            ),
            LlmError::RateLimited { .. } => {
                "Limite de uso atingido (cota da API). Por favor, aguarde cerca de 60 segundos antes de tentar novamente ou use uma chave de API com plano pago.".to_string()
            }
            LlmError::EmptyResponse => "A IA retornou uma resposta vazia.".to_string(),
            other => format!("Erro na geração de conteúdo: {}", other),
        }
    }
}
