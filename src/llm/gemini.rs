//! Gemini generateContent API client
//!
//! Non-streaming client for the hosted generative-language API. Every call
//! carries the same system instruction (persona + formatting directives +
//! target language, parameterized only by the methodology label) and the
//! same sampling parameters; neither is user-configurable.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::LlmError;
use crate::config::LlmConfig;

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 500 | 502 | 503 | 504)
}

/// Build the fixed system instruction for a generation call.
///
/// The context label is "{methodology title} - {template label}"; the rest
/// of the instruction never varies.
pub fn system_instruction(context_label: &str) -> String {
    format!(
        "Você é um Estrategista de Conteúdo de Elite e Especialista em Marketing Digital com 20 anos de experiência, focado em crescimento viral e conversão.\n\
         \n\
         Sua tarefa é executar com perfeição a metodologia: \"{}\".\n\
         \n\
         Diretrizes de Resposta:\n\
         1. Responda estritamente em Português do Brasil.\n\
         2. Use Markdown rico: utilize tabelas para roteiros, listas com bullets para checklists, negrito para ênfase e títulos H2/H3 para organização.\n\
         3. Seja prático e direto: evite introduções longas. Vá direto ao conteúdo que o usuário pode copiar e colar.\n\
         4. Mantenha um tom profissional, porém persuasivo e disruptivo.\n\
         5. Se a metodologia envolver roteiros, especifique visual, áudio e texto na tela.",
        context_label
    )
}

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_output_tokens: u32,
    temperature: f64,
    top_p: f64,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config;
    /// its absence is the setup error surfaced before any call is made.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| LlmError::MissingCredential(config.api_key_env.clone()))?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Build the request body for the generateContent API
    fn build_request_body(&self, prompt: &str, context_label: &str) -> serde_json::Value {
        debug!(%self.model, prompt_len = prompt.len(), "build_request_body: called");
        serde_json::json!({
            "systemInstruction": {
                "parts": [{ "text": system_instruction(context_label) }],
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
            "generationConfig": {
                "temperature": self.temperature,
                "topP": self.top_p,
                "maxOutputTokens": self.max_output_tokens,
            },
        })
    }

    /// Extract the generated text from the API response
    fn parse_response(&self, api_response: GenerateResponse) -> Result<String, LlmError> {
        debug!(candidates = api_response.candidates.len(), "parse_response: called");
        let text: String = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }

    /// Run one generation call to completion.
    ///
    /// Transient transport failures retry with exponential backoff; rate
    /// limits surface immediately so the caller can show the wait advice.
    pub async fn generate(&self, prompt: &str, context_label: &str) -> Result<String, LlmError> {
        debug!(%self.model, %context_label, "generate: called");
        let url = self.endpoint();
        let body = self.build_request_body(prompt, context_label);

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!(attempt, backoff_ms = backoff, "generate: retrying after transient error");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(url.clone())
                .header("x-goog-api-key", self.api_key.clone())
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    debug!(attempt, error = %e, "generate: network error");
                    last_error = Some(LlmError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();

            if status == 429 {
                debug!("generate: rate limited (429)");
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);

                return Err(LlmError::RateLimited {
                    retry_after: Duration::from_secs(retry_after),
                });
            }

            if is_retryable_status(status) && attempt < MAX_RETRIES {
                let text = response.text().await.unwrap_or_default();
                debug!(attempt, status, "generate: retryable error");
                last_error = Some(LlmError::Api { status, message: text });
                continue;
            }

            if !response.status().is_success() {
                debug!(%status, "generate: API error");
                let text = response.text().await.unwrap_or_default();
                return Err(LlmError::Api { status, message: text });
            }

            debug!("generate: success");
            let api_response: GenerateResponse = response.json().await?;
            return self.parse_response(api_response);
        }

        Err(last_error.unwrap_or_else(|| LlmError::InvalidResponse("Max retries exceeded".to_string())))
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GeminiClient {
        GeminiClient {
            model: "gemini-3-flash-preview".to_string(),
            api_key: "test-key".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            http: Client::new(),
            max_output_tokens: 8192,
            temperature: 0.8,
            top_p: 0.95,
        }
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = test_client();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_build_request_body() {
        let client = test_client();
        let body = client.build_request_body("Gere ideias para moda", "Growth Express - Conteúdo Viral");

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Gere ideias para moda");
        assert_eq!(body["generationConfig"]["temperature"], 0.8);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 8192);

        let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(system.contains("Growth Express - Conteúdo Viral"));
        assert!(system.contains("Português do Brasil"));
    }

    #[test]
    fn test_system_instruction_embeds_label() {
        let text = system_instruction("Método BTS 🎥 - Poder dos Bastidores");
        assert!(text.contains("Método BTS 🎥 - Poder dos Bastidores"));
        assert!(text.contains("Markdown"));
    }

    #[test]
    fn test_parse_response_concatenates_parts() {
        let client = test_client();
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![
                        Part {
                            text: "## Título\n".to_string(),
                        },
                        Part {
                            text: "- item".to_string(),
                        },
                    ],
                }),
            }],
        };

        let text = client.parse_response(response).unwrap();
        assert_eq!(text, "## Título\n- item");
    }

    #[test]
    fn test_parse_response_empty_is_error() {
        let client = test_client();

        let response = GenerateResponse { candidates: vec![] };
        assert!(matches!(client.parse_response(response), Err(LlmError::EmptyResponse)));

        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![Part {
                        text: "   \n".to_string(),
                    }],
                }),
            }],
        };
        assert!(matches!(client.parse_response(response), Err(LlmError::EmptyResponse)));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(503));
        assert!(is_retryable_status(408));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(404));
    }
}
