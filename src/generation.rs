use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::API_KEY_VAR;

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const OPENROUTER_MODEL: &str = "openrouter/free";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0} not set")]
    MissingCredential(&'static str),

    #[error("{0}")]
    ClientInit(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("no completion in response")]
    EmptyCompletion,
}

/// Everything needed to build a [`GenerationClient`]. Model and base URL are
/// fixed in production; they are fields so tests can point at a stub.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENROUTER_BASE_URL.to_string(),
            model: OPENROUTER_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationSettings {
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Single-prompt chat completion client against an OpenAI-compatible API.
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GenerationClient {
    pub fn new(settings: &GenerationSettings) -> Result<Self, GenerationError> {
        let api_key = settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingCredential(API_KEY_VAR))?;

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| GenerationError::ClientInit(format!("invalid API key: {e}")))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GenerationError::ClientInit(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    /// Sends `prompt` as the only user message and returns the first choice's text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![WireMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, "chat completion request");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Decode(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or(GenerationError::EmptyCompletion)
    }
}
