use crate::error::{GenerationError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Default chat endpoint (Groq, OpenAI-compatible)
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default generation model
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// A single chat completion request
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Optional system message
    pub system: Option<String>,

    /// User message
    pub prompt: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Completion token budget
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Request with no system message and the common 0.7 temperature
    #[must_use]
    pub fn user(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            temperature: 0.7,
            max_tokens,
        }
    }
}

/// Boundary trait for chat-completion backends.
///
/// The studio is generic over this trait; tests drive it with a scripted
/// stub and production uses [`OpenAiChatClient`].
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}

/// Chat client for any OpenAI-compatible endpoint.
///
/// Defaults target Groq; the base URL and model are overridable so the same
/// client speaks to OpenAI, local servers, or anything wire-compatible.
pub struct OpenAiChatClient {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiChatClient {
    /// Client for the Groq endpoint, keyed from `GROQ_API_KEY`
    pub fn groq() -> Result<Self> {
        let api_key = std::env::var(GROQ_API_KEY_VAR)
            .map_err(|_| GenerationError::ApiKeyMissing(GROQ_API_KEY_VAR))?;
        Ok(Self::new(api_key, GROQ_BASE_URL, DEFAULT_MODEL))
    }

    /// Client for an arbitrary OpenAI-compatible endpoint
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Model identifier this client sends
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": request.prompt }));

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        let url = format!("{}/chat/completions", self.base_url);
        log::debug!("Chat completion via {url} (model {})", self.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or(GenerationError::EmptyResponse)
    }
}
