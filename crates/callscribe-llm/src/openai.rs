//! OpenAI-compatible chat-completions provider
//!
//! Speaks the `/chat/completions` wire format used by OpenAI, Groq, and
//! most hosted gateways. One call per invocation; retry policy lives with
//! the caller (see [`crate::retry`]), so this client maps each HTTP outcome
//! to an [`LlmError`] and nothing more.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ChatClient, ChatRequest, LlmError};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat-completion client for OpenAI-compatible APIs
pub struct OpenAiChatClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

/// One message in the chat-completions request
#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

/// Constraint on the completion output format
#[derive(Serialize)]
struct WireResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireResponseFormat>,
}

/// Response body from the chat-completions API
#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Deserialize)]
struct WireChoiceMessage {
    content: Option<String>,
}

impl OpenAiChatClient {
    /// Create a new client
    ///
    /// # Parameters
    ///
    /// - `base_url`: API base (e.g. "https://api.openai.com/v1")
    /// - `api_key`: bearer token
    /// - `model`: model identifier (e.g. "gpt-4o-mini")
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Create a client against the default OpenAI endpoint
    pub fn default_endpoint(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key, model)
    }

    /// Replace the per-request HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();
        self
    }

    fn wire_request(&self, request: &ChatRequest) -> WireRequest {
        WireRequest {
            model: self.model.clone(),
            messages: vec![
                WireMessage {
                    role: "system",
                    content: request.system_prompt.clone(),
                },
                WireMessage {
                    role: "user",
                    content: request.user_prompt.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_mode.then_some(WireResponseFormat {
                format_type: "json_object",
            }),
        }
    }
}

#[async_trait::async_trait]
impl ChatClient for OpenAiChatClient {
    async fn chat(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.wire_request(request);

        debug!(model = %self.model, url = %url, "sending chat-completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }
        if status.is_server_error() {
            return Err(LlmError::Server {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let payload: WireResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse body: {}", e)))?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("missing completion content".to_string()))
    }
}
