//! Callscribe LLM Provider Layer
//!
//! Pluggable chat-completion providers behind a single async trait.
//!
//! # Architecture
//!
//! The extraction pipeline talks to one [`ChatClient`]; this crate supplies
//! the implementations. Providers map transport and HTTP status conditions
//! into the [`LlmError`] taxonomy; the generic [`retry`] combinator decides
//! which of those are worth another attempt.
//!
//! # Providers
//!
//! - [`MockChatClient`]: deterministic, scriptable double for tests
//! - [`OpenAiChatClient`]: OpenAI-compatible chat-completions HTTP API
//!
//! # Examples
//!
//! ```
//! use callscribe_llm::{ChatClient, ChatRequest, MockChatClient};
//!
//! # async fn example() {
//! let client = MockChatClient::new(r#"{"events": []}"#);
//! let request = ChatRequest::new("system prompt", "user prompt");
//! let content = client.chat(&request).await.unwrap();
//! assert_eq!(content, r#"{"events": []}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;
pub mod retry;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiChatClient;
pub use retry::{retry_with_backoff, RetryPolicy};

/// Errors that can occur talking to a chat-completion provider
#[derive(Error, Debug, Clone)]
pub enum LlmError {
    /// Provider rejected the request with HTTP 429
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Provider failed with an HTTP 5xx status
    #[error("Provider server error (HTTP {status})")]
    Server {
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// Provider rejected the request with a non-429 4xx status
    #[error("Provider rejected request (HTTP {status}): {message}")]
    Provider {
        /// HTTP status code returned by the provider
        status: u16,
        /// Error body text from the provider
        message: String,
    },

    /// Network or connection failure before a status was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider returned a payload missing the expected completion content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Whether another attempt could plausibly succeed
    ///
    /// Rate limits, server errors, and transport failures are transient;
    /// 4xx rejections and malformed payloads are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LlmError::RateLimited | LlmError::Server { .. } | LlmError::Transport(_)
        )
    }
}

/// One chat-completion call: a system prompt, a user prompt, and sampling
/// parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// System prompt establishing the extraction contract
    pub system_prompt: String,

    /// User prompt carrying the transcript and context
    pub user_prompt: String,

    /// Sampling temperature; extraction wants deterministic-leaning output
    pub temperature: f32,

    /// Upper bound on completion tokens
    pub max_tokens: u32,

    /// Ask the provider to constrain output to a single JSON object
    pub json_mode: bool,
}

impl ChatRequest {
    /// Create a request with extraction-friendly defaults: temperature 0.1,
    /// bounded output, JSON object mode on
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: 0.1,
            max_tokens: 2000,
            json_mode: true,
        }
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the completion token bound
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Trait for chat-completion providers
///
/// The single seam between the extraction pipeline and the outside world.
/// Implementations must be safe to share across concurrent extractions.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Execute one chat-completion call and return the raw completion text
    async fn chat(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

/// Scripted response for the mock client
enum MockScript {
    Response(String),
    Error(LlmError),
}

/// Mock chat client for deterministic testing
///
/// Returns pre-configured responses without any network calls. Responses
/// can be scripted in FIFO order (including errors); once the script runs
/// dry, the default response is returned. Clones share the script and the
/// call counter.
///
/// # Examples
///
/// ```
/// use callscribe_llm::{ChatClient, ChatRequest, LlmError, MockChatClient};
///
/// # async fn example() {
/// let client = MockChatClient::new("default");
/// client.push_error(LlmError::RateLimited);
/// client.push_response("after the rate limit");
///
/// let request = ChatRequest::new("sys", "user");
/// assert!(client.chat(&request).await.is_err());
/// assert_eq!(client.chat(&request).await.unwrap(), "after the rate limit");
/// assert_eq!(client.chat(&request).await.unwrap(), "default");
/// assert_eq!(client.call_count(), 3);
/// # }
/// ```
#[derive(Clone)]
pub struct MockChatClient {
    default_response: String,
    script: Arc<Mutex<VecDeque<MockScript>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatClient {
    /// Create a mock that returns a fixed response for every call
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful response (FIFO)
    pub fn push_response(&self, response: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(MockScript::Response(response.into()));
    }

    /// Queue an error (FIFO)
    pub fn push_error(&self, error: LlmError) {
        self.script
            .lock()
            .unwrap()
            .push_back(MockScript::Error(error));
    }

    /// Number of chat calls made so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call counter
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn chat(&self, _request: &ChatRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let scripted = self.script.lock().unwrap().pop_front();
        match scripted {
            Some(MockScript::Response(response)) => Ok(response),
            Some(MockScript::Error(error)) => Err(error),
            None => Ok(self.default_response.clone()),
        }
    }
}

/// Mock client that fails every call with the same error
///
/// Useful for retry-exhaustion tests where every attempt must see the same
/// transient failure.
#[derive(Clone)]
pub struct FailingChatClient {
    error: LlmError,
    call_count: Arc<Mutex<usize>>,
}

impl FailingChatClient {
    /// Create a client that fails every call with a clone of the given error
    pub fn new(error: LlmError) -> Self {
        Self {
            error,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of chat calls made so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ChatClient for FailingChatClient {
    async fn chat(&self, _request: &ChatRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;
        Err(self.error.clone())
    }
}
