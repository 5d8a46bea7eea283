//! Configuration for the extraction pipeline

use std::time::Duration;

use callscribe_llm::RetryPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::EventExtractor`]
///
/// The review threshold lives here rather than in the rule engine: it is
/// deployment policy owned by the caller, and flows into
/// `RuleEngine::classify` per event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum transcription length (characters)
    pub max_transcript_length: usize,

    /// Overall deadline for one extraction, retries included (seconds)
    pub request_timeout_secs: u64,

    /// Retries after the initial model attempt for transient failures
    pub max_retries: u32,

    /// Delay before the first retry (milliseconds)
    pub base_delay_ms: u64,

    /// Backoff multiplier applied per retry
    pub backoff_factor: f64,

    /// Sampling temperature; extraction wants deterministic-leaning output
    pub temperature: f32,

    /// Upper bound on completion tokens
    pub max_tokens: u32,

    /// Events scoring below this go to human review (0.0 to 1.0)
    pub human_review_threshold: f64,

    /// Maximum previous-call summaries included as prompt context
    pub context_calls_limit: usize,
}

impl Default for ExtractorConfig {
    /// Balanced defaults for typical call lengths
    fn default() -> Self {
        Self {
            max_transcript_length: 50_000,
            request_timeout_secs: 120,
            max_retries: 3,
            base_delay_ms: 500,
            backoff_factor: 2.0,
            temperature: 0.1,
            max_tokens: 2000,
            human_review_threshold: 0.6,
            context_calls_limit: 5,
        }
    }
}

impl ExtractorConfig {
    /// Realtime preset: tight deadline, fewer retries, for interactive use
    pub fn realtime() -> Self {
        Self {
            max_transcript_length: 20_000,
            request_timeout_secs: 30,
            max_retries: 1,
            base_delay_ms: 250,
            backoff_factor: 2.0,
            temperature: 0.1,
            max_tokens: 1500,
            human_review_threshold: 0.6,
            context_calls_limit: 3,
        }
    }

    /// Thorough preset: long transcripts, generous deadline and output
    pub fn thorough() -> Self {
        Self {
            max_transcript_length: 100_000,
            request_timeout_secs: 300,
            max_retries: 3,
            base_delay_ms: 1000,
            backoff_factor: 2.0,
            temperature: 0.0,
            max_tokens: 4000,
            human_review_threshold: 0.7,
            context_calls_limit: 10,
        }
    }

    /// Get the overall deadline as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Retry policy derived from the backoff knobs
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
            backoff_factor: self.backoff_factor,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_transcript_length == 0 {
            return Err("max_transcript_length must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.human_review_threshold) {
            return Err("human_review_threshold must be in [0.0, 1.0]".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be in [0.0, 2.0]".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
