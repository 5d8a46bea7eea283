//! Error types for the extraction pipeline

use callscribe_llm::LlmError;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Everything surfaced by [`crate::EventExtractor::extract`] is terminal:
/// transient provider failures (429, 5xx, transport) are absorbed by the
/// retry loop, and a non-JSON completion gets its one extra attempt before
/// showing up here. [`ExtractorError::is_retryable`] therefore reports
/// `false` for every variant; no further automatic action will help.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Transcription was empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transcription exceeds the configured maximum length
    #[error("Transcript too long: {0} chars (max: {1})")]
    TranscriptTooLong(usize, usize),

    /// Provider failed after the retry budget was exhausted
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Model returned content that is not parseable JSON
    #[error("Response parsing failed: {0}")]
    ResponseParsing(String),

    /// Parsed JSON does not have the expected result shape
    ///
    /// Indicates prompt/schema drift rather than a transient model slip;
    /// logged loudly at the call site.
    #[error("Malformed result: {0}")]
    MalformedResult(String),

    /// Overall extraction deadline elapsed
    #[error("Extraction timeout")]
    Timeout,

    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Whether the caller could succeed by simply trying again
    ///
    /// Always `false`: retryable conditions never escape the pipeline's
    /// internal retry loop, so whatever reaches the caller needs a changed
    /// input, a fixed prompt, or manual review instead of another attempt.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
