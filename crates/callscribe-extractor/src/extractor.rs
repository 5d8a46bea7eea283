//! Core extraction pipeline

use std::sync::Arc;
use std::time::Instant;

use callscribe_domain::ExtractionResult;
use callscribe_llm::{retry_with_backoff, ChatClient, ChatRequest, LlmError};
use callscribe_rules::{IndustryRules, RuleEngine};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser;
use crate::request::{build_prompts, ExtractionRequest};

/// Converts call transcriptions into classified, confidence-scored events
///
/// Dependencies arrive through the constructor: the chat client and the
/// configuration are explicit parameters, never process-wide state, so the
/// pipeline stays independently testable. One `extract` call performs one
/// logical model round trip (retries included) and no other I/O.
pub struct EventExtractor<C>
where
    C: ChatClient,
{
    client: Arc<C>,
    config: ExtractorConfig,
}

impl<C> EventExtractor<C>
where
    C: ChatClient + 'static,
{
    /// Create a new extractor from a chat client and configuration
    pub fn new(client: C, config: ExtractorConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    /// Extract events from one call transcription
    ///
    /// The whole call (prompt assembly, the model round trip with its
    /// retries, validation, rule classification) runs under the
    /// configured overall deadline. Dropping the returned future cancels
    /// any in-flight retry loop; no attempt starts after cancellation.
    pub async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractorError> {
        let start = Instant::now();

        if request.transcription.len() > self.config.max_transcript_length {
            return Err(ExtractorError::TranscriptTooLong(
                request.transcription.len(),
                self.config.max_transcript_length,
            ));
        }

        let prompts = build_prompts(&request, &self.config)?;
        let industry = request.parsed_industry();

        info!(
            industry = industry.map(|i| i.as_str()).unwrap_or("universal"),
            transcript_len = request.transcription.len(),
            "starting extraction"
        );
        debug!(
            system_prompt_len = prompts.system_prompt.len(),
            user_prompt_len = prompts.user_prompt.len(),
            "prompts assembled"
        );

        let chat_request = ChatRequest::new(prompts.system_prompt, prompts.user_prompt)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        let payload = timeout(self.config.request_timeout(), self.call_model(&chat_request))
            .await
            .map_err(|_| ExtractorError::Timeout)??;

        let validated = parser::validate(&payload)?;
        debug!(events = validated.events.len(), "validated model response");

        let rules = IndustryRules::for_industry(industry);
        let mut events = validated.events;
        for event in &mut events {
            let classification =
                RuleEngine::classify(event, rules, self.config.human_review_threshold);
            if classification.urgency != event.urgency {
                debug!(
                    event = %event.id,
                    from = event.urgency.as_str(),
                    to = classification.urgency.as_str(),
                    "urgency raised by rule engine"
                );
            }
            event.urgency = classification.urgency;
            event.needs_review = classification.needs_review;
        }

        let result = ExtractionResult::new(
            events,
            validated.call_summary,
            validated.call_topic,
            validated.industry_detected,
            start.elapsed().as_millis() as u64,
        );

        info!(
            events = result.events.len(),
            total_confidence = result.total_confidence,
            elapsed_ms = result.processing_time_ms,
            "extraction complete"
        );

        Ok(result)
    }

    /// One logical model call: transient failures absorbed by the retry
    /// loop, plus a single extra attempt when the content is not JSON
    async fn call_model(&self, request: &ChatRequest) -> Result<Value, ExtractorError> {
        let policy = self.config.retry_policy();

        let content =
            retry_with_backoff(&policy, LlmError::is_retryable, || self.client.chat(request))
                .await?;

        match parser::parse_response(&content) {
            Ok(payload) => Ok(payload),
            Err(parse_error) => {
                // The model may self-correct, so one extra attempt is
                // allowed before the parse failure is surfaced
                warn!(error = %parse_error, "model returned non-JSON content, retrying once");

                let content = retry_with_backoff(&policy, LlmError::is_retryable, || {
                    self.client.chat(request)
                })
                .await?;

                parser::parse_response(&content)
            }
        }
    }
}
