//! Callscribe Extractor
//!
//! Converts business-call transcriptions into structured, calendar-worthy
//! events using an LLM, then applies per-industry urgency and review rules.
//!
//! # Architecture
//!
//! ```text
//! Transcription → PromptBuilder → ChatClient → Validator → RuleEngine → ExtractionResult
//! ```
//!
//! The pipeline is a single-pass pure transformation around one outbound
//! model call. Persistence, delivery, and any event lifecycle belong to the
//! caller.
//!
//! # Key Features
//!
//! - **Industry-aware prompts**: plumbing, legal, medical, and real-estate
//!   verticals get dedicated vocabulary and urgency heuristics; anything
//!   else falls back to the universal prompt
//! - **Bounded model calls**: deterministic-leaning sampling, JSON-object
//!   output contract, exponential-backoff retries for transient failures
//! - **Tolerant validation**: missing fields get defaults, confidence
//!   scores are clamped into [0, 1], malformed shapes fail loudly
//! - **Safety overrides**: emergency keywords force emergency urgency;
//!   confidential industries flag PII-bearing events for human review
//!
//! # Example Usage
//!
//! ```no_run
//! use callscribe_extractor::{EventExtractor, ExtractorConfig, ExtractionRequest};
//! use callscribe_llm::OpenAiChatClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiChatClient::default_endpoint("api-key", "gpt-4o-mini");
//! let extractor = EventExtractor::new(client, ExtractorConfig::default());
//!
//! let request = ExtractionRequest::new(
//!     "Hi, my kitchen sink is leaking. Could someone come by tomorrow morning? \
//!      I'm at 123 Main Street, name's Dana.",
//! )
//! .with_industry("plumbing");
//!
//! let result = extractor.extract(request).await?;
//!
//! println!("Events: {}", result.events.len());
//! println!("Confidence: {:.2}", result.total_confidence);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod request;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::EventExtractor;
pub use parser::{parse_response, validate, ValidatedResponse};
pub use prompt::PromptBuilder;
pub use request::{ExtractionPrompts, ExtractionRequest};
