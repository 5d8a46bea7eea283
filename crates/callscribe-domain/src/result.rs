//! Extraction result - the aggregate response for one call

use serde::{Deserialize, Serialize};

use crate::confidence;
use crate::event::ExtractedEvent;

/// The aggregate extraction response for a single call recording
///
/// Invariants:
/// - `total_confidence` is in [0, 1] and equals the arithmetic mean of
///   event confidence scores (0.0 when `events` is empty)
/// - `events` preserves the order the model produced them in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Ordered candidate events found in the call
    pub events: Vec<ExtractedEvent>,

    /// One-paragraph summary of the call
    pub call_summary: String,

    /// Short topic label for the call
    pub call_topic: String,

    /// Industry the model inferred from the conversation, if any
    pub industry_detected: Option<String>,

    /// Wall-clock time spent on the extraction, in milliseconds
    pub processing_time_ms: u64,

    /// Mean of event confidence scores, 0.0 when there are no events
    pub total_confidence: f64,
}

impl ExtractionResult {
    /// Build a result from validated events and call-level fields
    ///
    /// Computes `total_confidence` from the events so the invariant holds by
    /// construction.
    pub fn new(
        events: Vec<ExtractedEvent>,
        call_summary: String,
        call_topic: String,
        industry_detected: Option<String>,
        processing_time_ms: u64,
    ) -> Self {
        let scores: Vec<f64> = events.iter().map(|e| e.confidence_score).collect();
        let total_confidence = confidence::mean(&scores);

        Self {
            events,
            call_summary,
            call_topic,
            industry_detected,
            processing_time_ms,
            total_confidence,
        }
    }

    /// True when the call produced no candidate events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
