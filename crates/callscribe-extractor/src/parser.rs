//! Parse and validate raw model output into typed results
//!
//! Two failure classes are kept apart deliberately: content that is not
//! JSON at all ([`ExtractorError::ResponseParsing`], the model may
//! self-correct on a second attempt) versus JSON that parsed but lacks the
//! expected shape ([`ExtractorError::MalformedResult`], prompt/schema drift
//! that no retry will fix).

use callscribe_domain::{confidence, EventId, EventType, ExtractedEvent, Urgency};
use serde_json::Value;
use tracing::warn;

use crate::error::ExtractorError;

/// Call-level fields and events recovered from one model response
#[derive(Debug, Clone)]
pub struct ValidatedResponse {
    /// Validated events, in model order
    pub events: Vec<ExtractedEvent>,

    /// Call summary, empty when the model omitted it
    pub call_summary: String,

    /// Call topic label, empty when the model omitted it
    pub call_topic: String,

    /// Industry the model inferred, if any
    pub industry_detected: Option<String>,
}

/// Parse raw model output into JSON
///
/// Model output is supposed to be a bare JSON object, but models sometimes
/// wrap it in markdown fences or surround it with prose; both are stripped
/// before parsing.
pub fn parse_response(response: &str) -> Result<Value, ExtractorError> {
    let json_str = extract_json(response)?;

    serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::ResponseParsing(format!("JSON parse error: {}", e)))
}

/// Extract the JSON payload from model output
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return Err(ExtractorError::ResponseParsing(
            "empty response".to_string(),
        ));
    }

    // Markdown code fences: drop the first and last lines
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::ResponseParsing(
                "empty code block".to_string(),
            ));
        }
        return Ok(lines[1..lines.len().saturating_sub(1)].join("\n"));
    }

    // Prose around a JSON object: take the outermost braces
    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
            if start < end {
                return Ok(trimmed[start..=end].to_string());
            }
        }
        return Err(ExtractorError::ResponseParsing(
            "no JSON object found in response".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

/// Validate parsed JSON into events and call-level fields
///
/// A missing or non-array `events` key fails; everything below that level
/// is defaulted, never fatal. Event entries that are not objects are
/// skipped with a warning rather than sinking the whole response.
pub fn validate(payload: &Value) -> Result<ValidatedResponse, ExtractorError> {
    let obj = payload.as_object().ok_or_else(|| {
        ExtractorError::MalformedResult("expected a JSON object at the top level".to_string())
    })?;

    let raw_events = obj
        .get("events")
        .ok_or_else(|| ExtractorError::MalformedResult("missing 'events' key".to_string()))?
        .as_array()
        .ok_or_else(|| ExtractorError::MalformedResult("'events' is not an array".to_string()))?;

    let mut events = Vec::with_capacity(raw_events.len());
    for (idx, raw_event) in raw_events.iter().enumerate() {
        match validate_event(raw_event) {
            Some(event) => events.push(event),
            None => {
                warn!(index = idx, "skipping non-object event entry");
            }
        }
    }

    Ok(ValidatedResponse {
        events,
        call_summary: string_or_default(obj.get("call_summary")),
        call_topic: string_or_default(obj.get("call_topic")),
        industry_detected: opt_string(obj.get("industry_detected")),
    })
}

/// Normalize one raw event entry, filling defaults for anything missing
fn validate_event(raw: &Value) -> Option<ExtractedEvent> {
    let obj = raw.as_object()?;

    let id = opt_string(obj.get("id"))
        .and_then(|s| EventId::from_string(&s).ok())
        .unwrap_or_default();

    let event_type = opt_string(obj.get("type"))
        .and_then(|s| EventType::parse(&s))
        .unwrap_or_default();

    let urgency = opt_string(obj.get("urgency"))
        .and_then(|s| Urgency::parse(&s))
        .unwrap_or_default();

    let confidence_score = match obj.get("confidence_score").and_then(Value::as_f64) {
        Some(score) => confidence::clamp(score),
        None => confidence::DEFAULT_CONFIDENCE,
    };

    let duration_minutes = obj
        .get("duration_minutes")
        .and_then(Value::as_u64)
        .map(|d| d.min(u32::MAX as u64) as u32);

    Some(ExtractedEvent {
        id,
        event_type,
        title: string_or_default(obj.get("title")),
        description: string_or_default(obj.get("description")),
        proposed_date: opt_string(obj.get("proposed_date")),
        proposed_time: opt_string(obj.get("proposed_time")),
        duration_minutes,
        urgency,
        customer_name: opt_string(obj.get("customer_name")),
        customer_phone: opt_string(obj.get("customer_phone")),
        customer_email: opt_string(obj.get("customer_email")),
        service_address: opt_string(obj.get("service_address")),
        service_type: opt_string(obj.get("service_type")),
        estimated_price: price_string(obj.get("estimated_price")),
        confidence_score,
        extraction_notes: opt_string(obj.get("extraction_notes")),
        needs_review: false,
    })
}

fn opt_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(|s| s.to_string())
}

fn string_or_default(value: Option<&Value>) -> String {
    opt_string(value).unwrap_or_default()
}

/// Prices come back as strings or bare numbers; keep both
fn price_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_str(response: &str) -> Result<ValidatedResponse, ExtractorError> {
        validate(&parse_response(response)?)
    }

    #[test]
    fn test_parse_valid_response() {
        let response = r#"{
            "events": [
                {
                    "type": "service_call",
                    "title": "Burst pipe repair",
                    "description": "Basement flooding at customer home",
                    "urgency": "emergency",
                    "service_address": "123 Main St",
                    "confidence_score": 0.92
                }
            ],
            "call_summary": "Customer reported a burst pipe",
            "call_topic": "emergency plumbing",
            "industry_detected": "plumbing"
        }"#;

        let validated = validate_str(response).unwrap();
        assert_eq!(validated.events.len(), 1);
        assert_eq!(validated.events[0].event_type, EventType::ServiceCall);
        assert_eq!(validated.events[0].urgency, Urgency::Emergency);
        assert_eq!(validated.industry_detected.as_deref(), Some("plumbing"));
    }

    #[test]
    fn test_parse_markdown_fenced_response() {
        let response = "```json\n{\"events\": [], \"call_summary\": \"s\", \"call_topic\": \"t\"}\n```";

        let validated = validate_str(response).unwrap();
        assert!(validated.events.is_empty());
        assert_eq!(validated.call_summary, "s");
    }

    #[test]
    fn test_parse_json_embedded_in_prose() {
        let response = "Here is the extraction:\n{\"events\": []}\nLet me know if you need more.";

        let validated = validate_str(response).unwrap();
        assert!(validated.events.is_empty());
    }

    #[test]
    fn test_non_json_is_parsing_error() {
        let result = parse_response("I could not process this call.");
        assert!(matches!(result, Err(ExtractorError::ResponseParsing(_))));
    }

    #[test]
    fn test_empty_response_is_parsing_error() {
        let result = parse_response("   ");
        assert!(matches!(result, Err(ExtractorError::ResponseParsing(_))));
    }

    #[test]
    fn test_missing_events_is_malformed() {
        let result = validate_str(r#"{"call_summary": "no events key"}"#);
        assert!(matches!(result, Err(ExtractorError::MalformedResult(_))));
    }

    #[test]
    fn test_events_not_array_is_malformed() {
        let result = validate_str(r#"{"events": "nope"}"#);
        assert!(matches!(result, Err(ExtractorError::MalformedResult(_))));
    }

    #[test]
    fn test_top_level_array_is_malformed() {
        let result = validate_str(r#"[{"title": "event"}]"#);
        assert!(matches!(result, Err(ExtractorError::MalformedResult(_))));
    }

    #[test]
    fn test_empty_events_is_not_an_error() {
        let validated = validate_str(r#"{"events": []}"#).unwrap();
        assert!(validated.events.is_empty());
    }

    #[test]
    fn test_missing_optional_fields_get_defaults() {
        let validated = validate_str(r#"{"events": [{}]}"#).unwrap();
        let event = &validated.events[0];

        assert_eq!(event.event_type, EventType::Appointment);
        assert_eq!(event.urgency, Urgency::Medium);
        assert_eq!(event.confidence_score, confidence::DEFAULT_CONFIDENCE);
        assert!(event.title.is_empty());
        assert!(event.proposed_date.is_none());
        assert!(event.customer_name.is_none());
    }

    #[test]
    fn test_unknown_type_and_urgency_fall_back() {
        let validated =
            validate_str(r#"{"events": [{"type": "party", "urgency": "whenever"}]}"#).unwrap();
        let event = &validated.events[0];

        assert_eq!(event.event_type, EventType::Appointment);
        assert_eq!(event.urgency, Urgency::Medium);
    }

    #[test]
    fn test_confidence_clamped_from_negative() {
        let validated = validate_str(r#"{"events": [{"confidence_score": -5}]}"#).unwrap();
        assert_eq!(validated.events[0].confidence_score, 0.0);
    }

    #[test]
    fn test_confidence_clamped_from_above_one() {
        let validated = validate_str(r#"{"events": [{"confidence_score": 3.2}]}"#).unwrap();
        assert_eq!(validated.events[0].confidence_score, 1.0);
    }

    #[test]
    fn test_non_numeric_confidence_defaults() {
        let validated = validate_str(r#"{"events": [{"confidence_score": "high"}]}"#).unwrap();
        assert_eq!(
            validated.events[0].confidence_score,
            confidence::DEFAULT_CONFIDENCE
        );
    }

    #[test]
    fn test_non_object_event_entries_skipped() {
        let validated =
            validate_str(r#"{"events": [{"title": "real"}, "garbage", 42]}"#).unwrap();

        assert_eq!(validated.events.len(), 1);
        assert_eq!(validated.events[0].title, "real");
    }

    #[test]
    fn test_numeric_price_stringified() {
        let validated = validate_str(r#"{"events": [{"estimated_price": 450}]}"#).unwrap();
        assert_eq!(validated.events[0].estimated_price.as_deref(), Some("450"));
    }

    #[test]
    fn test_model_supplied_id_preserved() {
        let id = EventId::new().to_string();
        let response = format!(r#"{{"events": [{{"id": "{}"}}]}}"#, id);

        let validated = validate_str(&response).unwrap();
        assert_eq!(validated.events[0].id.to_string(), id);
    }

    #[test]
    fn test_invalid_id_regenerated() {
        let validated = validate_str(r#"{"events": [{"id": "not-a-uuid"}]}"#).unwrap();
        // A fresh id was generated instead of failing
        assert_eq!(validated.events[0].id.to_string().len(), 36);
    }
}
