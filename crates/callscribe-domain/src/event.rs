//! Event module - candidate calendar events extracted from call transcripts

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::confidence;
use crate::urgency::Urgency;

/// Unique identifier for an extracted event, based on UUIDv7
///
/// UUIDv7 gives chronological sortability and coordination-free generation,
/// which matters when many extractions run concurrently. Serialized as the
/// canonical hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u128);

impl EventId {
    /// Generate a new UUIDv7-based EventId
    ///
    /// # Examples
    ///
    /// ```
    /// use callscribe_domain::EventId;
    ///
    /// let id = EventId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an EventId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an EventId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for EventId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        EventId::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Kind of calendar-worthy event found in a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A scheduled appointment
    Appointment,

    /// An on-site service call
    ServiceCall,

    /// A general meeting
    Meeting,

    /// A consultation session
    Consultation,

    /// A quote or estimate request
    Quote,

    /// A follow-up contact
    FollowUp,
}

impl EventType {
    /// Get the event type tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Appointment => "appointment",
            EventType::ServiceCall => "service_call",
            EventType::Meeting => "meeting",
            EventType::Consultation => "consultation",
            EventType::Quote => "quote",
            EventType::FollowUp => "follow_up",
        }
    }

    /// Parse an event type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "appointment" => Some(EventType::Appointment),
            "service_call" => Some(EventType::ServiceCall),
            "meeting" => Some(EventType::Meeting),
            "consultation" => Some(EventType::Consultation),
            "quote" => Some(EventType::Quote),
            "follow_up" => Some(EventType::FollowUp),
            _ => None,
        }
    }
}

impl Default for EventType {
    /// Events with no model-assigned type default to `Appointment`
    fn default() -> Self {
        EventType::Appointment
    }
}

/// One candidate calendar event extracted from a call transcript
///
/// Immutable once returned: any pending/confirmed lifecycle belongs to the
/// caller, not this crate. Optional fields stay `None` when the transcript
/// did not mention them; `confidence_score` is always in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEvent {
    /// Unique identifier, generated when the model does not supply one
    pub id: EventId,

    /// Kind of event
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Short human-readable title
    pub title: String,

    /// Longer description of what was requested
    pub description: String,

    /// Proposed date, ISO (`2025-03-14`) or relative text (`tomorrow`)
    pub proposed_date: Option<String>,

    /// Proposed time of day
    pub proposed_time: Option<String>,

    /// Expected duration in minutes
    pub duration_minutes: Option<u32>,

    /// Priority classification (final value set by the rule engine)
    pub urgency: Urgency,

    /// Customer name if stated in the call
    pub customer_name: Option<String>,

    /// Customer phone if stated in the call
    pub customer_phone: Option<String>,

    /// Customer email if stated in the call
    pub customer_email: Option<String>,

    /// Address where service is needed
    pub service_address: Option<String>,

    /// Type of service requested
    pub service_type: Option<String>,

    /// Price estimate mentioned in the call
    pub estimated_price: Option<String>,

    /// Model certainty that this event is correct, clamped to [0, 1]
    pub confidence_score: f64,

    /// Free-text rationale from the extraction
    pub extraction_notes: Option<String>,

    /// Whether the rule engine flagged this event for human review
    #[serde(default)]
    pub needs_review: bool,
}

impl ExtractedEvent {
    /// Create a minimal event with defaults for everything optional
    ///
    /// Used by tests and by the validator when filling in skeleton events.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            event_type: EventType::default(),
            title: title.into(),
            description: description.into(),
            proposed_date: None,
            proposed_time: None,
            duration_minutes: None,
            urgency: Urgency::default(),
            customer_name: None,
            customer_phone: None,
            customer_email: None,
            service_address: None,
            service_type: None,
            estimated_price: None,
            confidence_score: confidence::DEFAULT_CONFIDENCE,
            extraction_notes: None,
            needs_review: false,
        }
    }

    /// True when any customer PII field is populated
    ///
    /// Used by confidentiality-gated industries to decide review flags.
    pub fn has_customer_pii(&self) -> bool {
        self.customer_name.is_some()
            || self.customer_phone.is_some()
            || self.customer_email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_ordering() {
        let id1 = EventId::from_value(1000);
        let id2 = EventId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_event_id_display_and_parse() {
        let id = EventId::new();
        let id_str = id.to_string();

        // Canonical UUID strings are 36 characters (8-4-4-4-12 with hyphens)
        assert_eq!(id_str.len(), 36);

        let parsed = EventId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_event_id_invalid_string() {
        assert!(EventId::from_string("not-a-valid-uuid").is_err());
        assert!(EventId::from_string("").is_err());
    }

    #[test]
    fn test_event_type_serde_snake_case() {
        let json = serde_json::to_string(&EventType::ServiceCall).unwrap();
        assert_eq!(json, "\"service_call\"");
        let back: EventType = serde_json::from_str("\"follow_up\"").unwrap();
        assert_eq!(back, EventType::FollowUp);
    }

    #[test]
    fn test_event_serializes_with_contract_field_names() {
        let event = ExtractedEvent::new("Pipe repair", "Kitchen sink leak");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "appointment");
        assert_eq!(json["urgency"], "medium");
        assert!(json["proposed_date"].is_null());
        assert!((json["confidence_score"].as_f64().unwrap() - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_has_customer_pii() {
        let mut event = ExtractedEvent::new("Consult", "Estate planning");
        assert!(!event.has_customer_pii());

        event.customer_phone = Some("+15551234567".to_string());
        assert!(event.has_customer_pii());
    }
}
