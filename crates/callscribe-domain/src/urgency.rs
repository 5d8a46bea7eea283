//! Urgency module - priority classification for extracted events

use serde::{Deserialize, Serialize};

/// Urgency level of an extracted event
///
/// Four-level priority classification driving scheduling and review policy:
/// - Low: routine, no time pressure
/// - Medium: normal scheduling window
/// - High: should be handled soon
/// - Emergency: immediate attention required
///
/// The ordering is meaningful: the rule engine may raise an event's urgency
/// but never lowers it, so `Urgency` derives `Ord` with `Emergency` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Routine, no time pressure
    Low,

    /// Normal scheduling window
    Medium,

    /// Should be handled soon
    High,

    /// Immediate attention required
    Emergency,
}

impl Urgency {
    /// Get the urgency name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Emergency => "emergency",
        }
    }

    /// Parse an urgency from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Urgency::Low),
            "medium" => Some(Urgency::Medium),
            "high" => Some(Urgency::High),
            "emergency" => Some(Urgency::Emergency),
            _ => None,
        }
    }
}

impl Default for Urgency {
    /// Events with no model-assigned urgency default to `Medium`
    fn default() -> Self {
        Urgency::Medium
    }
}

impl std::str::FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid urgency: {}", s))
    }
}
