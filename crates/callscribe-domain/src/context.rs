//! Extraction context - optional caller-supplied prompt parameters

/// Caller metadata forwarded from the telephony layer
///
/// Informational context only: the prompt tells the model this is routing
/// metadata, never authoritative event data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    /// Number the call came from
    pub from: String,

    /// Number the call was placed to
    pub to: String,
}

/// Optional context used to parameterize prompt construction
///
/// Input-only: nothing here is persisted or echoed back in results. All
/// fields are optional; an empty context produces the same prompt as no
/// context at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionContext {
    /// Timezone the business operates in (e.g. "America/Chicago")
    pub user_timezone: Option<String>,

    /// Business location, used to disambiguate addresses
    pub user_location: Option<String>,

    /// Summaries of recent calls from the same number
    pub previous_calls: Vec<String>,

    /// Business hours description (e.g. "Mon-Fri 8am-6pm")
    pub business_hours: Option<String>,

    /// Free-text instructions from the business owner
    pub special_instructions: Option<String>,
}

impl ExtractionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the business timezone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.user_timezone = Some(timezone.into());
        self
    }

    /// Set the business location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.user_location = Some(location.into());
        self
    }

    /// Add summaries of previous calls for continuity
    pub fn with_previous_calls(mut self, calls: Vec<String>) -> Self {
        self.previous_calls = calls;
        self
    }

    /// Set the business hours description
    pub fn with_business_hours(mut self, hours: impl Into<String>) -> Self {
        self.business_hours = Some(hours.into());
        self
    }

    /// Set owner-supplied special instructions
    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    /// True when no field carries any information
    pub fn is_empty(&self) -> bool {
        self.user_timezone.is_none()
            && self.user_location.is_none()
            && self.previous_calls.is_empty()
            && self.business_hours.is_none()
            && self.special_instructions.is_none()
    }
}
