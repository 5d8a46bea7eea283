//! Static per-industry validation rule sets
//!
//! Loaded once per industry key and never mutated at runtime.

use callscribe_domain::{ExtractedEvent, Industry};

/// Event fields an industry can require or weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    /// Event title
    Title,

    /// Customer name
    CustomerName,

    /// Customer phone number
    CustomerPhone,

    /// Address where service is needed
    ServiceAddress,

    /// Type of service requested
    ServiceType,

    /// Proposed date
    ProposedDate,
}

impl EventField {
    /// Field name as it appears in the output contract
    pub fn as_str(&self) -> &'static str {
        match self {
            EventField::Title => "title",
            EventField::CustomerName => "customer_name",
            EventField::CustomerPhone => "customer_phone",
            EventField::ServiceAddress => "service_address",
            EventField::ServiceType => "service_type",
            EventField::ProposedDate => "proposed_date",
        }
    }

    /// Whether the field carries a value on the given event
    pub fn is_present(&self, event: &ExtractedEvent) -> bool {
        match self {
            EventField::Title => !event.title.trim().is_empty(),
            EventField::CustomerName => event.customer_name.is_some(),
            EventField::CustomerPhone => event.customer_phone.is_some(),
            EventField::ServiceAddress => event.service_address.is_some(),
            EventField::ServiceType => event.service_type.is_some(),
            EventField::ProposedDate => event.proposed_date.is_some(),
        }
    }
}

/// Validation rule set for one business vertical
///
/// Read-only configuration: the engine borrows these as `&'static` and
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryRules {
    /// Industry this rule set applies to; `None` is the universal fallback
    pub industry: Option<Industry>,

    /// Fields an event must carry to be actionable without review
    pub required_fields: &'static [EventField],

    /// Fields worth emphasizing during extraction (quote amounts, addresses)
    pub high_value_fields: &'static [EventField],

    /// Lowercase phrases that force emergency urgency on substring match
    pub emergency_keywords: &'static [&'static str],

    /// Whether customer PII on an event must be human-reviewed before any
    /// automatic action (medical/legal confidentiality)
    pub confidentiality_required: bool,

    /// Business hours assumed when the caller supplies none
    pub default_business_hours: &'static str,

    /// Typical appointment length for the vertical, in minutes
    pub average_duration_minutes: u32,
}

const PLUMBING_RULES: IndustryRules = IndustryRules {
    industry: Some(Industry::Plumbing),
    required_fields: &[EventField::Title, EventField::ServiceAddress, EventField::ServiceType],
    high_value_fields: &[EventField::ServiceAddress, EventField::CustomerPhone],
    emergency_keywords: &[
        "burst pipe",
        "flooding",
        "flood",
        "gas leak",
        "sewage",
        "sewage backup",
        "no water",
        "water everywhere",
        "emergency",
    ],
    confidentiality_required: false,
    default_business_hours: "Mon-Fri 8am-6pm",
    average_duration_minutes: 90,
};

const LEGAL_RULES: IndustryRules = IndustryRules {
    industry: Some(Industry::Legal),
    required_fields: &[EventField::Title, EventField::CustomerName],
    high_value_fields: &[EventField::CustomerName, EventField::ProposedDate],
    emergency_keywords: &[
        "arrest",
        "arrested",
        "in custody",
        "court date",
        "deadline tomorrow",
        "statute of limitations",
        "subpoena",
        "restraining order",
    ],
    confidentiality_required: true,
    default_business_hours: "Mon-Fri 9am-5pm",
    average_duration_minutes: 60,
};

const MEDICAL_RULES: IndustryRules = IndustryRules {
    industry: Some(Industry::Medical),
    required_fields: &[EventField::Title, EventField::CustomerName],
    high_value_fields: &[EventField::CustomerName, EventField::CustomerPhone],
    emergency_keywords: &[
        "severe pain",
        "bleeding",
        "chest pain",
        "can't breathe",
        "cannot breathe",
        "unconscious",
        "emergency",
        "urgent",
    ],
    confidentiality_required: true,
    default_business_hours: "Mon-Fri 8am-5pm",
    average_duration_minutes: 30,
};

const REAL_ESTATE_RULES: IndustryRules = IndustryRules {
    industry: Some(Industry::RealEstate),
    required_fields: &[EventField::Title, EventField::ServiceAddress],
    high_value_fields: &[EventField::ServiceAddress, EventField::ProposedDate],
    emergency_keywords: &[
        "closing today",
        "closing tomorrow",
        "offer deadline",
        "offer expires",
        "pre-approval expiring",
        "final walkthrough today",
    ],
    confidentiality_required: false,
    default_business_hours: "Mon-Sat 9am-7pm",
    average_duration_minutes: 45,
};

const UNIVERSAL_RULES: IndustryRules = IndustryRules {
    industry: None,
    required_fields: &[EventField::Title],
    high_value_fields: &[EventField::CustomerPhone],
    emergency_keywords: &["emergency", "urgent", "right away", "as soon as possible"],
    confidentiality_required: false,
    default_business_hours: "Mon-Fri 9am-5pm",
    average_duration_minutes: 60,
};

impl IndustryRules {
    /// Rule set for an industry, or the universal fallback for `None`
    ///
    /// Unrecognized industry tags parse to `None` upstream, so unknown
    /// verticals get universal handling rather than an error.
    pub fn for_industry(industry: Option<Industry>) -> &'static IndustryRules {
        match industry {
            Some(Industry::Plumbing) => &PLUMBING_RULES,
            Some(Industry::Legal) => &LEGAL_RULES,
            Some(Industry::Medical) => &MEDICAL_RULES,
            Some(Industry::RealEstate) => &REAL_ESTATE_RULES,
            None => &UNIVERSAL_RULES,
        }
    }

    /// Universal fallback rule set
    pub fn universal() -> &'static IndustryRules {
        &UNIVERSAL_RULES
    }
}
