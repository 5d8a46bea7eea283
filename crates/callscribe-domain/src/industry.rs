//! Industry module - business verticals with dedicated extraction handling

/// Supported business verticals
///
/// Each industry carries its own prompt vocabulary and validation rules.
/// The set is closed: dispatch is by enum, not by free-form string. Tags
/// that don't parse fall back to universal handling, which is a policy
/// choice rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    /// Plumbing and home services
    Plumbing,

    /// Legal practices
    Legal,

    /// Medical and dental offices
    Medical,

    /// Real estate agencies
    RealEstate,
}

impl Industry {
    /// All supported industries
    pub const ALL: [Industry; 4] = [
        Industry::Plumbing,
        Industry::Legal,
        Industry::Medical,
        Industry::RealEstate,
    ];

    /// Get the industry tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Plumbing => "plumbing",
            Industry::Legal => "legal",
            Industry::Medical => "medical",
            Industry::RealEstate => "real_estate",
        }
    }

    /// Parse an industry from a free-form tag
    ///
    /// Case-insensitive and tolerant of common spellings
    /// ("real estate", "real_estate", "realestate"). Returns `None` for
    /// anything unrecognized; callers treat that as "universal".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plumbing" => Some(Industry::Plumbing),
            "legal" => Some(Industry::Legal),
            "medical" => Some(Industry::Medical),
            "real_estate" | "real estate" | "realestate" => Some(Industry::RealEstate),
            _ => None,
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
