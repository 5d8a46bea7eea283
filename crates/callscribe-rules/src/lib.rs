//! Callscribe Industry Rule Engine
//!
//! Applies per-industry validation rules to extracted events: emergency
//! keyword detection, confidentiality gating, required-field checks, and
//! the human-review decision.
//!
//! # Policy
//!
//! The engine only ever *raises* urgency. If any industry emergency keyword
//! appears in an event's text, urgency is forced to `Emergency` regardless
//! of the model's own classification. Under-classification is costly in
//! the medical, legal, and plumbing verticals, so the keyword match wins.
//!
//! The review threshold is caller-supplied configuration; nothing in this
//! crate hardcodes it.
//!
//! # Examples
//!
//! ```
//! use callscribe_domain::{ExtractedEvent, Industry, Urgency};
//! use callscribe_rules::{IndustryRules, RuleEngine};
//!
//! let mut event = ExtractedEvent::new("Burst pipe repair", "Water everywhere");
//! event.urgency = Urgency::Low;
//!
//! let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
//! let classification = RuleEngine::classify(&event, rules, 0.6);
//! assert_eq!(classification.urgency, Urgency::Emergency);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;
mod rules;

pub use engine::{Classification, ReviewTrigger, RuleEngine};
pub use rules::{EventField, IndustryRules};
