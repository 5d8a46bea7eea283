//! Urgency and review classification for extracted events

use callscribe_domain::{ExtractedEvent, Urgency};

use crate::rules::{EventField, IndustryRules};

/// Outcome of classifying one event against an industry rule set
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Final urgency: the model's classification, raised to `Emergency`
    /// when an emergency keyword matched
    pub urgency: Urgency,

    /// Whether a human must look at this event before automatic actions
    pub needs_review: bool,

    /// Why review is needed (empty when `needs_review` is false)
    pub triggers: Vec<ReviewTrigger>,
}

/// Reasons an event gets flagged for human review
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewTrigger {
    /// Confidence fell below the caller-supplied threshold
    LowConfidence {
        /// The event's confidence score
        score: f64,
        /// The threshold it was measured against
        threshold: f64,
    },

    /// Industry requires confidentiality and customer PII is populated
    ConfidentialPii,

    /// A field the industry requires is missing from the event
    MissingRequiredField(EventField),
}

/// Stateless classifier applying industry rules to one event at a time
pub struct RuleEngine;

impl RuleEngine {
    /// Classify an event against a rule set
    ///
    /// `review_threshold` is external configuration: events scoring below
    /// it are flagged for human review. Urgency can only be raised here.
    /// A keyword hit forces `Emergency` over whatever the model assigned,
    /// but an event the model already marked urgent is never demoted.
    pub fn classify(
        event: &ExtractedEvent,
        rules: &IndustryRules,
        review_threshold: f64,
    ) -> Classification {
        let mut urgency = event.urgency;

        if Self::find_emergency_keyword(event, rules).is_some() {
            urgency = urgency.max(Urgency::Emergency);
        }

        let mut triggers = Vec::new();

        if event.confidence_score < review_threshold {
            triggers.push(ReviewTrigger::LowConfidence {
                score: event.confidence_score,
                threshold: review_threshold,
            });
        }

        if rules.confidentiality_required && event.has_customer_pii() {
            triggers.push(ReviewTrigger::ConfidentialPii);
        }

        for field in rules.required_fields {
            if !field.is_present(event) {
                triggers.push(ReviewTrigger::MissingRequiredField(*field));
            }
        }

        Classification {
            urgency,
            needs_review: !triggers.is_empty(),
            triggers,
        }
    }

    /// First emergency keyword found in the event's text, if any
    ///
    /// Case-insensitive substring match over title, description, and
    /// extraction notes.
    pub fn find_emergency_keyword(
        event: &ExtractedEvent,
        rules: &IndustryRules,
    ) -> Option<&'static str> {
        let haystack = format!(
            "{} {} {}",
            event.title,
            event.description,
            event.extraction_notes.as_deref().unwrap_or("")
        )
        .to_lowercase();

        rules
            .emergency_keywords
            .iter()
            .find(|keyword| haystack.contains(*keyword))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callscribe_domain::Industry;

    fn plumbing_event(title: &str, description: &str) -> ExtractedEvent {
        let mut event = ExtractedEvent::new(title, description);
        event.service_address = Some("123 Main St".to_string());
        event.service_type = Some("pipe repair".to_string());
        event
    }

    #[test]
    fn test_emergency_keyword_forces_emergency() {
        let mut event = plumbing_event("Burst pipe repair", "Basement is flooding");
        event.urgency = Urgency::Low;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert_eq!(classification.urgency, Urgency::Emergency);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut event = plumbing_event("BURST PIPE at office", "Customer reports leak");
        event.urgency = Urgency::Medium;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert_eq!(classification.urgency, Urgency::Emergency);
    }

    #[test]
    fn test_keyword_in_extraction_notes_counts() {
        let mut event = plumbing_event("Pipe repair", "Kitchen sink");
        event.extraction_notes = Some("Caller mentioned sewage backup".to_string());
        event.urgency = Urgency::Low;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert_eq!(classification.urgency, Urgency::Emergency);
    }

    #[test]
    fn test_urgency_never_lowered() {
        // No keywords in the text, model already said emergency
        let mut event = plumbing_event("Routine inspection", "Annual checkup");
        event.urgency = Urgency::Emergency;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert_eq!(classification.urgency, Urgency::Emergency);
    }

    #[test]
    fn test_no_keyword_keeps_model_urgency() {
        let mut event = plumbing_event("Faucet replacement", "Upgrade kitchen faucet");
        event.urgency = Urgency::Medium;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert_eq!(classification.urgency, Urgency::Medium);
        assert!(!classification.needs_review);
    }

    #[test]
    fn test_low_confidence_triggers_review() {
        let mut event = plumbing_event("Faucet replacement", "Upgrade kitchen faucet");
        event.confidence_score = 0.4;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.6);

        assert!(classification.needs_review);
        assert!(classification
            .triggers
            .iter()
            .any(|t| matches!(t, ReviewTrigger::LowConfidence { .. })));
    }

    #[test]
    fn test_confidence_at_threshold_passes() {
        let mut event = plumbing_event("Faucet replacement", "Upgrade kitchen faucet");
        event.confidence_score = 0.6;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.6);

        assert!(!classification.needs_review);
    }

    #[test]
    fn test_confidential_pii_triggers_review() {
        let mut event = ExtractedEvent::new("Consultation", "Estate planning discussion");
        event.customer_name = Some("Jane Roe".to_string());
        event.confidence_score = 0.9;

        let rules = IndustryRules::for_industry(Some(Industry::Legal));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert!(classification.needs_review);
        assert!(classification
            .triggers
            .iter()
            .any(|t| matches!(t, ReviewTrigger::ConfidentialPii)));
    }

    #[test]
    fn test_pii_without_confidentiality_passes() {
        let mut event = plumbing_event("Pipe repair", "Kitchen sink leak");
        event.customer_name = Some("John Doe".to_string());
        event.confidence_score = 0.9;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert!(!classification
            .triggers
            .iter()
            .any(|t| matches!(t, ReviewTrigger::ConfidentialPii)));
    }

    #[test]
    fn test_missing_required_field_triggers_review() {
        // Plumbing requires a service address
        let mut event = ExtractedEvent::new("Pipe repair", "Kitchen sink leak");
        event.confidence_score = 0.9;

        let rules = IndustryRules::for_industry(Some(Industry::Plumbing));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        assert!(classification.needs_review);
        assert!(classification.triggers.iter().any(|t| matches!(
            t,
            ReviewTrigger::MissingRequiredField(EventField::ServiceAddress)
        )));
    }

    #[test]
    fn test_multiple_triggers_accumulate() {
        let mut event = ExtractedEvent::new("Checkup", "Annual physical");
        event.customer_name = Some("Jane Roe".to_string());
        event.confidence_score = 0.2;

        let rules = IndustryRules::for_industry(Some(Industry::Medical));
        let classification = RuleEngine::classify(&event, rules, 0.6);

        assert!(classification.needs_review);
        assert!(classification.triggers.len() >= 2);
    }

    #[test]
    fn test_universal_rules_for_unknown_industry() {
        let mut event = ExtractedEvent::new("Urgent catering order", "Wedding this weekend");
        event.urgency = Urgency::Low;

        let rules = IndustryRules::for_industry(Industry::parse("catering"));
        let classification = RuleEngine::classify(&event, rules, 0.5);

        // "urgent" is a universal keyword
        assert_eq!(classification.urgency, Urgency::Emergency);
    }
}
