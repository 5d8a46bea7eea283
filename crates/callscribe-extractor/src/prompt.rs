//! Prompt library for call-transcript event extraction
//!
//! A base/universal prompt establishes the extraction contract and output
//! schema; per-industry sections layer on domain vocabulary and urgency
//! heuristics. Composition is pure string work: same inputs, byte-identical
//! prompt, no I/O.

use callscribe_domain::{ExtractionContext, Industry};

/// Builds system prompts for the extraction model
pub struct PromptBuilder {
    industry: Option<Industry>,
    context: Option<ExtractionContext>,
    context_calls_limit: usize,
}

impl PromptBuilder {
    /// Create a builder for the given industry
    ///
    /// `None` (including any unrecognized tag parsed upstream) selects the
    /// universal prompt with no industry section appended.
    pub fn new(industry: Option<Industry>) -> Self {
        Self {
            industry,
            context: None,
            context_calls_limit: 5,
        }
    }

    /// Attach caller-supplied context (timezone, hours, prior calls)
    pub fn with_context(mut self, context: ExtractionContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Cap how many previous-call summaries are included
    pub fn with_context_calls_limit(mut self, limit: usize) -> Self {
        self.context_calls_limit = limit;
        self
    }

    /// Build the complete system prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Universal extraction instructions
        prompt.push_str(BASE_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Industry-specific guidance (omitted for universal handling)
        if let Some(industry) = self.industry {
            prompt.push_str(industry_section(industry));
            prompt.push_str("\n\n");
        }

        // 3. Business context
        if let Some(context) = &self.context {
            if !context.is_empty() {
                prompt.push_str(&self.render_context(context));
                prompt.push('\n');
            }
        }

        // 4. Output schema reminder
        prompt.push_str(RESPONSE_TEMPLATE);

        prompt
    }

    fn render_context(&self, context: &ExtractionContext) -> String {
        let mut block = String::from("Business context:\n");

        if let Some(timezone) = &context.user_timezone {
            block.push_str(&format!("- Timezone: {}\n", timezone));
        }
        if let Some(location) = &context.user_location {
            block.push_str(&format!("- Location: {}\n", location));
        }
        if let Some(hours) = &context.business_hours {
            block.push_str(&format!("- Business hours: {}\n", hours));
        }
        if !context.previous_calls.is_empty() {
            block.push_str("- Recent calls from this customer:\n");
            for call in context.previous_calls.iter().take(self.context_calls_limit) {
                block.push_str(&format!("  - {}\n", call));
            }
        }
        if let Some(instructions) = &context.special_instructions {
            block.push_str(&format!("- Owner instructions: {}\n", instructions));
        }

        block
    }
}

/// Industry guidance section for the given vertical
fn industry_section(industry: Industry) -> &'static str {
    match industry {
        Industry::Plumbing => PLUMBING_SECTION,
        Industry::Legal => LEGAL_SECTION,
        Industry::Medical => MEDICAL_SECTION,
        Industry::RealEstate => REAL_ESTATE_SECTION,
    }
}

const BASE_INSTRUCTIONS: &str = r#"You are an appointment extraction engine for business phone calls. Analyze the call transcription and extract every calendar-worthy event: appointments, service calls, meetings, consultations, quote requests, and follow-ups.

Rules:
- Extract one entry per distinct commitment or request; do not merge separate requests
- Use only information stated in the call; never invent names, dates, or addresses
- Dates may be ISO (2025-03-14) or relative exactly as spoken ("tomorrow", "next Tuesday")
- Leave a field null when the call does not mention it
- Classify urgency as one of: low, medium, high, emergency
- Score confidence in [0.0, 1.0] for each event:
  - Explicitly confirmed time and service: 0.9-1.0
  - Clear request, some details missing: 0.7-0.9
  - Implied or tentative request: 0.4-0.7
  - Speculative mention: below 0.4
- Put your reasoning for each event in extraction_notes
- Summarize the whole call in call_summary and give a short call_topic label
- Set industry_detected to the business vertical the conversation suggests, or null"#;

const PLUMBING_SECTION: &str = r#"Industry guidance (plumbing):
- Typical events are service calls; prefer type "service_call" over "appointment"
- Always capture the service address when spoken; jobs cannot be dispatched without one
- Capture the problem as service_type ("burst pipe", "water heater replacement", "drain cleaning")
- Treat burst pipes, flooding, gas leaks, sewage backups, and total loss of water as emergencies
- Price talk is usually an estimate request; record amounts in estimated_price verbatim
- Typical job length is 60-120 minutes unless the caller says otherwise"#;

const LEGAL_SECTION: &str = r#"Industry guidance (legal):
- Typical events are consultations; prefer type "consultation"
- Always capture the client name; intake cannot proceed without it
- Note the matter type as service_type ("estate planning", "custody", "contract review")
- Treat arrests, custody situations, imminent court dates, and limitation deadlines as emergencies
- Client details are confidential; copy them into fields but never into call_summary
- Typical consultation length is 30-60 minutes"#;

const MEDICAL_SECTION: &str = r#"Industry guidance (medical):
- Typical events are appointments; capture the patient name whenever spoken
- Note the visit reason as service_type ("cleaning", "follow-up", "new patient exam")
- Treat severe pain, bleeding, chest pain, or breathing trouble as emergencies and say so in extraction_notes
- Patient details are protected information; copy them into fields but never into call_summary
- Typical visit length is 20-45 minutes"#;

const REAL_ESTATE_SECTION: &str = r#"Industry guidance (real estate):
- Typical events are showings and meetings; use type "meeting" for showings
- Always capture the property address as service_address
- Note buying, selling, or renting intent as service_type
- Treat same-day closings, expiring offers, and expiring pre-approvals as emergencies
- Record price points and budgets in estimated_price verbatim
- Typical showing length is 30-60 minutes"#;

const RESPONSE_TEMPLATE: &str = r#"Respond with a single JSON object and nothing else (no markdown fences, no prose):
{
  "events": [
    {
      "type": "appointment|service_call|meeting|consultation|quote|follow_up",
      "title": "short title",
      "description": "what was requested",
      "proposed_date": "2025-03-14 or relative text or null",
      "proposed_time": "14:00 or null",
      "duration_minutes": 60,
      "urgency": "low|medium|high|emergency",
      "customer_name": "name or null",
      "customer_phone": "phone or null",
      "customer_email": "email or null",
      "service_address": "address or null",
      "service_type": "service category or null",
      "estimated_price": "amount or null",
      "confidence_score": 0.85,
      "extraction_notes": "why this event was extracted"
    }
  ],
  "call_summary": "one-paragraph summary of the call",
  "call_topic": "short topic label",
  "industry_detected": "industry or null"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let context = ExtractionContext::new()
            .with_timezone("America/Chicago")
            .with_business_hours("Mon-Fri 8am-6pm");

        let first = PromptBuilder::new(Some(Industry::Plumbing))
            .with_context(context.clone())
            .build();
        let second = PromptBuilder::new(Some(Industry::Plumbing))
            .with_context(context)
            .build();

        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_includes_schema() {
        let prompt = PromptBuilder::new(None).build();

        assert!(prompt.contains("\"events\""));
        assert!(prompt.contains("confidence_score"));
        assert!(prompt.contains("call_summary"));
        assert!(prompt.contains("industry_detected"));
    }

    #[test]
    fn test_industry_section_appended() {
        let prompt = PromptBuilder::new(Some(Industry::Plumbing)).build();

        assert!(prompt.contains("Industry guidance (plumbing)"));
        assert!(prompt.contains("burst pipe"));
    }

    #[test]
    fn test_no_industry_falls_back_to_base_only() {
        let prompt = PromptBuilder::new(None).build();

        assert!(!prompt.contains("Industry guidance"));
        assert!(prompt.contains("appointment extraction engine"));
    }

    #[test]
    fn test_unrecognized_tag_gets_base_prompt() {
        // Unknown tags parse to None upstream; policy, not an error
        let industry = Industry::parse("taxidermy");
        let prompt = PromptBuilder::new(industry).build();

        assert!(!prompt.contains("Industry guidance"));
    }

    #[test]
    fn test_each_industry_has_distinct_section() {
        let mut prompts = Vec::new();
        for industry in Industry::ALL {
            prompts.push(PromptBuilder::new(Some(industry)).build());
        }

        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_context_rendered_when_present() {
        let context = ExtractionContext::new()
            .with_location("Austin, TX")
            .with_previous_calls(vec!["Asked for a water heater quote".to_string()])
            .with_special_instructions("Never book Fridays");

        let prompt = PromptBuilder::new(Some(Industry::Plumbing))
            .with_context(context)
            .build();

        assert!(prompt.contains("Business context:"));
        assert!(prompt.contains("Austin, TX"));
        assert!(prompt.contains("water heater quote"));
        assert!(prompt.contains("Never book Fridays"));
    }

    #[test]
    fn test_empty_context_adds_nothing() {
        let bare = PromptBuilder::new(None).build();
        let with_empty = PromptBuilder::new(None)
            .with_context(ExtractionContext::new())
            .build();

        assert_eq!(bare, with_empty);
    }

    #[test]
    fn test_previous_calls_respect_limit() {
        let calls: Vec<String> = (0..10).map(|i| format!("call number {}", i)).collect();
        let context = ExtractionContext::new().with_previous_calls(calls);

        let prompt = PromptBuilder::new(None)
            .with_context(context)
            .with_context_calls_limit(3)
            .build();

        assert!(prompt.contains("call number 0"));
        assert!(prompt.contains("call number 2"));
        assert!(!prompt.contains("call number 3"));
    }
}
