//! Request types and prompt assembly for one extraction call

use callscribe_domain::{CallerInfo, ExtractionContext, Industry};

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::prompt::PromptBuilder;

/// Request to extract events from a call transcription
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Transcribed call text
    pub transcription: String,

    /// Free-form industry tag from the caller's account settings
    pub industry: Option<String>,

    /// Telephony metadata for the call
    pub caller_info: Option<CallerInfo>,

    /// Optional prompt context
    pub context: Option<ExtractionContext>,
}

impl ExtractionRequest {
    /// Create a request with just a transcription
    pub fn new(transcription: impl Into<String>) -> Self {
        Self {
            transcription: transcription.into(),
            industry: None,
            caller_info: None,
            context: None,
        }
    }

    /// Set the industry tag
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Attach caller metadata
    pub fn with_caller_info(mut self, caller_info: CallerInfo) -> Self {
        self.caller_info = Some(caller_info);
        self
    }

    /// Attach extraction context
    pub fn with_context(mut self, context: ExtractionContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Parse the industry tag into the closed enum
    ///
    /// Unrecognized tags yield `None`, selecting universal handling.
    pub fn parsed_industry(&self) -> Option<Industry> {
        self.industry.as_deref().and_then(Industry::parse)
    }
}

/// The composed system and user prompts for one model call
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionPrompts {
    /// System prompt: extraction contract, industry guidance, schema
    pub system_prompt: String,

    /// User prompt: the transcription plus caller metadata
    pub user_prompt: String,
}

/// Compose system and user prompts from a request
///
/// Fails with [`ExtractorError::InvalidInput`] when the transcription is
/// empty or whitespace-only. Caller metadata is appended as labeled context
/// lines, explicitly marked as routing metadata so the model never treats
/// it as confirmed event data.
pub fn build_prompts(
    request: &ExtractionRequest,
    config: &ExtractorConfig,
) -> Result<ExtractionPrompts, ExtractorError> {
    if request.transcription.trim().is_empty() {
        return Err(ExtractorError::InvalidInput(
            "transcription is empty".to_string(),
        ));
    }

    let mut builder = PromptBuilder::new(request.parsed_industry())
        .with_context_calls_limit(config.context_calls_limit);
    if let Some(context) = &request.context {
        builder = builder.with_context(context.clone());
    }
    let system_prompt = builder.build();

    let mut user_prompt = String::from("Call transcription:\n---\n");
    user_prompt.push_str(&request.transcription);
    user_prompt.push_str("\n---\n");

    if let Some(caller_info) = &request.caller_info {
        user_prompt.push_str(&format!(
            "\nCall routing metadata (informational only, not confirmed event data):\n- Caller number: {}\n- Business line: {}\n",
            caller_info.from, caller_info.to
        ));
    }

    Ok(ExtractionPrompts {
        system_prompt,
        user_prompt,
    })
}
