use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::SinkPolicy,
        dto::{request::SubmitLeadRequest, response::SubmissionOutcome},
    },
    repositories::LeadSink,
    services::{
        completion_service::CompletionClient, form_intake, prompt_builder::build_prompt,
        safety_audit::audit_completion, variant_registry::VariantRegistry,
    },
};

/// Runs one form submission end to end: intake, lead capture, prompt,
/// completion, safety audit.
pub struct LeadService {
    variants: Arc<VariantRegistry>,
    sink: Arc<dyn LeadSink>,
    completion: Option<Arc<dyn CompletionClient>>,
}

impl LeadService {
    /// `completion` is `None` when no API key is configured; every
    /// submission then stops with a configuration error.
    pub fn new(
        variants: Arc<VariantRegistry>,
        sink: Arc<dyn LeadSink>,
        completion: Option<Arc<dyn CompletionClient>>,
    ) -> Self {
        Self {
            variants,
            sink,
            completion,
        }
    }

    pub fn completion_configured(&self) -> bool {
        self.completion.is_some()
    }

    pub async fn submit(
        &self,
        variant_id: &str,
        request: SubmitLeadRequest,
    ) -> AppResult<SubmissionOutcome> {
        let variant = self.variants.get(variant_id)?;
        let intake = form_intake::prepare(variant, request)?;
        let submission = intake.submission;

        let completion = self.completion.as_ref().ok_or_else(|| {
            AppError::ConfigurationError("API Key missing. Check server configuration.".to_string())
        })?;

        log::info!(
            "Lead for variant '{}' from {}",
            variant.id,
            submission.masked_contact()
        );

        let lead_captured = match self.sink.append(submission.to_row()).await {
            Ok(()) => true,
            Err(e) => match variant.sink_policy {
                SinkPolicy::BestEffort => {
                    log::warn!("Lead capture failed for variant '{}', continuing: {}", variant.id, e);
                    false
                }
                SinkPolicy::Required => {
                    log::error!("Lead capture failed for variant '{}': {}", variant.id, e);
                    return Err(e);
                }
            },
        };

        let prompt = build_prompt(variant, &submission);
        let text = completion.complete(&prompt).await.map_err(|e| {
            log::error!("Completion failed for variant '{}': {}", variant.id, e);
            e
        })?;

        let (markdown, safety) = audit_completion(&text);
        if safety.injected_warning {
            log::warn!(
                "Completion mentioned {:?} without a security warning; warning prepended",
                safety.flagged_locations
            );
        }

        Ok(SubmissionOutcome {
            variant_id: variant.id.clone(),
            headline: variant.success_message.clone(),
            markdown,
            notices: intake.notices,
            lead_captured,
            safety,
            call_to_action: variant.call_to_action.clone(),
        })
    }
}
