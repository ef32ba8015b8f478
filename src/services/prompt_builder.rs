use crate::{
    constants::prompts::{
        DEFAULT_CLOSING, OUTPUT_SCHEMA, RECOMMENDATION_COUNT_INSTRUCTION, SAFETY_PROTOCOL,
    },
    models::domain::{LeadSubmission, VariantDescriptor},
};

const NO_REGIONS: &str = "No preference selected";
const NO_VIBE: &str = "(not provided)";

/// Renders the single user message sent to the completion service.
///
/// Pure: the same variant and submission always produce the same prompt.
/// Every submitted value is echoed verbatim, and the safety protocol is
/// always included regardless of the regions selected.
pub fn build_prompt(variant: &VariantDescriptor, submission: &LeadSubmission) -> String {
    let template = &variant.prompt;

    let regions = if submission.regions.is_empty() {
        NO_REGIONS.to_string()
    } else {
        submission.regions_joined()
    };
    let vibe = if submission.vibe.is_empty() {
        NO_VIBE
    } else {
        submission.vibe.as_str()
    };

    let mut inputs = vec![
        format!("- Budget: {}", submission.budget_tier),
        format!("- Regions: {}", regions),
        format!("- {}: {}", template.vibe_label, vibe),
    ];
    if let Some(income) = &submission.income_source {
        inputs.push(format!("- Income source: {}", income));
    }
    if let Some(burn) = submission.current_burn {
        inputs.push(format!("- Current monthly spend (USD): {}", burn));
    }
    inputs.push(format!("- Contact channel: {}", submission.contact));

    let closing = template.closing.as_deref().unwrap_or(DEFAULT_CLOSING);

    format!(
        "Act as {persona}.\n\
         User Input:\n{inputs}\n\n\
         Task: {task}\n{count}\n\n\
         {safety}\n\n\
         {schema}\n\n\
         {closing}",
        persona = template.persona,
        inputs = inputs.join("\n"),
        task = template.task,
        count = RECOMMENDATION_COUNT_INSTRUCTION,
        safety = SAFETY_PROTOCOL,
        schema = OUTPUT_SCHEMA,
        closing = closing,
    )
}
