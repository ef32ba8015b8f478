use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    errors::Severity,
    models::domain::variant::{CallToAction, ContactKind, VariantDescriptor},
    services::safety_audit::SafetyAudit,
};

/// A message for the visitor that did not stop the flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: &'static str,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub variant_id: String,
    pub headline: String,
    /// Completion text as returned, unless the safety audit had to prepend a warning.
    pub markdown: String,
    pub notices: Vec<Notice>,
    pub lead_captured: bool,
    pub safety: SafetyAudit,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantSummaryDto {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub contact_kind: ContactKind,
}

impl From<&VariantDescriptor> for VariantSummaryDto {
    fn from(variant: &VariantDescriptor) -> Self {
        VariantSummaryDto {
            id: variant.id.clone(),
            title: variant.title.clone(),
            tagline: variant.tagline.clone(),
            contact_kind: variant.contact.kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    SingleSelect,
    MultiSelect,
    TextArea,
    Text,
    Number,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormFieldDto {
    pub name: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

impl FormFieldDto {
    fn new(name: &'static str, label: &str, kind: FieldKind) -> Self {
        FormFieldDto {
            name,
            label: label.to_string(),
            kind,
            required: false,
            options: Vec::new(),
            default: None,
            placeholder: None,
            caption: None,
            min: None,
            step: None,
        }
    }
}

/// What a front end needs to render one variant's form. The prompt
/// template stays server-side.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchemaDto {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub submit_label: String,
    pub progress_message: String,
    pub fields: Vec<FormFieldDto>,
}

impl From<&VariantDescriptor> for FormSchemaDto {
    fn from(variant: &VariantDescriptor) -> Self {
        let mut fields = Vec::new();

        let mut budget = FormFieldDto::new("budget_tier", &variant.budget.label, FieldKind::SingleSelect);
        budget.options = variant.budget.options.clone();
        budget.default = variant.budget.first().map(|b| json!(b));
        fields.push(budget);

        let mut regions = FormFieldDto::new("regions", &variant.regions.label, FieldKind::MultiSelect);
        regions.options = variant.regions.options.clone();
        fields.push(regions);

        if let Some(income) = &variant.income_sources {
            let mut field = FormFieldDto::new("income_source", &income.label, FieldKind::SingleSelect);
            field.options = income.options.clone();
            field.default = income.first().map(|i| json!(i));
            fields.push(field);
        }

        if let Some(burn) = &variant.current_burn {
            let mut field = FormFieldDto::new("current_burn", &burn.label, FieldKind::Number);
            field.default = Some(json!(burn.default));
            field.min = Some(burn.min);
            field.step = Some(burn.step);
            fields.push(field);
        }

        let mut vibe = FormFieldDto::new("vibe", &variant.vibe.label, FieldKind::TextArea);
        vibe.placeholder = Some(variant.vibe.placeholder.clone());
        fields.push(vibe);

        let mut contact = FormFieldDto::new("contact", &variant.contact.label, FieldKind::Text);
        contact.required = true;
        contact.placeholder = Some(variant.contact.placeholder.clone());
        contact.caption = Some(variant.contact.caption.clone());
        fields.push(contact);

        FormSchemaDto {
            id: variant.id.clone(),
            title: variant.title.clone(),
            tagline: variant.tagline.clone(),
            submit_label: variant.submit_label.clone(),
            progress_message: variant.progress_message.clone(),
            fields,
        }
    }
}
