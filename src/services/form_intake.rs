use validator::{Validate, ValidateEmail};

use crate::{
    errors::{AppError, AppResult, Severity},
    models::{
        domain::{
            variant::{ChoiceField, ContactKind, ShortContactPolicy},
            LeadSubmission, VariantDescriptor,
        },
        dto::{request::SubmitLeadRequest, response::Notice},
    },
};

/// A submission that cleared intake, plus any advisory warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Intake {
    pub submission: LeadSubmission,
    pub notices: Vec<Notice>,
}

fn contact_meets_floor(variant: &VariantDescriptor, contact: &str) -> bool {
    if contact.chars().count() < variant.contact.min_length {
        return false;
    }
    match variant.contact.kind {
        ContactKind::Phone => true,
        ContactKind::Email => contact.validate_email(),
    }
}

fn pick_choice(
    field_name: &str,
    options: &ChoiceField,
    value: Option<String>,
) -> AppResult<String> {
    match value {
        Some(v) if options.contains(&v) => Ok(v),
        Some(v) => Err(AppError::ValidationError(format!(
            "'{}' is not a valid {}",
            v, field_name
        ))),
        None => options.first().map(str::to_string).ok_or_else(|| {
            AppError::ValidationError(format!("no {} options configured", field_name))
        }),
    }
}

/// Turns a raw request into a submission for the given variant.
///
/// Contact checks run first: empty is `MissingContact`, below the floor is
/// `InvalidContactFormat` (returned under the halt policy, recorded as a
/// notice under the advisory policy). Catalog fields not in the variant's
/// lists are rejected; omitted single choices fall back to the first option.
pub fn prepare(variant: &VariantDescriptor, request: SubmitLeadRequest) -> AppResult<Intake> {
    let contact = request.contact.trim().to_string();
    let mut notices = Vec::new();

    if contact.is_empty() {
        return Err(AppError::MissingContact(variant.contact.missing_message.clone()));
    }

    if !contact_meets_floor(variant, &contact) {
        let message = variant.contact.format_message.clone();
        match variant.contact.short_contact_policy {
            ShortContactPolicy::Halt => return Err(AppError::InvalidContactFormat(message)),
            ShortContactPolicy::Advisory => notices.push(Notice {
                kind: "INVALID_CONTACT_FORMAT",
                severity: Severity::Warning,
                message,
            }),
        }
    }

    request.validate()?;

    let budget_tier = pick_choice("budget tier", &variant.budget, request.budget_tier)?;

    for region in &request.regions {
        if !variant.regions.contains(region) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid region",
                region
            )));
        }
    }

    let income_source = match &variant.income_sources {
        Some(catalog) => Some(pick_choice("income source", catalog, request.income_source)?),
        None => None,
    };

    let current_burn = match &variant.current_burn {
        Some(burn) => {
            let value = request.current_burn.unwrap_or(burn.default);
            if value < burn.min {
                return Err(AppError::ValidationError(format!(
                    "monthly spend must be at least {}",
                    burn.min
                )));
            }
            Some(value)
        }
        None => None,
    };

    Ok(Intake {
        submission: LeadSubmission {
            contact,
            budget_tier,
            regions: request.regions,
            vibe: request.vibe,
            income_source,
            current_burn,
        },
        notices,
    })
}
