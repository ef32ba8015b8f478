use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Phone,
    Email,
}

/// What happens when the contact is present but below the format floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortContactPolicy {
    /// Show the warning and stop.
    Halt,
    /// Show the warning and keep going.
    Advisory,
}

/// What happens when the lead sink fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkPolicy {
    /// Log the failure and continue to the recommendation.
    #[default]
    BestEffort,
    /// Surface the failure and stop before the recommendation.
    Required,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactField {
    pub kind: ContactKind,
    pub label: String,
    pub placeholder: String,
    pub caption: String,
    pub min_length: usize,
    pub short_contact_policy: ShortContactPolicy,
    pub missing_message: String,
    pub format_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChoiceField {
    pub label: String,
    pub options: Vec<String>,
}

impl ChoiceField {
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }

    pub fn first(&self) -> Option<&str> {
        self.options.first().map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextField {
    pub label: String,
    pub placeholder: String,
}

/// Monthly expense input. `step` only drives the form control.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BurnField {
    pub label: String,
    pub min: u32,
    pub default: u32,
    pub step: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromptTemplate {
    /// Completes "Act as ...".
    pub persona: String,
    pub task: String,
    /// Label the vibe is echoed under, e.g. "Vision".
    pub vibe_label: String,
    #[serde(default)]
    pub closing: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub link_label: String,
    pub url: String,
}

/// Everything that differs between flavours of the lead form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VariantDescriptor {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub contact: ContactField,
    pub budget: ChoiceField,
    pub regions: ChoiceField,
    pub vibe: TextField,
    #[serde(default)]
    pub income_sources: Option<ChoiceField>,
    #[serde(default)]
    pub current_burn: Option<BurnField>,
    pub prompt: PromptTemplate,
    #[serde(default)]
    pub sink_policy: SinkPolicy,
    pub submit_label: String,
    pub progress_message: String,
    pub success_message: String,
    pub call_to_action: CallToAction,
}

impl VariantDescriptor {
    /// Checks that the catalogs can actually back a form.
    pub fn check(&self) -> AppResult<()> {
        let invalid = |reason: &str| {
            Err(AppError::ValidationError(format!(
                "variant '{}' {}",
                self.id, reason
            )))
        };

        if self.id.trim().is_empty() {
            return invalid("has an empty id");
        }
        if self.budget.options.is_empty() {
            return invalid("has no budget tiers");
        }
        if let Some(income) = &self.income_sources {
            if income.options.is_empty() {
                return invalid("has an empty income source catalog");
            }
        }
        if let Some(burn) = &self.current_burn {
            if burn.min == 0 || burn.default < burn.min {
                return invalid("has a current burn default below its minimum");
            }
        }
        Ok(())
    }
}
