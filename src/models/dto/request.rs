use serde::Deserialize;
use validator::Validate;

/// Body of a form submission. Every field is optional on the wire so that
/// an empty contact reaches intake and gets the variant's own message.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitLeadRequest {
    #[serde(default)]
    #[validate(length(max = 320, message = "Contact is too long"))]
    pub contact: String,

    #[serde(default, alias = "budgetTier")]
    pub budget_tier: Option<String>,

    #[serde(default)]
    pub regions: Vec<String>,

    #[serde(default)]
    pub vibe: String,

    #[serde(default, alias = "incomeSource")]
    pub income_source: Option<String>,

    #[serde(default, alias = "currentBurn")]
    #[validate(range(min = 1, message = "Monthly burn must be positive"))]
    pub current_burn: Option<u32>,
}
