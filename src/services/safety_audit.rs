use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::prompts::FALLBACK_SAFETY_WARNING;

static FLAGGED_LOCATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(colombia|medell[ií]n|bogot[aá])\b")
        .expect("FLAGGED_LOCATION_REGEX is a valid regex pattern")
});

/// The marker text without its emoji, which models sometimes drop.
const WARNING_MARKER_TEXT: &str = "SECURITY WARNING:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SafetyAudit {
    /// Flagged names found in the completion, first spelling seen, in order.
    pub flagged_locations: Vec<String>,
    pub warning_present: bool,
    pub injected_warning: bool,
}

/// Checks that a completion mentioning a flagged location carries the
/// warning block, prepending one when the model left it out.
pub fn audit_completion(text: &str) -> (String, SafetyAudit) {
    let mut flagged_locations: Vec<String> = Vec::new();
    for found in FLAGGED_LOCATION_REGEX.find_iter(text) {
        let name = found.as_str();
        if !flagged_locations
            .iter()
            .any(|seen| seen.to_lowercase() == name.to_lowercase())
        {
            flagged_locations.push(name.to_string());
        }
    }

    let warning_present = text.contains(WARNING_MARKER_TEXT);
    let injected_warning = !flagged_locations.is_empty() && !warning_present;

    let markdown = if injected_warning {
        format!("{}\n\n{}", FALLBACK_SAFETY_WARNING, text)
    } else {
        text.to_string()
    };

    (
        markdown,
        SafetyAudit {
            flagged_locations,
            warning_present,
            injected_warning,
        },
    )
}
