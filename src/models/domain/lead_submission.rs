use serde_json::{json, Value};

/// One visitor's intake values. Lives for a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadSubmission {
    pub contact: String,
    pub budget_tier: String,
    pub regions: Vec<String>,
    pub vibe: String,
    pub income_source: Option<String>,
    pub current_burn: Option<u32>,
}

/// A single spreadsheet row, cells in column order.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadRow {
    pub cells: Vec<Value>,
}

impl LeadSubmission {
    pub fn regions_joined(&self) -> String {
        self.regions.join(", ")
    }

    /// Contact, budget, regions, vibe, then the optional variant columns.
    pub fn to_row(&self) -> LeadRow {
        let mut cells = vec![
            json!(self.contact),
            json!(self.budget_tier),
            json!(self.regions_joined()),
            json!(self.vibe),
        ];
        if let Some(income) = &self.income_source {
            cells.push(json!(income));
        }
        if let Some(burn) = self.current_burn {
            cells.push(json!(burn));
        }
        LeadRow { cells }
    }

    /// Contact with everything but the last four characters hidden, for logs.
    pub fn masked_contact(&self) -> String {
        let chars: Vec<char> = self.contact.chars().collect();
        let visible = chars.len().min(4);
        let tail: String = chars[chars.len() - visible..].iter().collect();
        format!("***{}", tail)
    }
}
