pub mod lead_sink;

pub use lead_sink::{GoogleSheetsLeadSink, LeadSink, SpreadsheetTarget};
