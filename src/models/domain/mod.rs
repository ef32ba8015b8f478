pub mod lead_submission;
pub mod variant;
pub use lead_submission::{LeadRow, LeadSubmission};
pub use variant::{SinkPolicy, VariantDescriptor};
