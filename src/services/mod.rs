pub mod completion_service;
pub mod form_intake;
pub mod http_helpers;
pub mod lead_service;
pub mod prompt_builder;
pub mod safety_audit;
pub mod variant_registry;
