pub mod health_handler;
pub mod lead_handler;
pub mod variant_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use lead_handler::{submit_default_lead, submit_lead};
pub use variant_handler::{get_variant_form, list_variants};

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_variants)
        .service(get_variant_form)
        .service(submit_lead)
        .service(submit_default_lead);
}
