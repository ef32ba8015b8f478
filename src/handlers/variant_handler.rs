use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{FormSchemaDto, VariantSummaryDto},
};

#[get("/api/variants")]
pub async fn list_variants(state: web::Data<AppState>) -> HttpResponse {
    let variants: Vec<VariantSummaryDto> = state
        .variants
        .all()
        .iter()
        .map(VariantSummaryDto::from)
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "default": state.variants.default_id(),
        "variants": variants,
    }))
}

#[get("/api/variants/{id}")]
pub async fn get_variant_form(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let variant = state.variants.get(&id)?;
    Ok(HttpResponse::Ok().json(FormSchemaDto::from(variant)))
}
