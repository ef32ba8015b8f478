use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::SubmitLeadRequest,
};

async fn run_submission(
    state: &AppState,
    req: &HttpRequest,
    variant_id: &str,
    request: SubmitLeadRequest,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(req).unwrap_or_else(|| "-".to_string());
    log::info!("[{}] Submission for variant '{}'", request_id, variant_id);

    match state.lead_service.submit(variant_id, request).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(outcome)),
        Err(e) => {
            log::info!("[{}] Submission rejected: {}", request_id, e.error_code());
            Err(e)
        }
    }
}

#[post("/api/variants/{id}/submissions")]
pub async fn submit_lead(
    state: web::Data<AppState>,
    req: HttpRequest,
    id: web::Path<String>,
    request: web::Json<SubmitLeadRequest>,
) -> Result<HttpResponse, AppError> {
    run_submission(&state, &req, &id, request.into_inner()).await
}

#[post("/api/submissions")]
pub async fn submit_default_lead(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<SubmitLeadRequest>,
) -> Result<HttpResponse, AppError> {
    let variant_id = state.variants.default_id().to_string();
    run_submission(&state, &req, &variant_id, request.into_inner()).await
}
