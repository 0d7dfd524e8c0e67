//! Route registration and OpenAPI documentation

use super::{
    dto::*,
    error::{map_json_rejection, Problem},
    handlers,
};
use crate::domain::Service;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI document for the OTP settings endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_settings,
        handlers::get_raw_settings,
        handlers::update_settings,
        handlers::update_settings_direct
    ),
    components(schemas(
        OtpSettingDto,
        UpdateOtpSettingRequest,
        SettingsListResponse,
        OperationOutcomeDto,
        Problem
    )),
    tags((name = "otp-settings", description = "Per-action OTP notification channels"))
)]
pub struct ApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        .route("/settings", get(get_settings_handler))
        .route("/settings/raw", get(get_raw_settings_handler))
        .route("/settings/update", post(update_settings_handler))
        .route("/settings/updateDirect", post(update_settings_direct_handler))
        .route("/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Json<SettingsListResponse> {
    handlers::get_settings(service).await
}

async fn get_raw_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Json<SettingsListResponse> {
    handlers::get_raw_settings(service).await
}

async fn update_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<Vec<UpdateOtpSettingRequest>>, JsonRejection>,
) -> Result<Json<OperationOutcomeDto>, Problem> {
    let json = json.map_err(|e| map_json_rejection(e).at("/settings/update"))?;
    handlers::update_settings(service, json).await
}

async fn update_settings_direct_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<Vec<UpdateOtpSettingRequest>>, JsonRejection>,
) -> Result<Json<OperationOutcomeDto>, Problem> {
    let json = json.map_err(|e| map_json_rejection(e).at("/settings/updateDirect"))?;
    handlers::update_settings_direct(service, json).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
