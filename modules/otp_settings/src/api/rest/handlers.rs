//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_update_error, Problem},
};
use crate::contract::{OperationOutcome, OtpSettingUpdate, UpdateStrategy};
use crate::domain::Service;
use axum::Json;
use std::sync::Arc;

const LOAD_ERROR_MESSAGE: &str = "Error loading OTP settings. Please try again.";
const RETRIEVE_ERROR_MESSAGE: &str = "Error retrieving OTP settings";

// ===== Read Handlers =====

/// Current settings, seeded on first use
///
/// A store failure still answers 200 with an empty list and `success=false`.
#[utoipa::path(
    get,
    path = "/settings",
    tag = "otp-settings",
    responses((status = 200, description = "Current OTP settings", body = SettingsListResponse))
)]
pub async fn get_settings(service: Arc<Service>) -> Json<SettingsListResponse> {
    match service.get_settings().await {
        Ok(settings) => Json(SettingsListResponse::ok(settings)),
        Err(_) => Json(SettingsListResponse::failed(LOAD_ERROR_MESSAGE)),
    }
}

/// Settings as stored, for programmatic consumers
#[utoipa::path(
    get,
    path = "/settings/raw",
    tag = "otp-settings",
    responses((status = 200, description = "Stored OTP settings", body = SettingsListResponse))
)]
pub async fn get_raw_settings(service: Arc<Service>) -> Json<SettingsListResponse> {
    match service.list_settings().await {
        Ok(settings) => Json(SettingsListResponse::ok(settings)),
        Err(_) => Json(SettingsListResponse::failed(RETRIEVE_ERROR_MESSAGE)),
    }
}

// ===== Update Handlers =====

/// Update flags by reading and saving whole records
#[utoipa::path(
    post,
    path = "/settings/update",
    tag = "otp-settings",
    request_body = [UpdateOtpSettingRequest],
    responses(
        (status = 200, description = "Settings updated", body = OperationOutcomeDto),
        (status = 400, description = "Malformed update", body = Problem),
        (status = 500, description = "Store failure", body = Problem)
    )
)]
pub async fn update_settings(
    service: Arc<Service>,
    Json(body): Json<Vec<UpdateOtpSettingRequest>>,
) -> Result<Json<OperationOutcomeDto>, Problem> {
    apply_update(service, UpdateStrategy::RecordSemantics, body, "/settings/update").await
}

/// Update flags with parameterized statements in one transaction
#[utoipa::path(
    post,
    path = "/settings/updateDirect",
    tag = "otp-settings",
    request_body = [UpdateOtpSettingRequest],
    responses(
        (status = 200, description = "Settings updated", body = OperationOutcomeDto),
        (status = 400, description = "Malformed update", body = Problem),
        (status = 500, description = "Store failure, nothing applied", body = Problem)
    )
)]
pub async fn update_settings_direct(
    service: Arc<Service>,
    Json(body): Json<Vec<UpdateOtpSettingRequest>>,
) -> Result<Json<OperationOutcomeDto>, Problem> {
    apply_update(
        service,
        UpdateStrategy::DirectStatement,
        body,
        "/settings/updateDirect",
    )
    .await
}

async fn apply_update(
    service: Arc<Service>,
    strategy: UpdateStrategy,
    body: Vec<UpdateOtpSettingRequest>,
    instance: &str,
) -> Result<Json<OperationOutcomeDto>, Problem> {
    let updates = body
        .into_iter()
        .map(OtpSettingUpdate::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| map_update_error(e, strategy).at(instance))?;

    service
        .update(strategy, &updates)
        .await
        .map_err(|e| map_update_error(e, strategy).at(instance))?;

    Ok(Json(
        OperationOutcome::success(strategy.success_message()).into(),
    ))
}
