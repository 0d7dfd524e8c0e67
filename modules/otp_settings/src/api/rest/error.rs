//! RFC-9457 Problem Details for failed updates

use crate::contract::{OperationOutcome, OtpSettingsError, UpdateStrategy};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Request path the problem occurred on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    fn with_status(status: StatusCode, title: &str, detail: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.to_owned(),
            status: status.as_u16(),
            detail: Some(detail.into()),
            instance: None,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, "Validation Error", detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
    }

    pub fn at(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Store errors are already logged by the service; the detail is the
/// caller-facing outcome message
pub fn map_update_error(error: OtpSettingsError, strategy: UpdateStrategy) -> Problem {
    let outcome = OperationOutcome::failed_update(strategy, &error);
    match error {
        OtpSettingsError::Validation { .. } => Problem::bad_request(outcome.message),
        OtpSettingsError::Store { .. } | OtpSettingsError::Retrieval { .. } => {
            Problem::internal(outcome.message)
        }
    }
}

/// Bodies that are not a well-typed update list
pub fn map_json_rejection(rejection: JsonRejection) -> Problem {
    tracing::debug!(error = %rejection, "Rejected OTP settings update body");
    Problem::bad_request(rejection.body_text())
}
