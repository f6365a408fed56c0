//! HTTP error response mapping.

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use restricted_domain::error::{RestrictedError, ValidationError};

use crate::alert::Alerts;

/// JSON problem body returned by API endpoints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProblemBody {
    title: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_key: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Maps [`RestrictedError`] to an HTTP response with appropriate status code.
pub struct ApiError {
    error: RestrictedError,
    headers: HeaderMap,
}

impl ApiError {
    /// Client shape error carrying the `x-{app}-error` alert headers.
    #[must_use]
    pub fn rejected(alerts: &Alerts, err: ValidationError) -> Self {
        Self {
            headers: alerts.failure(&err),
            error: err.into(),
        }
    }
}

impl From<RestrictedError> for ApiError {
    fn from(error: RestrictedError) -> Self {
        Self {
            error,
            headers: HeaderMap::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.error {
            RestrictedError::Validation(err) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ProblemBody {
                    title: err.to_string(),
                    status: status.as_u16(),
                    field: Some(err.field()),
                    error_key: Some(err.error_key()),
                    message: Some(format!("error.{}", err.error_key())),
                };
                (status, self.headers, Json(body)).into_response()
            }
            RestrictedError::NotFound(err) => {
                tracing::debug!(%err, "resource not found");
                (StatusCode::NOT_FOUND, self.headers).into_response()
            }
            RestrictedError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ProblemBody {
                    title: "internal server error".to_string(),
                    status: status.as_u16(),
                    field: None,
                    error_key: None,
                    message: None,
                };
                (status, self.headers, Json(body)).into_response()
            }
        }
    }
}
